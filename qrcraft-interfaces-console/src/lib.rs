pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;

pub use error::*;
pub use handlers::*;
pub use routes::*;
