pub mod clock;
pub mod qr_renderer;
pub mod random;

pub use clock::*;
pub use qr_renderer::*;
pub use random::*;
