// Domain value objects
pub mod content_type;
pub mod device;
pub mod error_correction;
pub mod identifiers;
pub mod theme;

pub use content_type::*;
pub use device::*;
pub use error_correction::*;
pub use identifiers::*;
pub use theme::*;
