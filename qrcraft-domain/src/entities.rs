// Domain entities
pub mod config;
pub mod generation_record;
pub mod history;
pub mod qr;
pub mod scan_analytics;
pub mod scan_event;

pub use config::*;
pub use generation_record::*;
pub use history::*;
pub use qr::*;
pub use scan_analytics::*;
pub use scan_event::*;
