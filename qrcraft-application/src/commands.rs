pub mod export_commands;
pub mod history_commands;
pub mod scan_commands;
pub mod theme_commands;
