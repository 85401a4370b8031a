pub mod context;
pub mod lifecycle;

pub use context::{AppContext, ContextOptions};
pub use lifecycle::run_console;

pub async fn run() -> anyhow::Result<()> {
    run_console(ContextOptions::default()).await
}
