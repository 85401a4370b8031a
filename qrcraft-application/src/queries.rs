pub mod analytics_queries;
pub mod history_queries;
