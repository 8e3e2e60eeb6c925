pub mod config;
pub mod http;
pub mod report;
pub mod runner;
pub mod steps;
pub mod store;

// Re-export common items
pub use config::SuiteConfig;
pub use report::render_report_file;
pub use runner::run_suite;
