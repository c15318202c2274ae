pub mod analyze;
pub mod config;
mod context;
pub mod init;

pub use analyze::run_analyze;
pub use config::run_config;
pub use init::{generate_config_template, run_init, run_init_impl};
