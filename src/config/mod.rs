mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{CONFIG_VERSION, Config, FilterConfig, ReportConfig};

pub(crate) use loader::validate_config_version;
