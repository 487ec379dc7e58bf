pub mod data;
pub mod io;
pub mod printing;

pub use data::{path_display, Config, ConfigKey, SettingError};
pub use io::ConfigError;
