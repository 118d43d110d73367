pub mod environment;
pub mod favicon;

pub use environment::{CONFIG_DIR_ENV, get_config_dir};
pub use favicon::favicon_url;
