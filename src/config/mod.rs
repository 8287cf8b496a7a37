//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::KeeperPaths;
pub use settings::Settings;
