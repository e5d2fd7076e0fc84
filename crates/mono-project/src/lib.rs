mod config;
mod error;
mod package;
mod project;

pub const CONFIG_FILE: &str = "mono.yml";
pub const CHANGESETS_DIR: &str = ".changesets";

pub use config::{Config, Language};
pub use error::ProjectError;
pub use package::Package;
pub use project::{Project, ProjectKind, discover_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
