mod adapter;
mod custom;
mod elixir;
mod error;
mod files;
mod node;
mod ruby;

pub use adapter::ManifestAdapter;
pub use custom::{CustomAdapter, DEFAULT_VERSION_FILE};
pub use elixir::ElixirAdapter;
pub use error::ManifestError;
pub use node::NodeAdapter;
pub use ruby::RubyAdapter;

pub type Result<T> = std::result::Result<T, ManifestError>;
