mod error;
mod promote;
mod scheme;
mod version;

pub use error::VersionError;
pub use promote::promote;
pub use scheme::VersionScheme;
pub use version::{Prerelease, Version};

pub type Result<T> = std::result::Result<T, VersionError>;
