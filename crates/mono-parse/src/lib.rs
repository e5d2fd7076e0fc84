mod error;
mod parse;
mod serialize;

pub use error::{FormatError, InvalidChangeset, MetadataError, Violation};
pub use parse::parse_changeset;
pub use serialize::serialize_changeset;
