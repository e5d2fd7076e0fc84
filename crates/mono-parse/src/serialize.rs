use mono_core::{BumpType, ChangeType};
use serde::Serialize;

use crate::error::FormatError;
use crate::parse::FRONT_MATTER_DELIMITER;

#[derive(Serialize)]
struct FrontMatterOutput {
    bump: BumpType,
    #[serde(rename = "type")]
    change_type: ChangeType,
}

/// Renders a changeset file in the canonical layout accepted by
/// [`parse_changeset`](crate::parse_changeset).
///
/// # Errors
///
/// Returns [`FormatError::EmptyMessage`] for a blank message.
#[must_use = "serialization result should be handled"]
pub fn serialize_changeset(
    bump: BumpType,
    change_type: ChangeType,
    message: &str,
) -> Result<String, FormatError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(FormatError::EmptyMessage);
    }

    let yaml = serde_yml::to_string(&FrontMatterOutput { bump, change_type })
        .map_err(FormatError::Serialize)?;

    let mut output = String::new();
    output.push_str(FRONT_MATTER_DELIMITER);
    output.push('\n');
    output.push_str(&yaml);
    output.push_str(FRONT_MATTER_DELIMITER);
    output.push_str("\n\n");
    output.push_str(message);
    output.push('\n');

    Ok(output)
}
