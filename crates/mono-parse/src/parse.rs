use std::path::Path;

use mono_core::{BumpType, ChangeType, Changeset};
use serde_yml::Value;

use crate::error::{FormatError, InvalidChangeset, MetadataError, Violation};

pub(crate) const FRONT_MATTER_DELIMITER: &str = "---";
const FRONT_MATTER_END: &str = "...";

const MAX_INPUT_SIZE: usize = 100 * 1024 * 1024;

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}

/// Splits `content` into the metadata block and the remaining body. The
/// block opens with a line that is exactly `---` and closes with a line that
/// is exactly `---` or `...`.
fn extract_front_matter(content: &str) -> Result<(&str, &str), MetadataError> {
    let trimmed = content.trim_start();

    let mut lines = trimmed.split_inclusive('\n');
    let opening = lines.next().map(strip_line_ending);
    if opening != Some(FRONT_MATTER_DELIMITER) {
        return Err(MetadataError::MissingOpeningDelimiter);
    }

    let metadata_start = trimmed.len() - lines.clone().map(str::len).sum::<usize>();
    let mut offset = metadata_start;

    for line in lines {
        let bare = strip_line_ending(line);
        if bare == FRONT_MATTER_DELIMITER || bare == FRONT_MATTER_END {
            let metadata = &trimmed[metadata_start..offset];
            let body = &trimmed[offset + line.len()..];
            return Ok((metadata, body));
        }
        offset += line.len();
    }

    Err(MetadataError::MissingClosingDelimiter)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => "<non-scalar>".to_string(),
    }
}

fn read_metadata(metadata: &str) -> Result<(Option<String>, Option<String>), MetadataError> {
    if metadata.trim().is_empty() {
        return Ok((None, None));
    }

    let value: Value = serde_yml::from_str(metadata)?;
    let mapping = value.as_mapping().ok_or(MetadataError::NotAMapping)?;

    let bump = mapping.get("bump").map(scalar_to_string);
    let change_type = mapping.get("type").map(scalar_to_string);
    Ok((bump, change_type))
}

fn validate(
    bump: Option<String>,
    change_type: Option<String>,
) -> Result<(BumpType, ChangeType), InvalidChangeset> {
    let mut violations = Vec::new();

    let bump = match bump {
        None => {
            violations.push(Violation::MissingBump);
            None
        }
        Some(value) => value
            .parse::<BumpType>()
            .inspect_err(|_| violations.push(Violation::UnknownBump(value.clone())))
            .ok(),
    };

    let change_type = match change_type {
        None => {
            violations.push(Violation::MissingType);
            None
        }
        Some(value) => value
            .parse::<ChangeType>()
            .inspect_err(|_| violations.push(Violation::UnknownType(value.clone())))
            .ok(),
    };

    match (bump, change_type) {
        (Some(bump), Some(change_type)) => Ok((bump, change_type)),
        _ => Err(InvalidChangeset { violations }),
    }
}

/// Parses the contents of the changeset file at `path`.
///
/// # Errors
///
/// - [`FormatError::Metadata`] when the metadata block is missing or is not YAML.
/// - [`FormatError::Invalid`] listing every problem with `bump` and `type`.
/// - [`FormatError::EmptyMessage`] when no message follows the metadata.
#[must_use = "parsing result should be handled"]
pub fn parse_changeset(content: &str, path: &Path) -> Result<Changeset, FormatError> {
    if content.len() > MAX_INPUT_SIZE {
        return Err(FormatError::InputTooLarge {
            max_bytes: MAX_INPUT_SIZE,
        });
    }

    let (metadata, body) = extract_front_matter(content)?;
    let (bump, change_type) = read_metadata(metadata)?;
    let (bump, change_type) = validate(bump, change_type)?;

    let message = body.trim();
    if message.is_empty() {
        return Err(FormatError::EmptyMessage);
    }

    Ok(Changeset::from_file(path, bump, change_type, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Changeset, FormatError> {
        parse_changeset(content, Path::new("pkg/.changesets/test.md"))
    }

    fn violations(content: &str) -> Vec<Violation> {
        match parse(content) {
            Err(FormatError::Invalid(invalid)) => invalid.violations,
            other => panic!("expected invalid changeset, got {other:?}"),
        }
    }

    #[test]
    fn parses_bump_type_and_message() {
        let content = "---\nbump: minor\ntype: add\n---\n\nAdd a new feature.\n";

        let changeset = parse(content).expect("should parse");

        assert_eq!(changeset.bump, BumpType::Minor);
        assert_eq!(changeset.change_type, ChangeType::Add);
        assert_eq!(changeset.message, "Add a new feature.");
        assert_eq!(changeset.path(), Some(Path::new("pkg/.changesets/test.md")));
    }

    #[test]
    fn accepts_yaml_document_end_marker() {
        let content = "---\nbump: patch\ntype: fix\n...\n\nFix a bug.\n";

        let changeset = parse(content).expect("should parse");

        assert_eq!(changeset.change_type, ChangeType::Fix);
        assert_eq!(changeset.message, "Fix a bug.");
    }

    #[test]
    fn multiline_message_is_preserved() {
        let content =
            "---\nbump: major\ntype: remove\n---\n\nRemove the old API.\n\n- one\n- two\n";

        let changeset = parse(content).expect("should parse");

        assert_eq!(changeset.message, "Remove the old API.\n\n- one\n- two");
    }

    #[test]
    fn delimiter_inside_message_line_is_not_a_boundary() {
        let content = "---\nbump: patch\ntype: change\n---\n\nUse --- as a separator now.\n---\n";

        let changeset = parse(content).expect("should parse");

        assert!(changeset.message.starts_with("Use --- as a separator"));
        assert!(changeset.message.ends_with("---"));
    }

    #[test]
    fn windows_line_endings() {
        let content = "---\r\nbump: patch\r\ntype: security\r\n---\r\n\r\nPatch a CVE.\r\n";

        let changeset = parse(content).expect("should parse");

        assert_eq!(changeset.change_type, ChangeType::Security);
        assert_eq!(changeset.message, "Patch a CVE.");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let content = "---\nbump: patch\ntype: fix\nauthor: someone\n---\n\nFix.\n";
        assert!(parse(content).is_ok());
    }

    #[test]
    fn missing_type_reports_only_type() {
        let content = "---\nbump: minor\n---\n\nSomething.\n";

        let found = violations(content);

        assert_eq!(found, vec![Violation::MissingType]);
    }

    #[test]
    fn reports_every_violation_at_once() {
        let content = "---\nbump: huge\ntype: tweak\n---\n\nSomething.\n";

        let found = violations(content);

        assert_eq!(
            found,
            vec![
                Violation::UnknownBump("huge".into()),
                Violation::UnknownType("tweak".into())
            ]
        );
        let msg = parse(content).expect_err("invalid").to_string();
        assert!(msg.contains("huge") && msg.contains("tweak"));
    }

    #[test]
    fn empty_metadata_block_misses_both_keys() {
        let content = "---\n---\n\nSomething.\n";
        assert_eq!(
            violations(content),
            vec![Violation::MissingBump, Violation::MissingType]
        );
    }

    #[test]
    fn non_string_bump_is_unknown() {
        let content = "---\nbump: 3\ntype: fix\n---\n\nSomething.\n";
        assert_eq!(violations(content), vec![Violation::UnknownBump("3".into())]);
    }

    #[test]
    fn error_missing_opening_delimiter() {
        let content = "bump: patch\ntype: fix\n---\n\nFix.\n";

        let err = parse(content).expect_err("should fail");

        assert!(matches!(
            err,
            FormatError::Metadata(MetadataError::MissingOpeningDelimiter)
        ));
    }

    #[test]
    fn error_missing_closing_delimiter() {
        let content = "---\nbump: patch\ntype: fix\n\nFix.\n";

        let err = parse(content).expect_err("should fail");

        assert!(err.to_string().contains("closing"));
    }

    #[test]
    fn error_metadata_not_a_mapping() {
        let content = "---\n- patch\n- fix\n---\n\nFix.\n";

        let err = parse(content).expect_err("should fail");

        assert!(matches!(err, FormatError::Metadata(MetadataError::NotAMapping)));
    }

    #[test]
    fn error_empty_message() {
        let content = "---\nbump: patch\ntype: fix\n---\n\n   \n\t\n";

        let err = parse(content).expect_err("should fail");

        assert!(matches!(err, FormatError::EmptyMessage));
    }

    #[test]
    fn error_input_too_large() {
        let huge_content = "a".repeat(MAX_INPUT_SIZE + 1);

        let err = parse(&huge_content).expect_err("should fail");

        assert!(err.to_string().contains("maximum size"));
    }
}
