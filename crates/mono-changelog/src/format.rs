use mono_core::ChangeType;

use crate::entry::{ChangelogEntry, CommitLinks, VersionRelease};

#[must_use]
pub fn format_version_header(version: &str) -> String {
    format!("## {version}")
}

/// One list item: commit attribution, bump and the message. Continuation
/// lines are indented to stay inside the item.
#[must_use]
pub fn format_entry(entry: &ChangelogEntry, links: Option<&CommitLinks>) -> String {
    let mut output = String::from("- ");

    for commit in &entry.commits {
        match links {
            Some(links) => {
                output.push('[');
                output.push_str(&commit.short_sha);
                output.push_str("](");
                output.push_str(&links.commit_url(&commit.sha));
                output.push(')');
            }
            None => output.push_str(&commit.short_sha),
        }
        output.push(' ');
    }

    output.push_str(entry.bump.as_str());
    output.push_str(" - ");

    let mut lines = entry.message.lines();
    if let Some(first) = lines.next() {
        output.push_str(first);
    }
    for line in lines {
        output.push('\n');
        if !line.trim().is_empty() {
            output.push_str("  ");
            output.push_str(line);
        }
    }

    output
}

/// Groups entries into one section per change type, in type order. Entries
/// keep their relative order within a section.
#[must_use]
pub fn format_entries(entries: &[ChangelogEntry], links: Option<&CommitLinks>) -> String {
    let mut output = String::new();

    for change_type in ChangeType::ALL {
        let section: Vec<&ChangelogEntry> = entries
            .iter()
            .filter(|e| e.change_type == change_type)
            .collect();
        if section.is_empty() {
            continue;
        }

        output.push_str("\n### ");
        output.push_str(change_type.label());
        output.push_str("\n\n");

        for entry in section {
            output.push_str(&format_entry(entry, links));
            output.push('\n');
        }
    }

    output
}

#[must_use]
pub fn format_version_release(release: &VersionRelease, links: Option<&CommitLinks>) -> String {
    let mut output = format_version_header(&release.version);
    output.push('\n');
    output.push_str(&format_entries(&release.entries, links));
    output
}
