use std::fmt::Write as _;

use mono_core::Changeset;
use mono_operations::operations::{PublishOutput, ReleasePlan, StatusOutput};

fn summary(changeset: &Changeset) -> &str {
    changeset.message.lines().next().unwrap_or_default()
}

fn write_changesets(output: &mut String, changesets: &[Changeset]) {
    for changeset in changesets {
        let _ = writeln!(
            output,
            "    - {} {}: {}",
            changeset.bump,
            changeset.change_type.as_str(),
            summary(changeset)
        );
    }
}

pub(crate) fn format_status(status: &StatusOutput) -> String {
    if !status.has_pending_releases() {
        return "No pending changesets.\n".to_string();
    }

    let mut output = String::from("Pending releases:\n");
    for package in &status.packages {
        let Some(next) = &package.next_version else {
            continue;
        };
        let bump = package.next_bump.map(|b| b.as_str()).unwrap_or_default();
        let _ = writeln!(output, "  {}: {} -> {} ({bump})", package.name, package.version, next);
        write_changesets(&mut output, &package.changesets);
    }

    let unchanged: Vec<String> = status
        .packages
        .iter()
        .filter(|p| p.next_version.is_none())
        .map(|p| format!("  {} ({})", p.name, p.version))
        .collect();
    if !unchanged.is_empty() {
        output.push_str("\nUnchanged:\n");
        for line in unchanged {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output
}

pub(crate) fn format_plan(plan: &ReleasePlan) -> String {
    let mut output = String::from("Dry run, nothing was changed. Would release:\n");
    for release in &plan.releases {
        let _ = writeln!(
            output,
            "  {}: {} -> {} (tag {})",
            release.name,
            release.formatted_current(),
            release.formatted_next(),
            release.tag
        );
    }
    for release in &plan.releases {
        let _ = write!(output, "\n{}/CHANGELOG.md:\n{}", release.name, release.changelog);
    }
    output
}

pub(crate) fn format_published(published: &PublishOutput) -> String {
    let mut output = String::from("Published:\n");
    for package in &published.packages {
        let _ = writeln!(output, "  {} {} ({})", package.name, package.version, package.tag);
    }
    let short_sha: String = published.commit.sha.chars().take(7).collect();
    let _ = writeln!(output, "Commit: {short_sha}");
    if !published.pushed {
        output.push_str("Not pushed (--no-push).\n");
    }
    output
}
