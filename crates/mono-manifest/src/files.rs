use std::path::{Path, PathBuf};

use regex::Regex;

use crate::{ManifestError, Result};

pub(crate) fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Files under `dir` matching `pattern`, sorted.
pub(crate) fn find(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let mut found: Vec<PathBuf> = glob::glob(&format!("{base}/{pattern}"))?
        .filter_map(std::result::Result::ok)
        .filter(|path| path.is_file())
        .collect();
    found.sort();
    Ok(found)
}

/// First file under `dir` matching `pattern`.
pub(crate) fn find_one(dir: &Path, pattern: &str) -> Result<PathBuf> {
    find(dir, pattern)?
        .into_iter()
        .next()
        .ok_or_else(|| ManifestError::FileNotFound {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
        })
}

/// Replaces capture group `group` of the first match of `regex`, leaving the
/// rest of `content` untouched.
pub(crate) fn replace_group(
    content: &str,
    regex: &Regex,
    group: usize,
    replacement: &str,
) -> Option<String> {
    let range = regex.captures(content)?.get(group)?.range();
    let mut updated = String::with_capacity(content.len() + replacement.len());
    updated.push_str(&content[..range.start]);
    updated.push_str(replacement);
    updated.push_str(&content[range.end..]);
    Some(updated)
}
