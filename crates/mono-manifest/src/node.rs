use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use mono_version::{Version, VersionScheme};
use serde_json::Value;

use crate::adapter::{ManifestAdapter, parse_version};
use crate::{ManifestError, Result, files};

const PACKAGE_JSON: &str = "package.json";
const DEPENDENCY_SECTIONS: [&str; 3] = ["dependencies", "devDependencies", "peerDependencies"];

/// npm packages, described by `package.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeAdapter;

fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(PACKAGE_JSON)
}

fn read_document(path: &Path) -> Result<Value> {
    let content = files::read(path)?;
    serde_json::from_str(&content).map_err(|source| ManifestError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_document(path: &Path, document: &Value) -> Result<()> {
    let mut content = serde_json::to_string_pretty(document).map_err(|source| {
        ManifestError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    content.push('\n');
    files::write(path, &content)
}

fn string_field(document: &Value, path: &Path, field: &str) -> Result<String> {
    document
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: field.to_string(),
        })
}

/// The constraint to write so that `constraint` admits `version`, or `None`
/// when it already does or is not a semver range (`workspace:*`, `file:`).
fn updated_constraint(constraint: &str, version: &Version) -> Option<String> {
    let constraint = constraint.trim();
    let target = semver::Version::try_from(version).ok()?;

    // npm reads a bare version as an exact pin, semver as a caret range.
    if constraint.starts_with(|c: char| c.is_ascii_digit()) {
        let pinned = semver::Version::parse(constraint).ok()?;
        return (pinned != target).then(|| target.to_string());
    }

    let requirement = semver::VersionReq::parse(constraint).ok()?;
    if requirement.matches(&target) {
        return None;
    }

    let prefix = match constraint.chars().next() {
        Some(c @ ('^' | '~')) => c.to_string(),
        _ => String::new(),
    };
    Some(format!("{prefix}{target}"))
}

impl ManifestAdapter for NodeAdapter {
    fn scheme(&self) -> VersionScheme {
        VersionScheme::Semver
    }

    fn is_package(&self, dir: &Path) -> bool {
        manifest_path(dir).is_file()
    }

    fn package_name(&self, dir: &Path) -> Result<String> {
        let path = manifest_path(dir);
        string_field(&read_document(&path)?, &path, "name")
    }

    fn read_version(&self, dir: &Path) -> Result<Version> {
        let path = manifest_path(dir);
        let raw = string_field(&read_document(&path)?, &path, "version")?;
        parse_version(&raw, self.scheme(), &path)
    }

    fn write_version(&self, dir: &Path, version: &Version) -> Result<()> {
        let path = manifest_path(dir);
        let mut document = read_document(&path)?;

        let object = document
            .as_object_mut()
            .ok_or_else(|| ManifestError::MissingField {
                path: path.clone(),
                field: "version".to_string(),
            })?;
        object.insert(
            "version".to_string(),
            Value::String(version.format(self.scheme())),
        );

        write_document(&path, &document)
    }

    fn read_dependencies(&self, dir: &Path) -> Result<IndexMap<String, String>> {
        let document = read_document(&manifest_path(dir))?;
        let mut dependencies = IndexMap::new();

        for section in DEPENDENCY_SECTIONS {
            let Some(entries) = document.get(section).and_then(Value::as_object) else {
                continue;
            };
            for (name, constraint) in entries {
                dependencies
                    .entry(name.clone())
                    .or_insert_with(|| constraint.as_str().unwrap_or_default().to_string());
            }
        }

        Ok(dependencies)
    }

    fn update_dependency(&self, dir: &Path, name: &str, version: &Version) -> Result<bool> {
        let path = manifest_path(dir);
        let mut document = read_document(&path)?;
        let mut changed = false;

        for section in DEPENDENCY_SECTIONS {
            let Some(entry) = document
                .get_mut(section)
                .and_then(Value::as_object_mut)
                .and_then(|entries| entries.get_mut(name))
            else {
                continue;
            };
            let Some(updated) = entry.as_str().and_then(|c| updated_constraint(c, version)) else {
                continue;
            };
            *entry = Value::String(updated);
            changed = true;
        }

        if changed {
            write_document(&path, &document)?;
        }
        Ok(changed)
    }
}
