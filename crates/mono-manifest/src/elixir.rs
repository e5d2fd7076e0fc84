use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use mono_version::{Version, VersionScheme};
use regex::Regex;

use crate::adapter::{ManifestAdapter, parse_version};
use crate::{ManifestError, Result, files};

const MIX_FILE: &str = "mix.exs";

const VERSION_ATTRIBUTE: &str = r#"(?m)^\s*@version\s+"([^"]+)""#;
const VERSION_KEYWORD: &str = r#"\bversion:\s*"([^"]+)""#;
const APP_NAME: &str = r"\bapp:\s*:([a-z_][a-zA-Z0-9_]*)";
const DEPENDENCY: &str = r#"\{\s*:([a-z_][a-zA-Z0-9_]*)\s*,\s*(?:"([^"]*)"|path:)"#;

/// Mix projects. The version is either a `@version` module attribute or a
/// literal `version:` keyword in `project/0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElixirAdapter;

fn mix_file(dir: &Path) -> PathBuf {
    dir.join(MIX_FILE)
}

/// The pattern whose first group holds the literal version in `content`.
fn version_pattern(content: &str) -> Result<Option<Regex>> {
    for pattern in [VERSION_ATTRIBUTE, VERSION_KEYWORD] {
        let regex = Regex::new(pattern)?;
        if regex.is_match(content) {
            return Ok(Some(regex));
        }
    }
    Ok(None)
}

fn missing_version(path: &Path) -> ManifestError {
    ManifestError::MissingField {
        path: path.to_path_buf(),
        field: "version".to_string(),
    }
}

impl ManifestAdapter for ElixirAdapter {
    fn scheme(&self) -> VersionScheme {
        VersionScheme::Semver
    }

    fn is_package(&self, dir: &Path) -> bool {
        mix_file(dir).is_file()
    }

    fn package_name(&self, dir: &Path) -> Result<String> {
        let path = mix_file(dir);
        let content = files::read(&path)?;

        Regex::new(APP_NAME)?
            .captures(&content)
            .map(|caps| caps[1].to_string())
            .ok_or(ManifestError::MissingField {
                path,
                field: "app".to_string(),
            })
    }

    fn read_version(&self, dir: &Path) -> Result<Version> {
        let path = mix_file(dir);
        let content = files::read(&path)?;

        let raw = version_pattern(&content)?
            .and_then(|regex| regex.captures(&content).map(|caps| caps[1].to_string()))
            .ok_or_else(|| missing_version(&path))?;
        parse_version(&raw, self.scheme(), &path)
    }

    fn write_version(&self, dir: &Path, version: &Version) -> Result<()> {
        let path = mix_file(dir);
        let content = files::read(&path)?;

        let updated = version_pattern(&content)?
            .and_then(|regex| {
                files::replace_group(&content, &regex, 1, &version.format(self.scheme()))
            })
            .ok_or_else(|| missing_version(&path))?;

        files::write(&path, &updated)
    }

    fn read_dependencies(&self, dir: &Path) -> Result<IndexMap<String, String>> {
        let content = files::read(&mix_file(dir))?;

        Ok(Regex::new(DEPENDENCY)?
            .captures_iter(&content)
            .map(|caps| {
                let constraint = caps.get(2).map_or("", |m| m.as_str());
                (caps[1].to_string(), constraint.to_string())
            })
            .collect())
    }
}
