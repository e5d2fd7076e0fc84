use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use mono_version::{Version, VersionScheme};
use regex::Regex;

use crate::adapter::{ManifestAdapter, parse_version};
use crate::{ManifestError, Result, files};

const GEMSPEC_PATTERN: &str = "*.gemspec";
const VERSION_FILE_PATTERN: &str = "lib/**/version.rb";

const VERSION_CONSTANT: &str = r#"(?m)^\s*VERSION\s*=\s*["']([^"']+)["']"#;
const GEM_NAME: &str = r#"\.name\s*=\s*["']([^"']+)["']"#;
const GEM_DEPENDENCY: &str =
    r#"(?m)\.add_(?:runtime_|development_)?dependency[\s(]+["']([^"']+)["'](?:\s*,\s*["']([^"']+)["'])?"#;

/// Gems: the version lives in `lib/**/version.rb`, everything else in the
/// gemspec.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyAdapter;

impl RubyAdapter {
    fn gemspec(dir: &Path) -> Result<PathBuf> {
        files::find_one(dir, GEMSPEC_PATTERN)
    }

    fn version_file(dir: &Path) -> Result<PathBuf> {
        files::find_one(dir, VERSION_FILE_PATTERN)
    }
}

impl ManifestAdapter for RubyAdapter {
    fn scheme(&self) -> VersionScheme {
        VersionScheme::Ruby
    }

    fn is_package(&self, dir: &Path) -> bool {
        files::find(dir, GEMSPEC_PATTERN).is_ok_and(|found| !found.is_empty())
    }

    fn package_name(&self, dir: &Path) -> Result<String> {
        let path = Self::gemspec(dir)?;
        let content = files::read(&path)?;

        Regex::new(GEM_NAME)?
            .captures(&content)
            .map(|caps| caps[1].to_string())
            .ok_or(ManifestError::MissingField {
                path,
                field: "name".to_string(),
            })
    }

    fn read_version(&self, dir: &Path) -> Result<Version> {
        let path = Self::version_file(dir)?;
        let content = files::read(&path)?;

        let Some(caps) = Regex::new(VERSION_CONSTANT)?.captures(&content) else {
            return Err(ManifestError::MissingField {
                path,
                field: "VERSION".to_string(),
            });
        };
        parse_version(&caps[1], self.scheme(), &path)
    }

    fn write_version(&self, dir: &Path, version: &Version) -> Result<()> {
        let path = Self::version_file(dir)?;
        let content = files::read(&path)?;

        let updated = files::replace_group(
            &content,
            &Regex::new(VERSION_CONSTANT)?,
            1,
            &version.format(self.scheme()),
        )
        .ok_or_else(|| ManifestError::MissingField {
            path: path.clone(),
            field: "VERSION".to_string(),
        })?;

        files::write(&path, &updated)
    }

    fn read_dependencies(&self, dir: &Path) -> Result<IndexMap<String, String>> {
        let content = files::read(&Self::gemspec(dir)?)?;

        Ok(Regex::new(GEM_DEPENDENCY)?
            .captures_iter(&content)
            .map(|caps| {
                let constraint = caps.get(2).map_or("", |m| m.as_str());
                (caps[1].to_string(), constraint.to_string())
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mono_core::PrereleaseTrack;
    use tempfile::TempDir;

    const GEMSPEC: &str = r#"Gem::Specification.new do |spec|
  spec.name          = "widgets"
  spec.version       = Widgets::VERSION
  spec.authors       = ["Widget Team"]

  spec.add_dependency "gears", "~> 1.2"
  spec.add_runtime_dependency("springs", ">= 0.3")
  spec.add_development_dependency 'rspec'
end
"#;

    fn gem(version: &str) -> anyhow::Result<TempDir> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("widgets.gemspec"), GEMSPEC)?;
        std::fs::create_dir_all(dir.path().join("lib/widgets"))?;
        std::fs::write(
            dir.path().join("lib/widgets/version.rb"),
            format!(
                "# frozen_string_literal: true\n\nmodule Widgets\n  VERSION = \"{version}\"\nend\n"
            ),
        )?;
        Ok(dir)
    }

    #[test]
    fn reads_name_and_version() -> anyhow::Result<()> {
        let dir = gem("2.1.0.beta.3")?;

        assert!(RubyAdapter.is_package(dir.path()));
        assert_eq!(RubyAdapter.package_name(dir.path())?, "widgets");
        assert_eq!(
            RubyAdapter.read_version(dir.path())?,
            Version::new(2, 1, 0).with_prerelease(PrereleaseTrack::Beta, 3)
        );
        Ok(())
    }

    #[test]
    fn write_version_only_touches_constant() -> anyhow::Result<()> {
        let dir = gem("1.0.0")?;

        let next = Version::new(1, 1, 0).with_prerelease(PrereleaseTrack::Alpha, 1);
        RubyAdapter.write_version(dir.path(), &next)?;

        let content = std::fs::read_to_string(dir.path().join("lib/widgets/version.rb"))?;
        assert_eq!(
            content,
            "# frozen_string_literal: true\n\nmodule Widgets\n  VERSION = \"1.1.0.alpha.1\"\nend\n"
        );
        Ok(())
    }

    #[test]
    fn reads_all_dependency_kinds() -> anyhow::Result<()> {
        let dir = gem("1.0.0")?;

        let deps = RubyAdapter.read_dependencies(dir.path())?;

        let expected: Vec<(&str, &str)> =
            vec![("gears", "~> 1.2"), ("springs", ">= 0.3"), ("rspec", "")];
        let actual: Vec<(&str, &str)> = deps
            .iter()
            .map(|(name, constraint)| (name.as_str(), constraint.as_str()))
            .collect();
        assert_eq!(actual, expected);
        Ok(())
    }

    #[test]
    fn missing_version_file_is_reported() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("widgets.gemspec"), GEMSPEC)?;

        let err = RubyAdapter.read_version(dir.path()).expect_err("no version.rb");

        assert!(matches!(err, ManifestError::FileNotFound { .. }));
        Ok(())
    }

    #[test]
    fn directory_without_gemspec_is_not_a_package() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        assert!(!RubyAdapter.is_package(dir.path()));
        Ok(())
    }
}
