use std::path::{Path, PathBuf};

use clap::ValueEnum;
use mono_manifest::{
    CustomAdapter, DEFAULT_VERSION_FILE, ElixirAdapter, ManifestAdapter, NodeAdapter, RubyAdapter,
};
use mono_version::VersionScheme;
use serde::{Deserialize, Serialize};

use crate::error::ProjectError;

const DEFAULT_TAG_PREFIX: &str = "v";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ruby,
    Nodejs,
    Elixir,
    Custom,
}

impl Language {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ruby => "ruby",
            Self::Nodejs => "nodejs",
            Self::Elixir => "elixir",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    fn default_build(self) -> Option<&'static str> {
        match self {
            Self::Ruby => Some("gem build *.gemspec"),
            Self::Nodejs => Some("npm run build --if-present"),
            Self::Elixir => Some("mix compile"),
            Self::Custom => None,
        }
    }

    #[must_use]
    fn default_publish(self) -> Option<&'static str> {
        match self {
            Self::Ruby => Some("gem push *.gem"),
            Self::Nodejs => Some("npm publish"),
            Self::Elixir => Some("mix hex.publish --yes"),
            Self::Custom => None,
        }
    }

    #[must_use]
    fn default_test(self) -> Option<&'static str> {
        match self {
            Self::Ruby => Some("bundle exec rake test"),
            Self::Nodejs => Some("npm test"),
            Self::Elixir => Some("mix test"),
            Self::Custom => None,
        }
    }
}

/// Contents of `mono.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub language: Language,
    /// Web address of the repository, used to link commits in changelogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Directory holding one package per subdirectory. Absent for
    /// single-package repositories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_scheme: Option<VersionScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_prefix: Option<String>,
}

impl Config {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            repo: None,
            packages_dir: None,
            build: None,
            publish: None,
            test: None,
            version_file: None,
            version_scheme: None,
            tag_prefix: None,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, has
    /// unknown keys, or sets custom-only keys for another language.
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        config.validate(path)?;
        Ok(config)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ProjectError> {
        serde_yml::from_str(content).map_err(|source| ProjectError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self, path: &Path) -> Result<(), ProjectError> {
        if self.language == Language::Custom {
            return Ok(());
        }
        let custom_only = [
            ("version_file", self.version_file.is_some()),
            ("version_scheme", self.version_scheme.is_some()),
        ];
        match custom_only.iter().find(|(_, set)| *set) {
            Some((key, _)) => Err(ProjectError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("'{key}' is only supported for the custom language"),
            }),
            None => Ok(()),
        }
    }

    /// Writes the config to `path`, refusing to replace an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::ConfigExists`] if `path` exists, or an error
    /// if it cannot be written.
    pub fn save_new(&self, path: &Path) -> Result<(), ProjectError> {
        if path.exists() {
            return Err(ProjectError::ConfigExists {
                path: path.to_path_buf(),
            });
        }
        let content = serde_yml::to_string(self).map_err(ProjectError::ConfigSerialize)?;
        std::fs::write(path, content).map_err(|source| ProjectError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn is_monorepo(&self) -> bool {
        self.packages_dir.is_some()
    }

    #[must_use]
    pub fn scheme(&self) -> VersionScheme {
        match self.language {
            Language::Ruby => VersionScheme::Ruby,
            Language::Nodejs | Language::Elixir => VersionScheme::Semver,
            Language::Custom => self.version_scheme.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn adapter(&self) -> Box<dyn ManifestAdapter> {
        match self.language {
            Language::Ruby => Box::new(RubyAdapter),
            Language::Nodejs => Box::new(NodeAdapter),
            Language::Elixir => Box::new(ElixirAdapter),
            Language::Custom => Box::new(CustomAdapter::new(
                self.version_file
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_VERSION_FILE)),
                self.scheme(),
            )),
        }
    }

    #[must_use]
    pub fn build_command(&self) -> Option<&str> {
        self.build.as_deref().or(self.language.default_build())
    }

    #[must_use]
    pub fn publish_command(&self) -> Option<&str> {
        self.publish.as_deref().or(self.language.default_publish())
    }

    #[must_use]
    pub fn test_command(&self) -> Option<&str> {
        self.test.as_deref().or(self.language.default_test())
    }

    #[must_use]
    pub fn tag_prefix(&self) -> &str {
        self.tag_prefix.as_deref().unwrap_or(DEFAULT_TAG_PREFIX)
    }
}
