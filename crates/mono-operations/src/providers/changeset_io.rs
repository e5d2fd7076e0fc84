use std::fs;
use std::path::{Path, PathBuf};

use mono_core::{BumpType, ChangeType, Changeset};
use mono_parse::{parse_changeset, serialize_changeset};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangesetReader, ChangesetWriter};

const MAX_FILENAME_ATTEMPTS: usize = 100;

pub struct FileSystemChangesetIO;

impl FileSystemChangesetIO {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangesetIO {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangesetReader for FileSystemChangesetIO {
    fn list_changesets(&self, changeset_dir: &Path) -> Result<Vec<PathBuf>> {
        let list_error = |source: std::io::Error| OperationError::ChangesetFileRead {
            path: changeset_dir.to_path_buf(),
            source,
        };

        let entries = match fs::read_dir(changeset_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(list_error(source)),
        };

        let mut changesets = Vec::new();
        for entry in entries {
            let path = entry.map_err(list_error)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                changesets.push(path);
            }
        }
        changesets.sort();

        Ok(changesets)
    }

    fn read_changeset(&self, path: &Path) -> Result<Changeset> {
        let content =
            fs::read_to_string(path).map_err(|source| OperationError::ChangesetFileRead {
                path: path.to_path_buf(),
                source,
            })?;

        parse_changeset(&content, path).map_err(|source| OperationError::ChangesetParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ChangesetWriter for FileSystemChangesetIO {
    fn write_changeset(
        &self,
        changeset_dir: &Path,
        bump: BumpType,
        change_type: ChangeType,
        message: &str,
    ) -> Result<PathBuf> {
        let content = serialize_changeset(bump, change_type, message)?;

        fs::create_dir_all(changeset_dir).map_err(|source| OperationError::ChangesetFileWrite {
            path: changeset_dir.to_path_buf(),
            source,
        })?;

        let file_path = changeset_dir.join(generate_unique_filename(changeset_dir));
        fs::write(&file_path, content).map_err(|source| OperationError::ChangesetFileWrite {
            path: file_path.clone(),
            source,
        })?;

        Ok(file_path)
    }
}

fn generate_unique_filename(changeset_dir: &Path) -> String {
    for _ in 0..MAX_FILENAME_ATTEMPTS {
        if let Some(name) = petname::petname(3, "-") {
            let filename = format!("{name}.md");

            if !changeset_dir.join(&filename).exists() {
                return filename;
            }
        }
    }

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("changeset-{timestamp}.md")
}
