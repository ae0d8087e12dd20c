#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use tracing::info;

use crate::error::LexiconError;
use crate::hash::sha256_hex;
use crate::manifest::{Manifest, ManifestFile, Pins};
use crate::stopwords::StopWordSet;

pub const MANIFEST_FILE: &str = "manifest.toml";
pub const MANIFEST_SCHEMA: &str = "arabic-posts.lexicon-manifest";

const REQUIRED_ROLES: &[&str] = &["stopwords"];

const ALLOWED_KINDS: &[&str] = &["txt", "other"];

#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifySummary {
    pub lexicon_dir: PathBuf,
    pub manifest_pins: Pins,
    pub file_count: usize,
    pub stop_word_count: usize,
}

/// A verified lexicon directory and the resources loaded from it.
#[derive(Debug, Clone)]
pub struct LexiconRegistry {
    pub manifest: Manifest,
    pub files: Vec<ManifestFile>,
    pub stop_words: StopWordSet,
}

impl LexiconRegistry {
    /// Check the manifest and every digest it lists, then load the stop words.
    pub fn verify_and_load(lexicon_dir: &Path) -> Result<(Self, VerifySummary), LexiconError> {
        let manifest = load_manifest(&lexicon_dir.join(MANIFEST_FILE))?;

        validate_manifest(&manifest)?;

        let mut files = manifest.files.clone();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        for file in &files {
            verify_file(lexicon_dir, file)?;
        }

        let stop_words = StopWordSet::load(
            &resolve_role_path(lexicon_dir, &files, "stopwords")?,
            manifest.pins.stopwords.clone(),
        )?;

        let summary = VerifySummary {
            lexicon_dir: lexicon_dir.to_path_buf(),
            manifest_pins: manifest.pins.clone(),
            file_count: files.len(),
            stop_word_count: stop_words.len(),
        };
        info!(
            dir = %lexicon_dir.display(),
            version = %summary.manifest_pins.stopwords,
            stop_words = summary.stop_word_count,
            "lexicon verified"
        );

        Ok((
            Self {
                manifest,
                files,
                stop_words,
            },
            summary,
        ))
    }
}

fn load_manifest(path: &Path) -> Result<Manifest, LexiconError> {
    let contents = std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| LexiconError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest(manifest: &Manifest) -> Result<(), LexiconError> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(LexiconError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != 1 {
        return Err(LexiconError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }
    if manifest.pins.stopwords.trim().is_empty() {
        return Err(LexiconError::InvalidManifest {
            message: "pins.stopwords must not be empty".to_string(),
        });
    }

    let mut roles: BTreeSet<&str> = BTreeSet::new();
    for file in &manifest.files {
        if !roles.insert(file.role.as_str()) {
            return Err(LexiconError::DuplicateRole {
                role: file.role.clone(),
            });
        }

        if !ALLOWED_KINDS.contains(&file.kind.as_str()) {
            return Err(LexiconError::InvalidManifest {
                message: format!("unsupported kind '{}' for {}", file.kind, file.path),
            });
        }

        validate_sha(&file.sha256, &file.path)?;
        validate_path(&file.path)?;
    }

    for role in REQUIRED_ROLES {
        if !roles.contains(role) {
            return Err(LexiconError::MissingRole {
                role: (*role).to_string(),
            });
        }
    }

    Ok(())
}

fn verify_file(lexicon_dir: &Path, file: &ManifestFile) -> Result<(), LexiconError> {
    let full_path = lexicon_dir.join(&file.path);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LexiconError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            LexiconError::io(full_path.clone(), e)
        }
    })?;

    let actual = sha256_hex(&bytes);
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(LexiconError::Sha256Mismatch {
            path: full_path,
            expected,
            actual,
        });
    }
    Ok(())
}

fn resolve_role_path(
    lexicon_dir: &Path,
    files: &[ManifestFile],
    role: &str,
) -> Result<PathBuf, LexiconError> {
    let f = files
        .iter()
        .find(|f| f.role == role)
        .ok_or_else(|| LexiconError::MissingRole {
            role: role.to_string(),
        })?;
    Ok(lexicon_dir.join(&f.path))
}

fn validate_sha(sha: &str, path: &str) -> Result<(), LexiconError> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LexiconError::InvalidSha256 {
            path: PathBuf::from(path),
            message: "sha256 must be 64 hex characters".to_string(),
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<PathBuf, LexiconError> {
    if path.contains('\\') {
        return Err(LexiconError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must use '/' separators".to_string(),
        });
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(LexiconError::InvalidPath {
            path: p,
            message: "manifest path must be relative".to_string(),
        });
    }

    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(LexiconError::InvalidPath {
            path: p,
            message: "manifest path must not leave the lexicon directory".to_string(),
        });
    }

    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path_rejects_escape() {
        assert!(validate_path("stopwords.txt").is_ok());
        assert!(validate_path("ar/stopwords.txt").is_ok());
        assert!(matches!(
            validate_path("../stopwords.txt"),
            Err(LexiconError::InvalidPath { .. })
        ));
        assert!(matches!(
            validate_path("/etc/passwd"),
            Err(LexiconError::InvalidPath { .. })
        ));
        assert!(matches!(
            validate_path("ar\\stopwords.txt"),
            Err(LexiconError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_validate_sha_length() {
        assert!(validate_sha(&"a".repeat(64), "x").is_ok());
        assert!(validate_sha("abc", "x").is_err());
        assert!(validate_sha(&"z".repeat(64), "x").is_err());
    }
}
