use std::fs;
use std::path::Path;

use posts_lexicon::hash::sha256_hex;
use posts_lexicon::{LexiconError, LexiconRegistry, LexiconReport};
use tempfile::TempDir;

const STOP_WORDS: &str = "# test list\nمِنْ\nفي\nعلى\n";

fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn manifest(sha: &str) -> String {
    format!(
        r#"[manifest]
schema = "arabic-posts.lexicon-manifest"
schema_version = 1

[pins]
stopwords = "test-2024.1"

[[files]]
path = "ar/stopwords.txt"
sha256 = "{sha}"
kind = "txt"
role = "stopwords"
"#
    )
}

fn lexicon_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("ar/stopwords.txt"), STOP_WORDS.as_bytes());
    let sha = sha256_hex(STOP_WORDS.as_bytes());
    write(&dir.path().join("manifest.toml"), manifest(&sha).as_bytes());
    dir
}

#[test]
fn verify_and_load_reads_pinned_list() {
    let dir = lexicon_dir();
    let (registry, summary) =
        LexiconRegistry::verify_and_load(dir.path()).expect("verify_and_load should succeed");

    assert_eq!(summary.file_count, 1);
    assert_eq!(summary.stop_word_count, 3);
    assert_eq!(registry.stop_words.version(), "test-2024.1");
    assert!(registry.stop_words.contains("من"));
    assert!(registry.stop_words.contains("على"));
}

#[test]
fn tampered_list_is_rejected() {
    let dir = lexicon_dir();
    write(
        &dir.path().join("ar/stopwords.txt"),
        "من\nفي\nعلى\nكتاب\n".as_bytes(),
    );
    let err = LexiconRegistry::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, LexiconError::Sha256Mismatch { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = lexicon_dir();
    fs::remove_file(dir.path().join("ar/stopwords.txt")).unwrap();
    let err = LexiconRegistry::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, LexiconError::MissingFile { .. }));
}

#[test]
fn wrong_schema_is_rejected() {
    let dir = lexicon_dir();
    let sha = sha256_hex(STOP_WORDS.as_bytes());
    let bad = manifest(&sha).replace("arabic-posts.lexicon-manifest", "other");
    write(&dir.path().join("manifest.toml"), bad.as_bytes());
    let err = LexiconRegistry::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, LexiconError::InvalidManifest { .. }));
}

#[test]
fn missing_stopwords_role_is_rejected() {
    let dir = lexicon_dir();
    let sha = sha256_hex(STOP_WORDS.as_bytes());
    let bad = manifest(&sha).replace("role = \"stopwords\"", "role = \"notes\"");
    write(&dir.path().join("manifest.toml"), bad.as_bytes());
    let err = LexiconRegistry::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, LexiconError::MissingRole { .. }));
}

#[test]
fn empty_list_is_rejected() {
    let dir = TempDir::new().unwrap();
    let contents = "# nothing here\n\n";
    write(&dir.path().join("ar/stopwords.txt"), contents.as_bytes());
    let sha = sha256_hex(contents.as_bytes());
    write(&dir.path().join("manifest.toml"), manifest(&sha).as_bytes());
    let err = LexiconRegistry::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, LexiconError::EmptyStopWords { .. }));
}

#[test]
fn report_counts_snapshot() {
    let dir = lexicon_dir();
    let (registry, summary) = LexiconRegistry::verify_and_load(dir.path()).unwrap();
    let report = LexiconReport::from_verify_summary(&summary, registry.files.clone());
    let value = serde_json::to_value(report).unwrap();

    insta::assert_json_snapshot!(value["counts"], @r#"
    {
      "files": 1,
      "stop_words": 3
    }
    "#);
    insta::assert_json_snapshot!(value["pins"], @r#"
    {
      "stopwords": "test-2024.1"
    }
    "#);
}

#[test]
fn repository_lexicon_verifies() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../lexicon");
    let (registry, summary) =
        LexiconRegistry::verify_and_load(&dir).expect("checked-in lexicon should verify");
    assert_eq!(summary.manifest_pins.stopwords, "2024.2");
    assert_eq!(registry.stop_words.len(), posts_lexicon::StopWordSet::builtin().len());
}
