//! Mixtape CLI Library
//!
//! Reads a catalog and a change list, applies the changes, and writes the
//! resulting catalog. Exposed as a library so the run can be tested
//! without spawning the binary.

pub mod config;
pub mod error;

pub use config::{Cli, LogLevel, RunConfig};
pub use error::{CliError, Result};

use mixtape_core::{
    codec, ApplySummary, Catalog, ChangeList, Collection, LogSink, NoopSink, TracingSink,
};
use std::fs;
use std::path::Path;

/// Execute one read, apply, write cycle
pub fn run(config: &RunConfig) -> Result<ApplySummary> {
    config.validate()?;

    let catalog = read_catalog(&config.catalog_path)?;
    let changes = read_changes(&config.changes_path)?;
    tracing::debug!(
        users = catalog.users.len(),
        songs = catalog.songs.len(),
        playlists = catalog.playlists.len(),
        changes = changes.len(),
        "Inputs loaded"
    );

    let sink: Box<dyn LogSink> = if config.quiet {
        Box::new(NoopSink)
    } else {
        Box::new(TracingSink::new())
    };

    let mut collection = mixtape_core::new_collection(catalog, sink);
    let summary = collection
        .apply_changes(&changes)
        .map_err(CliError::Apply)?;
    tracing::debug!(
        added = summary.added,
        removed = summary.removed,
        amended = summary.amended,
        skipped = summary.skipped,
        unrecognized = summary.unrecognized,
        "Changes applied"
    );

    write_catalog(collection.catalog(), &config.output_path)?;
    tracing::debug!("Wrote {}", config.output_path.display());

    Ok(summary)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_catalog(path: &Path) -> Result<Catalog> {
    codec::decode_catalog(&read_file(path)?).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_changes(path: &Path) -> Result<ChangeList> {
    codec::decode_changes(&read_file(path)?).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let bytes = codec::encode_catalog(catalog).map_err(CliError::Encode)?;
    fs::write(path, bytes).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const CATALOG: &str = r#"{"users":[{"id":"1","name":"Albin Jaye"}],
        "playlists":[{"id":"1","user_id":"1","song_ids":["1"]}],
        "songs":[{"id":"1","artist":"Camila Cabello","title":"Never Be the Same"},
                 {"id":"2","artist":"Zedd","title":"The Middle"}]}"#;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn run_applies_changes_and_writes_compact_output() {
        let dir = TempDir::new().unwrap();
        let catalog = write(&dir, "mixtape.json", CATALOG);
        let changes = write(
            &dir,
            "changes.json",
            r#"{"playlist_changes":[{"id":"add_songs","playlist":{"id":"1","song_ids":["2"]}}]}"#,
        );
        let output = dir.path().join("output.json");

        let mut config = RunConfig::new(catalog, changes, &output);
        config.quiet = true;
        let summary = run(&config).unwrap();

        assert_eq!(summary.amended, 1);
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains(r#"{"id":"1","user_id":"1","song_ids":["1","2"]}"#));
        assert!(!written.contains('\n'));
    }

    #[test]
    fn missing_input_names_the_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        let changes = write(&dir, "changes.json", "{}");

        let config = RunConfig::new(&missing, changes, dir.path().join("out.json"));
        let err = run(&config).unwrap_err();

        assert!(matches!(err, CliError::Read { ref path, .. } if *path == missing));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn malformed_change_list_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let catalog = write(&dir, "mixtape.json", CATALOG);
        let changes = write(&dir, "changes.json", "{\"playlist_changes\": [");
        let output = dir.path().join("out.json");

        let err = run(&RunConfig::new(catalog, changes, &output)).unwrap_err();
        assert!(matches!(err, CliError::Decode { .. }));
        assert!(!output.exists());
    }
}
