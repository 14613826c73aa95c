//! Submit command - admit a batch and persist it to the library.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use colored::Colorize;
use curator::{Curator, SubmitOutcome};

use crate::store;

pub fn run(
    batch_path: PathBuf,
    library_path: PathBuf,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !batch_path.exists() {
        return Err(format!("Batch file not found: {}", batch_path.display()).into());
    }

    println!(
        "{} {}",
        "Submitting".cyan().bold(),
        batch_path.display().to_string().white()
    );

    match submit_file(&batch_path, &library_path)? {
        SubmitOutcome::Skipped => {
            println!(
                "{} No admissible articles; library unchanged.",
                "Warning:".yellow().bold()
            );
        }
        SubmitOutcome::Persisted { year, admitted } => {
            println!(
                "{} {} admitted, stored under {}",
                "Persisted".green().bold(),
                admitted.to_string().white().bold(),
                year.to_string().white().bold()
            );
            println!(
                "{} {}",
                "Saved to".green().bold(),
                library_path.display().to_string().white()
            );
        }
    }

    Ok(())
}

/// Load the batch and library, submit, and save the library back.
///
/// The snapshot file is only written when the batch was persisted.
pub fn submit_file(batch_path: &Path, library_path: &Path) -> curator::Result<SubmitOutcome> {
    let batch = store::load_batch(batch_path)?;
    let library = Arc::new(store::load_library(library_path)?);
    let curator = Curator::new(library.clone());

    let outcome = curator.submit(&batch)?;
    if let SubmitOutcome::Persisted { .. } = outcome {
        store::save_library(&library, library_path)?;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator::Library;
    use std::fs;
    use tempfile::TempDir;

    const VALID_BATCH: &str = r#"[
        {"title": "Hello, Mockito!", "content": "Where is verify?", "author": "noBrain", "creationDate": "2023-10-16"},
        {"title": "Hello, Mockito!", "content": "Where is verify?", "author": "noBrain", "creationDate": "2023-10-16"},
        {"title": "No author", "content": "Some code"}
    ]"#;

    fn write_batch(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("batch.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_persisted_submit_writes_snapshot() {
        let dir = TempDir::new().unwrap();
        let batch = write_batch(&dir, VALID_BATCH);
        let library_path = dir.path().join("library.json");

        let outcome = submit_file(&batch, &library_path).unwrap();

        assert_eq!(outcome, SubmitOutcome::Persisted { year: 2023, admitted: 1 });
        let library = store::load_library(&library_path).unwrap();
        assert_eq!(library.list_titles().unwrap(), vec!["Hello, Mockito!"]);
        // The original batch is stored verbatim.
        assert_eq!(library.articles_for_year(2023).unwrap().len(), 3);
    }

    #[test]
    fn test_skipped_submit_creates_no_snapshot() {
        let dir = TempDir::new().unwrap();
        let batch = write_batch(&dir, r#"[{}, {"title": "Only a title"}]"#);
        let library_path = dir.path().join("library.json");

        assert_eq!(submit_file(&batch, &library_path).unwrap(), SubmitOutcome::Skipped);
        assert!(!library_path.exists());
    }

    #[test]
    fn test_skipped_submit_leaves_snapshot_untouched() {
        let dir = TempDir::new().unwrap();
        let library_path = dir.path().join("library.json");

        submit_file(&write_batch(&dir, VALID_BATCH), &library_path).unwrap();
        let before = fs::read_to_string(&library_path).unwrap();

        let outcome = submit_file(&write_batch(&dir, "[]"), &library_path).unwrap();

        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert_eq!(fs::read_to_string(&library_path).unwrap(), before);
    }

    #[test]
    fn test_submit_appends_to_existing_snapshot() {
        let dir = TempDir::new().unwrap();
        let library_path = dir.path().join("library.json");

        submit_file(&write_batch(&dir, VALID_BATCH), &library_path).unwrap();
        submit_file(
            &write_batch(
                &dir,
                r#"[{"title": "Абрикос", "content": "text", "author": "someone", "creationDate": "2021-05-01"}]"#,
            ),
            &library_path,
        )
        .unwrap();

        let library = store::load_library(&library_path).unwrap();
        assert_eq!(library.years().unwrap(), vec![2021, 2023]);
        assert_eq!(library.list_titles().unwrap().len(), 2);
    }
}
