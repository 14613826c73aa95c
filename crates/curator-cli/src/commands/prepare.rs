//! Prepare command - show which articles of a batch would be admitted.

use std::path::PathBuf;

use colored::Colorize;
use curator::pipeline;

use crate::store;

pub fn run(
    batch_path: PathBuf,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !batch_path.exists() {
        return Err(format!("Batch file not found: {}", batch_path.display()).into());
    }

    let batch = store::load_batch(&batch_path)?;
    let prepared = pipeline::prepare(&batch);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&prepared)?);
        return Ok(());
    }

    println!(
        "{} {} of {} articles",
        "Admitted".cyan().bold(),
        prepared.len().to_string().white().bold(),
        batch.len()
    );
    for article in &prepared {
        println!(
            "  {} {} {}",
            article
                .creation_date()
                .map(|d| d.to_string())
                .unwrap_or_default()
                .dimmed(),
            article.title().unwrap_or_default().white().bold(),
            format!("({})", article.author().unwrap_or_default()).dimmed()
        );
    }

    let dropped = batch.iter().filter(|a| !a.is_admissible()).count();
    if dropped > 0 {
        println!(
            "{} {} inadmissible articles dropped",
            "Note:".yellow(),
            dropped
        );
    }

    Ok(())
}
