//! Store maintenance for the `add` and `list` CLI commands. Both return the text to print.

use anyhow::{Context, Result};
use storage::VocabStore;
use tracing::info;

/// Adds one entry and returns the confirmation line.
pub async fn add_word(
    store: &dyn VocabStore,
    korean: &str,
    english: &str,
    example: &str,
) -> Result<String> {
    let (korean, english) = (korean.trim(), english.trim());
    if korean.is_empty() || english.is_empty() {
        anyhow::bail!("korean and english must both be non-empty");
    }
    store
        .add_word(korean, english, example.trim())
        .await
        .context("Add word to vocabulary database")?;
    info!(korean = %korean, "Word added from CLI");
    Ok(format!("✅ Added: {} = {}", korean, english))
}

/// Newest `limit` entries, one per line with id and date; examples on an indented line.
pub async fn list_words(store: &dyn VocabStore, limit: u32) -> Result<String> {
    let entries = store
        .recent_words(limit)
        .await
        .context("Query recent words")?;

    if entries.is_empty() {
        return Ok("No words yet.".to_string());
    }

    let mut out = format!("Latest {} word(s):\n", entries.len());
    for e in &entries {
        out.push_str(&format!(
            "{:>5}  {}  {} → {}\n",
            e.id,
            e.date_added.format("%Y-%m-%d"),
            e.korean,
            e.english
        ));
        if e.has_example() {
            out.push_str(&format!("       📘 {}\n", e.example));
        }
    }
    Ok(out)
}
