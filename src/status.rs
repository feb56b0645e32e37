use crate::EvnoteError;
use crate::cli::StatusArgs;
use crate::comments::builtin_table;
use crate::config::load_table;
use crate::store::load_events;
use serde_json::Value;
use std::path::Path;

pub fn handle_status(file: &Path, args: &StatusArgs) -> Result<(), EvnoteError> {
    if !file.exists() {
        eprintln!("evnote: no events file at {}", file.display());
        return Ok(());
    }

    let table = match &args.comments {
        Some(path) => load_table(path)?,
        None => builtin_table(),
    };

    let size = std::fs::metadata(file)?.len();
    let events = load_events(file)?;

    let annotated = events
        .iter()
        .filter(|e| e.get("ai_comment").is_some())
        .count();
    let pending = events
        .iter()
        .filter(|e| {
            let id = e.get("id").and_then(Value::as_str).unwrap_or("");
            table.contains_key(id) && e.get("ai_comment").is_none()
        })
        .count();

    eprintln!("evnote: file — {} ({})", file.display(), fmt_size(size));
    eprintln!("evnote: records — {}", events.len());
    eprintln!("evnote: annotated — {annotated}");
    eprintln!(
        "evnote: pending matches — {pending} (table: {} entries)",
        table.len()
    );

    Ok(())
}

fn fmt_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_size_units() {
        assert_eq!(fmt_size(512), "512 B");
        assert_eq!(fmt_size(2048), "2.0 KB");
        assert_eq!(fmt_size(3 * 1024 * 1024), "3.0 MB");
    }
}
