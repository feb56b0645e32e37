use crate::EvnoteError;
use crate::cli::AnnotateArgs;
use crate::comments::builtin_table;
use crate::config::load_table;
use crate::store::{load_events, save_events};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// One record that gained a comment during the pass.
pub struct Applied {
    pub id: String,
    pub title: String,
}

/// Single pass over the sequence: any record whose `id` is in the table and
/// which has no `ai_comment` yet gets the table's text. Everything else is
/// left untouched, order preserved.
pub fn apply_comments(events: &mut [Value], table: &HashMap<String, String>) -> Vec<Applied> {
    let mut applied = Vec::new();

    for event in events.iter_mut() {
        let id = event
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let Some(text) = table.get(&id) else {
            continue;
        };
        let Some(record) = event.as_object_mut() else {
            continue;
        };
        if record.contains_key("ai_comment") {
            continue;
        }

        record.insert("ai_comment".to_string(), Value::String(text.clone()));
        let title = record
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        log::debug!("annotated {id}");
        applied.push(Applied { id, title });
    }

    applied
}

pub fn handle_annotate(file: &Path, args: &AnnotateArgs) -> Result<(), EvnoteError> {
    let table = match &args.comments {
        Some(path) => load_table(path)?,
        None => builtin_table(),
    };

    let mut events = load_events(file)?;
    let applied = apply_comments(&mut events, &table);

    for entry in &applied {
        println!("annotated: {}", entry.title);
    }

    // The file is rewritten even when nothing matched.
    if args.dry_run {
        println!(
            "dry run — {} of {} records would be annotated, {} not written",
            applied.len(),
            events.len(),
            file.display()
        );
        return Ok(());
    }

    save_events(file, &events)?;
    println!("{} updated ({} annotated)", file.display(), applied.len());

    Ok(())
}
