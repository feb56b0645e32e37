use crate::EvnoteError;
use serde_json::Value;
use std::path::Path;

/// Read the events file: a JSON array of records. Anything else fails.
pub fn load_events(path: &Path) -> Result<Vec<Value>, EvnoteError> {
    let content = std::fs::read_to_string(path)?;
    let events: Vec<Value> = serde_json::from_str(&content)?;
    log::debug!("loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Write the full sequence back, pretty-printed UTF-8 with non-ASCII text
/// kept literal. Overwrites whatever was there.
pub fn save_events(path: &Path, events: &[Value]) -> Result<(), EvnoteError> {
    let serialized = serde_json::to_string_pretty(events)?;
    std::fs::write(path, serialized)?;
    log::debug!("wrote {} events to {}", events.len(), path.display());
    Ok(())
}
