use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::ecs::resources::EventLog;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush the session journal to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 3 files:
/// - `events.jsonl` — one event per line
/// - `event_participants.jsonl` — one participant link per line
/// - `event_effects.jsonl` — one per-entity state change per line
pub fn flush_to_jsonl(log: &EventLog, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join("events.jsonl"), log.events.iter())?;
    write_jsonl(
        &output_dir.join("event_participants.jsonl"),
        log.participants.iter(),
    )?;
    write_jsonl(&output_dir.join("event_effects.jsonl"), log.effects.iter())?;

    Ok(())
}
