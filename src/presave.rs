//! `transform` command: pre-save processing of CMS entry batches.

use crate::{
    entry::{EntryBatch, transform_batch},
    log,
};
use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

/// Read a batch, transform it, and write it back out.
///
/// `None` paths mean stdin and stdout.
pub fn run_transform(input: Option<&Path>, output: Option<&Path>, pretty: bool) -> Result<()> {
    let source = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read entries from stdin")?;
            buf
        }
    };

    let (json, count) = transform_json(&source, pretty)?;

    match output {
        Some(path) => fs::write(path, &json)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    log!("transform"; "{count} entries processed");
    Ok(())
}

/// Transform a JSON batch, returning the output and the entry count.
fn transform_json(source: &str, pretty: bool) -> Result<(String, usize)> {
    let batch = EntryBatch::parse(source)
        .context("Failed to parse entries")?
        .map(transform_batch);
    let count = batch.entries.len();
    Ok((batch.to_json(pretty)?, count))
}
