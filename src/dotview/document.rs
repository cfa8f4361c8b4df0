//! Document loading.
//!
//! A document is a plain `serde_json::Value` tree. Mapping keys keep the order
//! they had in the source text, so `keys()` on a view lists them the way the
//! file wrote them.

use crate::error::Result;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub fn from_str(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Value> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a UTF-8 JSON document from disk.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading document");
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}
