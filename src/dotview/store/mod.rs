//! # Record Store
//!
//! Indexes the flat records of a document under composite keys.
//!
//! ## Source Shape
//!
//! ```text
//! {
//!   "Schedule": {                      <- group root (configurable)
//!     "events":   [ {"serial": 33950, ...}, ... ],
//!     "speakers": [ {"serial": 3471,  ...}, ... ]
//!   }
//! }
//! ```
//!
//! Every record is stored under `"<record_type>.<serial>"` (`events.33950`),
//! and its serial field is overwritten with that key so the record carries its
//! own type prefix.
//!
//! ## Loading Is All Or Nothing
//!
//! [`load_db`] validates and builds every record before it touches the store.
//! A malformed document fails with a [`LoadError`] and the store is left as
//! it was.
//!
//! ## Implementations
//!
//! Storage sits behind the [`RecordDb`] trait. [`memory::InMemoryDb`] is the
//! only backend; the store is never written back anywhere.

use crate::config::DotviewConfig;
use crate::error::{DotviewError, LoadError, Result};
use crate::record::Record;
use serde_json::Value;

pub mod memory;

pub const DEFAULT_GROUP_ROOT: &str = "Schedule";
pub const DEFAULT_SERIAL_FIELD: &str = "serial";

/// Abstract interface for record storage.
pub trait RecordDb {
    /// Insert a record, returning the one it replaced.
    fn insert(&mut self, key: String, record: Record) -> Option<Record>;

    /// Get a record by composite key.
    fn get(&self, key: &str) -> Result<&Record>;

    fn contains(&self, key: &str) -> bool;

    /// All composite keys, sorted.
    fn keys(&self) -> Vec<String>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where [`load_db`] finds the groups and which field holds the serial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub group_root: String,
    pub serial_field: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            group_root: DEFAULT_GROUP_ROOT.to_string(),
            serial_field: DEFAULT_SERIAL_FIELD.to_string(),
        }
    }
}

impl From<&DotviewConfig> for LoadOptions {
    fn from(config: &DotviewConfig) -> Self {
        Self {
            group_root: config.group_root.clone(),
            serial_field: config.serial_field.clone(),
        }
    }
}

pub fn composite_key(record_type: &str, serial: &str) -> String {
    format!("{}.{}", record_type, serial)
}

/// Load every record of `document` into `db`. Returns how many were inserted.
pub fn load_db<D: RecordDb>(db: &mut D, document: &Value, options: &LoadOptions) -> Result<usize> {
    let staged = stage(document, options)?;
    let count = staged.len();

    for (key, record) in staged {
        if db.insert(key.clone(), record).is_some() {
            tracing::warn!(key = %key, "duplicate composite key, earlier record replaced");
        }
    }

    tracing::debug!(records = count, root = %options.group_root, "record store loaded");
    Ok(count)
}

fn stage(
    document: &Value,
    options: &LoadOptions,
) -> std::result::Result<Vec<(String, Record)>, LoadError> {
    let root = document
        .get(&options.group_root)
        .ok_or_else(|| LoadError::MissingRoot(options.group_root.clone()))?;
    let groups = root
        .as_object()
        .ok_or_else(|| LoadError::RootNotMapping(options.group_root.clone()))?;

    let mut staged = Vec::new();
    for (record_type, records) in groups {
        let records = records
            .as_array()
            .ok_or_else(|| LoadError::GroupNotSequence(record_type.clone()))?;

        for (index, record) in records.iter().enumerate() {
            let mut fields =
                record
                    .as_object()
                    .cloned()
                    .ok_or_else(|| LoadError::RecordNotMapping {
                        group: record_type.clone(),
                        index,
                    })?;

            let serial = match fields.get(&options.serial_field) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                Some(_) => {
                    return Err(LoadError::InvalidSerial {
                        group: record_type.clone(),
                        index,
                        field: options.serial_field.clone(),
                    })
                }
                None => {
                    return Err(LoadError::MissingSerial {
                        group: record_type.clone(),
                        index,
                        field: options.serial_field.clone(),
                    })
                }
            };

            let key = composite_key(record_type, &serial);
            fields.insert(options.serial_field.clone(), Value::String(key.clone()));
            staged.push((key, Record::from_fields(fields)));
        }
        tracing::trace!(group = %record_type, records = records.len(), "group staged");
    }

    Ok(staged)
}

pub(crate) fn not_found(key: &str) -> DotviewError {
    DotviewError::RecordNotFound(key.to_string())
}
