use super::{not_found, RecordDb};
use crate::error::Result;
use crate::record::Record;
use std::collections::HashMap;

/// In-memory record storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryDb {
    records: HashMap<String, Record>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordDb for InMemoryDb {
    fn insert(&mut self, key: String, record: Record) -> Option<Record> {
        self.records.insert(key, record)
    }

    fn get(&self, key: &str) -> Result<&Record> {
        self.records.get(key).ok_or_else(|| not_found(key))
    }

    fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.records.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::{load_db, LoadOptions};
    use serde_json::{json, Value};

    pub struct DbFixture {
        pub db: InMemoryDb,
    }

    impl Default for DbFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DbFixture {
        pub fn new() -> Self {
            Self {
                db: InMemoryDb::new(),
            }
        }

        pub fn with_document(mut self, document: &Value) -> Self {
            load_db(&mut self.db, document, &LoadOptions::default()).unwrap();
            self
        }

        /// A trimmed conference schedule with one record per group.
        pub fn with_schedule(self) -> Self {
            self.with_document(&json!({
                "Schedule": {
                    "conferences": [{"serial": 115}],
                    "events": [{
                        "serial": 34505,
                        "name": "Why Schools Don't Use Open Source to Teach Programming",
                        "venue_serial": 1458,
                        "speakers": [157509]
                    }],
                    "speakers": [{"serial": 157509, "name": "Robert Lefkowitz"}],
                    "venues": [{"serial": 1458, "name": "Portland 251", "category": "Conference Venues"}]
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::DbFixture;
    use super::*;
    use crate::error::DotviewError;
    use serde_json::{Map, Value};

    #[test]
    fn get_missing_is_record_not_found() {
        let db = InMemoryDb::new();
        match db.get("events.1") {
            Err(DotviewError::RecordNotFound(key)) => assert_eq!(key, "events.1"),
            other => panic!("Expected RecordNotFound, got {:?}", other),
        }
    }

    #[test]
    fn insert_returns_replaced_record() {
        let mut db = InMemoryDb::new();
        let mut fields = Map::new();
        fields.insert("name".into(), Value::from("a"));
        assert!(db.insert("k.1".into(), Record::from_fields(fields.clone())).is_none());
        assert!(db.insert("k.1".into(), Record::from_fields(fields)).is_some());
        assert_eq!(db.len(), 1);
        assert!(db.contains("k.1"));
    }

    #[test]
    fn schedule_fixture_indexes_every_group() {
        let fixture = DbFixture::default().with_schedule();
        assert_eq!(
            fixture.db.keys(),
            vec![
                "conferences.115",
                "events.34505",
                "speakers.157509",
                "venues.1458"
            ]
        );
        let venue = fixture.db.get("venues.1458").unwrap();
        assert_eq!(*venue.get("name").unwrap(), "Portland 251");
    }
}
