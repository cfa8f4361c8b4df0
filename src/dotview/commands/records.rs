use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::memory::InMemoryDb;
use crate::store::{load_db, LoadOptions, RecordDb};
use serde_json::Value;

/// Load the record store from `document`; show one record, or list every key.
pub fn run(document: &Value, options: &LoadOptions, key: Option<&str>) -> Result<CmdResult> {
    let mut db = InMemoryDb::new();
    let loaded = load_db(&mut db, document, options)?;

    if let Some(key) = key {
        let record = db.get(key)?;
        return Ok(CmdResult::default().with_values(vec![record.to_value()]));
    }

    let mut result = CmdResult::default().with_listed_keys(db.keys());
    if loaded > db.len() {
        result.add_message(CmdMessage::warning(format!(
            "{} record(s) replaced by later duplicates",
            loaded - db.len()
        )));
    }
    result.add_message(CmdMessage::info(format!("{} record(s) loaded", db.len())));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DotviewError, LoadError};
    use serde_json::json;

    fn schedule() -> Value {
        json!({"Schedule": {
            "events": [{"serial": 33950, "name": "There *Will* Be Bugs"}],
            "venues": [{"serial": 1449, "name": "Portland 256"}]
        }})
    }

    #[test]
    fn lists_every_key() {
        let result = run(&schedule(), &LoadOptions::default(), None).unwrap();
        assert_eq!(result.listed_keys, vec!["events.33950", "venues.1449"]);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "2 record(s) loaded");
    }

    #[test]
    fn shows_one_record() {
        let result = run(&schedule(), &LoadOptions::default(), Some("venues.1449")).unwrap();
        assert_eq!(
            result.values,
            vec![json!({"serial": "venues.1449", "name": "Portland 256"})]
        );
    }

    #[test]
    fn unknown_key_is_record_not_found() {
        assert!(matches!(
            run(&schedule(), &LoadOptions::default(), Some("venues.1")),
            Err(DotviewError::RecordNotFound(_))
        ));
    }

    #[test]
    fn warns_about_duplicates() {
        let doc = json!({"Schedule": {"events": [{"serial": 1}, {"serial": 1}]}});
        let result = run(&doc, &LoadOptions::default(), None).unwrap();
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
    }

    #[test]
    fn load_errors_propagate() {
        let doc = json!({"Schedule": {"events": [{"name": "no serial"}]}});
        assert!(matches!(
            run(&doc, &LoadOptions::default(), None),
            Err(DotviewError::Load(LoadError::MissingSerial { .. }))
        ));
    }
}
