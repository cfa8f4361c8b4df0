use crate::commands::CmdResult;
use crate::error::Result;
use crate::view::wrap;
use serde_json::Value;

/// Navigate `path` and return what it points at.
pub fn run(document: &Value, path: &str) -> Result<CmdResult> {
    let found = wrap(document).path(path)?;
    Ok(CmdResult::default().with_values(vec![found.to_value()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DotviewError;
    use serde_json::json;

    #[test]
    fn returns_the_value_at_path() {
        let doc = json!({"Schedule": {"events": [{"name": "Talk A"}]}});
        let result = run(&doc, "Schedule.events.0.name").unwrap();
        assert_eq!(result.values, vec![json!("Talk A")]);
    }

    #[test]
    fn empty_path_returns_document() {
        let doc = json!({"a": 1});
        let result = run(&doc, "").unwrap();
        assert_eq!(result.values, vec![doc]);
    }

    #[test]
    fn reserved_keys_are_read_renamed() {
        let doc = json!({"match": {"type": "x"}});
        let result = run(&doc, "match_.type_").unwrap();
        assert_eq!(result.values, vec![json!("x")]);
    }

    #[test]
    fn unknown_segment_fails() {
        let doc = json!({"a": 1});
        assert!(matches!(
            run(&doc, "b"),
            Err(DotviewError::AttributeNotFound { .. })
        ));
    }
}
