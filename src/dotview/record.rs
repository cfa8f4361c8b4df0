use crate::error::{DotviewError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// A flat record whose fields are its attributes.
///
/// Unlike a [`FrozenView`](crate::view::FrozenView), a record owns its values
/// and never wraps them: a nested mapping field comes back as a raw value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Result<&Value> {
        self.fields
            .get(name)
            .ok_or_else(|| DotviewError::attribute_not_found(name))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(fields) => Record::from_fields(fields),
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn fields_are_attributes() {
        let rec = record(json!({"serial": "venues.1462", "name": "F151"}));
        assert_eq!(*rec.get("name").unwrap(), "F151");
        assert_eq!(*rec.get("serial").unwrap(), "venues.1462");
    }

    #[test]
    fn missing_field_is_attribute_not_found() {
        let rec = record(json!({"name": "F151"}));
        match rec.get("category") {
            Err(DotviewError::AttributeNotFound { name }) => assert_eq!(name, "category"),
            other => panic!("Expected AttributeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn nested_fields_stay_raw() {
        let rec = record(json!({"speakers": [3471, 5199], "room": {"floor": 1}}));
        assert_eq!(*rec.get("speakers").unwrap(), json!([3471, 5199]));
        assert_eq!(rec.get("room").unwrap()["floor"], 1);
    }

    #[test]
    fn serializes_as_its_fields() {
        let rec = record(json!({"serial": "events.1", "name": "Talk A"}));
        let text = serde_json::to_string(&rec).unwrap();
        assert_eq!(text, r#"{"serial":"events.1","name":"Talk A"}"#);
        assert_eq!(rec.to_value(), json!({"serial": "events.1", "name": "Talk A"}));
    }
}
