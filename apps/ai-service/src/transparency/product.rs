use serde_json::{Map, Value};

/// Read-only view over an open-ended product attribute map.
///
/// Accessors never fail: absent keys and unexpected shapes degrade to
/// falsy / empty / `None`.
#[derive(Debug, Clone, Copy)]
pub struct ProductRecord<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> ProductRecord<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Loose truthiness: `false`, `null`, `0`, `""`, `[]`, `{}` and absent
    /// keys are falsy, everything else is truthy.
    pub fn is_truthy(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
        }
    }

    /// Number of entries in a list field. Non-list values count as zero.
    pub fn list_len(&self, key: &str) -> usize {
        self.fields
            .get(key)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_truthiness_of_falsy_values() {
        let map = fields(json!({
            "f": false, "n": null, "zero": 0, "fzero": 0.0,
            "empty_str": "", "empty_list": [], "empty_obj": {}
        }));
        let record = ProductRecord::new(&map);
        for key in ["f", "n", "zero", "fzero", "empty_str", "empty_list", "empty_obj", "absent"] {
            assert!(!record.is_truthy(key), "{key} should be falsy");
        }
    }

    #[test]
    fn test_truthiness_of_truthy_values() {
        let map = fields(json!({
            "t": true, "num": 3, "neg": -1.5, "s": "Local farms",
            "list": ["a"], "obj": {"origin": "Kenya"}
        }));
        let record = ProductRecord::new(&map);
        for key in ["t", "num", "neg", "s", "list", "obj"] {
            assert!(record.is_truthy(key), "{key} should be truthy");
        }
    }

    #[test]
    fn test_list_len_degrades_non_lists() {
        let map = fields(json!({
            "list": ["Organic", "Fair Trade", "Kosher"],
            "text": "Organic",
            "null": null,
            "number": 4
        }));
        let record = ProductRecord::new(&map);
        assert_eq!(record.list_len("list"), 3);
        assert_eq!(record.list_len("text"), 0);
        assert_eq!(record.list_len("null"), 0);
        assert_eq!(record.list_len("number"), 0);
        assert_eq!(record.list_len("absent"), 0);
    }

    #[test]
    fn test_text_only_returns_strings() {
        let map = fields(json!({"impact": "low", "flag": true}));
        let record = ProductRecord::new(&map);
        assert_eq!(record.text("impact"), Some("low"));
        assert_eq!(record.text("flag"), None);
        assert_eq!(record.text("absent"), None);
    }
}
