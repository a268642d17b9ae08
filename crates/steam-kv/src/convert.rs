//! One-way conversions into `serde_json::Value`.
//!
//! Useful for debugging and for exporting documents to JSON tooling.
//! Sets become JSON objects (key-sorted, like the codecs), integer
//! leaves become JSON numbers, string leaves become JSON strings.

use crate::{keyvalues, vdf};

impl From<&vdf::Value> for serde_json::Value {
    fn from(value: &vdf::Value) -> Self {
        match value {
            vdf::Value::Str(s) => serde_json::Value::String(s.clone()),
            vdf::Value::Int(i) => serde_json::Value::from(*i),
            vdf::Value::Set(set) => serde_json::Value::from(set),
        }
    }
}

impl From<&vdf::Set> for serde_json::Value {
    fn from(doc: &vdf::Set) -> Self {
        let mut map = serde_json::Map::new();
        for (key, value) in doc {
            map.insert(key.clone(), serde_json::Value::from(value));
        }
        serde_json::Value::Object(map)
    }
}

impl From<&keyvalues::Value> for serde_json::Value {
    fn from(value: &keyvalues::Value) -> Self {
        match value {
            keyvalues::Value::Str(s) => serde_json::Value::String(s.clone()),
            keyvalues::Value::Set(set) => serde_json::Value::from(set),
        }
    }
}

impl From<&keyvalues::Set> for serde_json::Value {
    fn from(doc: &keyvalues::Set) -> Self {
        let mut map = serde_json::Map::new();
        for (key, value) in doc {
            map.insert(key.clone(), serde_json::Value::from(value));
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{keyvalues, vdf};

    #[test]
    fn vdf_documents_convert_to_json_objects() {
        let mut inner = vdf::Set::new();
        inner.insert("exe", vdf::Value::Str("/bin/true".into()));
        let mut doc = vdf::Set::new();
        doc.insert("appid", vdf::Value::Int(42));
        doc.insert("shortcut", vdf::Value::Set(inner));
        assert_eq!(
            serde_json::Value::from(&doc),
            json!({"appid": 42, "shortcut": {"exe": "/bin/true"}})
        );
    }

    #[test]
    fn keyvalues_documents_convert_to_json_objects() {
        let mut doc = keyvalues::Set::new();
        doc.insert("name", keyvalues::Value::Str("hello".into()));
        assert_eq!(serde_json::Value::from(&doc), json!({"name": "hello"}));
    }
}
