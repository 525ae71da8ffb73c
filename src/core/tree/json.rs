use serde_json::Value;

use super::{KeyPattern, Tree};

/// Tree handle over a `serde_json::Value`.
#[derive(Debug, Clone, Copy)]
pub struct JsonTree<'a> {
    value: &'a Value,
}

impl<'a> JsonTree<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }
}

impl Tree for JsonTree<'_> {
    fn is_branch(&self) -> bool {
        self.value.is_object()
    }

    fn child_named(&self, name: &str) -> Option<Self> {
        self.value.as_object()?.get(name).map(JsonTree::new)
    }

    fn children_matching(&self, pattern: &KeyPattern) -> Vec<(String, Self)> {
        let Some(map) = self.value.as_object() else {
            return Vec::new();
        };
        map.iter()
            .filter(|(key, _)| pattern.matches(key))
            .map(|(key, value)| (key.clone(), JsonTree::new(value)))
            .collect()
    }

    fn leaf_value(&self) -> Option<String> {
        match self.value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            // String arrays are read as a whole (i18next `returnObjects` lists)
            Value::Array(items) if items.iter().all(Value::is_string) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        }
    }
}
