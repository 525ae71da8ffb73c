use serde_yaml::Value;

use super::{KeyPattern, Tree};

/// Tree handle over a `serde_yaml::Value`. Tags are looked through.
#[derive(Debug, Clone, Copy)]
pub struct YamlTree<'a> {
    value: &'a Value,
}

impl<'a> YamlTree<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            value: untagged(value),
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }
}

fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

/// Text of a mapping key. Non-scalar keys have none and are skipped.
fn key_text(key: &Value) -> Option<String> {
    match untagged(key) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl Tree for YamlTree<'_> {
    fn is_branch(&self) -> bool {
        self.value.is_mapping()
    }

    fn child_named(&self, name: &str) -> Option<Self> {
        self.value
            .as_mapping()?
            .iter()
            .find(|(key, _)| key_text(key).as_deref() == Some(name))
            .map(|(_, value)| YamlTree::new(value))
    }

    fn children_matching(&self, pattern: &KeyPattern) -> Vec<(String, Self)> {
        let Some(mapping) = self.value.as_mapping() else {
            return Vec::new();
        };
        mapping
            .iter()
            .filter_map(|(key, value)| key_text(key).map(|text| (text, value)))
            .filter(|(text, _)| pattern.matches(text))
            .map(|(text, value)| (text, YamlTree::new(value)))
            .collect()
    }

    fn leaf_value(&self) -> Option<String> {
        match self.value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Sequence(items) if items.iter().all(Value::is_string) => Some(
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
