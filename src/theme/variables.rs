use serde_json::{Map, Value};

use super::document::{ThemeDocument, COLOR_SCHEMES_KEY};

/// A layered variable scope flattened to one binding per name.
///
/// Precedence, lowest to highest: document-level plain variables, the
/// selected color scheme's sub-map, the matched variant overlay's variables,
/// the matched aspect-ratio overlay's variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableScope {
    bindings: Map<String, Value>,
}

impl VariableScope {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_map(bindings: Map<String, Value>) -> Self {
        Self { bindings }
    }

    pub fn build(
        doc: &ThemeDocument,
        variant: &str,
        aspect_ratio: &str,
        color_scheme: &str,
    ) -> Self {
        let mut bindings = Map::new();
        for (name, value) in &doc.variables {
            if name != COLOR_SCHEMES_KEY {
                bindings.insert(name.clone(), value.clone());
            }
        }
        if let Some(scheme) = doc.color_scheme_variables(color_scheme) {
            for (name, value) in scheme {
                bindings.insert(name.clone(), value.clone());
            }
        }
        if let Some(overlay) = doc.variant_overlay(variant) {
            for (name, value) in &overlay.variables {
                bindings.insert(name.clone(), value.clone());
            }
        }
        if let Some(overlay) = doc.aspect_ratio_overlay(aspect_ratio) {
            for (name, value) in &overlay.variables {
                bindings.insert(name.clone(), value.clone());
            }
        }
        Self { bindings }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Scalar rendering of a binding for text substitution. Arrays and
    /// objects have no text form and leave the placeholder unresolved.
    fn text_for(&self, name: &str) -> Option<String> {
        match self.bindings.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.bindings
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.bindings
    }
}

fn is_identifier(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Substitutes every `${identifier}` occurrence bound in `scope`.
///
/// Unresolved identifiers stay as the literal `${identifier}` so a broken
/// theme remains visibly debuggable. Substituted text is never re-scanned
/// within a pass, which keeps resolution idempotent: a value containing
/// `${...}` cannot inject a second substitution round.
pub fn resolve_str(template: &str, scope: &VariableScope) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if is_identifier(&after[..end]) => {
                let name = &after[..end];
                match scope.text_for(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            _ => {
                // Not a well-formed placeholder; emit the marker and move on.
                out.push_str("${");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Recursive substitution over the closed set of JSON value shapes.
/// Only strings are rewritten; numbers, booleans and null pass through.
pub fn resolve_value(value: &Value, scope: &VariableScope) -> Value {
    match value {
        Value::String(s) => Value::String(resolve_str(s, scope)),
        Value::Array(items) => {
            Value::Array(items.iter().map(|v| resolve_value(v, scope)).collect())
        }
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), resolve_value(v, scope)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Applies `resolve_value` to each property of a property map.
pub fn resolve_properties(properties: &Map<String, Value>, scope: &VariableScope) -> Map<String, Value> {
    properties
        .iter()
        .map(|(k, v)| (k.clone(), resolve_value(v, scope)))
        .collect()
}
