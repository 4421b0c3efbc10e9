use ahash::AHashSet;
use serde_json::{Map, Value};

/// Where a payload value is read from at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    /// Entered on the current screen: `${form.<name>}`.
    Form,
    /// Carried over from an earlier screen: `${data.<name>}`.
    Data,
}

impl FieldScope {
    pub fn template(self, field: &str) -> String {
        match self {
            FieldScope::Form => format!("${{form.{}}}", field),
            FieldScope::Data => format!("${{data.{}}}", field),
        }
    }
}

/// The field sets a screen's action payloads are built from.
pub struct PayloadContext<'a> {
    /// This screen's own fields, in collection order.
    pub screen_fields: &'a [String],
    /// Set view of `screen_fields`.
    pub screen_field_set: &'a AHashSet<String>,
    /// Fields of every earlier screen, in screen order.
    pub prior_fields: &'a [String],
    /// First-occurrence union of fields across the whole flow.
    pub flow_fields: &'a [String],
}

impl PayloadContext<'_> {
    /// Payload for a `complete` action: every flow field, form-scoped when it
    /// belongs to this screen and data-scoped otherwise.
    pub fn complete_payload(&self) -> Map<String, Value> {
        self.flow_fields
            .iter()
            .map(|field| {
                let scope = if self.screen_field_set.contains(field) {
                    FieldScope::Form
                } else {
                    FieldScope::Data
                };
                (field.clone(), Value::String(scope.template(field)))
            })
            .collect()
    }

    /// Payload for a `navigate` action, or `None` when this screen declares no
    /// fields and the author's payload must stay as it is.
    pub fn navigate_payload(&self) -> Option<Map<String, Value>> {
        if self.screen_fields.is_empty() {
            return None;
        }

        let mut payload = Map::new();
        for field in self.prior_fields {
            payload.insert(field.clone(), Value::String(FieldScope::Data.template(field)));
        }
        // Own fields win over a same-named prior field.
        for field in self.screen_fields {
            payload.insert(field.clone(), Value::String(FieldScope::Form.template(field)));
        }
        Some(payload)
    }
}
