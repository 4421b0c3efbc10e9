use super::definition::Screen;
use super::document::FlowDocument;
use crate::error::DefinitionError;
use serde_json::Value;

/// A trait for stored or custom flow representations that can hand the compiler
/// its list of screens.
///
/// This is the seam between the compiler and whatever persists flows. Implement
/// it on your own record type to feed the compiler without an intermediate copy
/// of the whole document.
///
/// # Example
///
/// ```rust,no_run
/// use flowcraft::prelude::*;
/// use flowcraft::error::DefinitionError;
///
/// struct StoredFlow { screens_json: String }
///
/// impl IntoScreens for StoredFlow {
///     fn into_screens(self) -> std::result::Result<Vec<Screen>, DefinitionError> {
///         Ok(serde_json::from_str(&self.screens_json)?)
///     }
/// }
/// ```
pub trait IntoScreens {
    /// Consumes the object and returns the author's screens in flow order.
    fn into_screens(self) -> Result<Vec<Screen>, DefinitionError>;
}

impl IntoScreens for Vec<Screen> {
    fn into_screens(self) -> Result<Vec<Screen>, DefinitionError> {
        Ok(self)
    }
}

impl IntoScreens for FlowDocument {
    fn into_screens(self) -> Result<Vec<Screen>, DefinitionError> {
        Ok(self.screens)
    }
}

/// Accepts a bare screen array, an object with `screens`, or a stored flow
/// record whose `flow_json` holds the screens.
impl IntoScreens for Value {
    fn into_screens(self) -> Result<Vec<Screen>, DefinitionError> {
        let screens = match self {
            Value::Array(items) => Value::Array(items),
            Value::Object(mut object) => match object.remove("screens") {
                Some(screens) => screens,
                None => match object.remove("flow_json") {
                    Some(Value::String(raw)) => {
                        return serde_json::from_str::<Value>(&raw)?.into_screens();
                    }
                    Some(flow_json) => return flow_json.into_screens(),
                    None => return Err(DefinitionError::MissingScreens),
                },
            },
            _ => return Err(DefinitionError::MissingScreens),
        };
        Ok(serde_json::from_value(screens)?)
    }
}
