use thiserror::Error;

/// Structural problems detected before any rewriting starts.
///
/// `screen_index` values are 0-based; the rendered messages use the 1-based
/// position an author sees in the flow builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The flow has no screens")]
    EmptyFlow,

    #[error("No screen has a 'complete' action; the last screen must end the flow")]
    MissingTerminalAction,

    #[error(
        "Screen {} has a 'complete' action, but only the last screen may complete the flow",
        .screen_index + 1
    )]
    MisplacedTerminalAction { screen_index: usize },
}

impl ValidationError {
    /// The 1-based screen position this error refers to, if any.
    pub fn screen_number(&self) -> Option<usize> {
        match self {
            ValidationError::MisplacedTerminalAction { screen_index } => Some(screen_index + 1),
            _ => None,
        }
    }
}

/// Errors that can occur while compiling a flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "Field names '{first}' and '{second}' both become '{sanitized}' after sanitization (screen {})",
        .screen_index + 1
    )]
    FieldNameCollision {
        screen_index: usize,
        first: String,
        second: String,
        sanitized: String,
    },

    #[error(
        "Field name '{raw}' on screen {} has no usable characters left after sanitization",
        .screen_index + 1
    )]
    EmptyFieldName { screen_index: usize, raw: String },
}

/// Errors raised while loading a flow definition into the compiler's model.
#[derive(Error, Debug, Clone)]
pub enum DefinitionError {
    #[error("Failed to parse flow JSON: {0}")]
    Json(String),

    #[error("Failed to access flow file: {0}")]
    Io(String),

    #[error("The flow definition does not contain a 'screens' list")]
    MissingScreens,
}

impl From<serde_json::Error> for DefinitionError {
    fn from(err: serde_json::Error) -> Self {
        DefinitionError::Json(err.to_string())
    }
}
