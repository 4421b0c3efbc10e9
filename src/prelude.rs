//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! flowcraft crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowcraft::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let document = FlowDocument::from_file("path/to/flow.json")?;
//! let version = document.version.clone();
//!
//! let compiled = Compiler::builder(document.into_screens()?).build().compile()?;
//! compiled.into_document(version).save("path/to/compiled.json")?;
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{
    CompiledFlow, Compiler, CompilerBuilder, collect_fields, diagnose, flow_fields,
    rewrite_screens, sanitize_identifier, validate,
};

// Flow model
pub use crate::flow::{
    Action, ActionName, Component, ComponentKind, DataSource, DataSourceEntry, DataSourceOption,
    FieldSpec, FlowDocument, IntoScreens, Layout, LayoutNode, Screen,
};

// Error types
pub use crate::error::{CompileError, DefinitionError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
