use crate::error::CompileError;
use crate::flow::{FlowDocument, Screen};
use ahash::AHashSet;
use tracing::info;

mod fields;
mod payload;
mod rewrite;
mod sanitize;
mod validate;

pub use fields::{collect_fields, flow_fields};
pub use payload::{FieldScope, PayloadContext};
pub use rewrite::rewrite_screens;
pub use sanitize::{is_valid_identifier, sanitize_identifier};
pub use validate::{diagnose, validate};

use rewrite::ScreenRewriter;

/// The output of a successful compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFlow {
    pub screens: Vec<Screen>,
    /// Every field of the flow, in first-occurrence order.
    pub fields: Vec<String>,
}

impl CompiledFlow {
    /// Wraps the screens with the stored schema version for submission.
    pub fn into_document(self, version: impl Into<String>) -> FlowDocument {
        FlowDocument::new(version, self.screens)
    }
}

/// Validates authored screens and rewrites them into platform-ready screens.
pub struct Compiler {
    screens: Vec<Screen>,
    extra_no_id_types: AHashSet<String>,
    strict_field_names: bool,
}

pub struct CompilerBuilder {
    screens: Vec<Screen>,
    extra_no_id_types: AHashSet<String>,
    strict_field_names: bool,
}

impl CompilerBuilder {
    pub fn new(screens: Vec<Screen>) -> Self {
        Self {
            screens,
            extra_no_id_types: AHashSet::new(),
            strict_field_names: false,
        }
    }

    /// Strips `id` from components of this type tag in addition to the built-in kinds.
    pub fn with_no_id_type(mut self, type_tag: &str) -> Self {
        self.extra_no_id_types.insert(type_tag.to_string());
        self
    }

    /// Rejects field names that collide or vanish once sanitized.
    pub fn strict_field_names(mut self, strict: bool) -> Self {
        self.strict_field_names = strict;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            screens: self.screens,
            extra_no_id_types: self.extra_no_id_types,
            strict_field_names: self.strict_field_names,
        }
    }
}

impl Compiler {
    pub fn builder(screens: Vec<Screen>) -> CompilerBuilder {
        CompilerBuilder::new(screens)
    }

    /// Validates the flow structure, then rewrites every screen.
    ///
    /// Nothing is rewritten when validation fails.
    pub fn compile(self) -> Result<CompiledFlow, CompileError> {
        validate(&self.screens)?;
        if self.strict_field_names {
            self.check_field_names()?;
        }

        let rewriter = ScreenRewriter::new(&self.screens, &self.extra_no_id_types);
        let fields = rewriter.flow_fields().to_vec();
        let screens = rewriter.rewrite_all(&self.screens);

        info!(
            screens = screens.len(),
            fields = fields.len(),
            "compiled flow"
        );
        Ok(CompiledFlow { screens, fields })
    }

    fn check_field_names(&self) -> Result<(), CompileError> {
        for (screen_index, screen) in self.screens.iter().enumerate() {
            let mut empty = None;
            screen.for_each_component(&mut |component| {
                if let Some(raw) = component.field_name() {
                    if empty.is_none() && sanitize_identifier(raw).is_empty() {
                        empty = Some(raw.to_string());
                    }
                }
            });
            if let Some(raw) = empty {
                return Err(CompileError::EmptyFieldName { screen_index, raw });
            }
        }

        if let Some((screen_index, first, second, sanitized)) =
            fields::find_collisions(&self.screens).into_iter().next()
        {
            return Err(CompileError::FieldNameCollision {
                screen_index,
                first,
                second,
                sanitized,
            });
        }
        Ok(())
    }
}
