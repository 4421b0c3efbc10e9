use super::fields::{collect_fields, flow_fields};
use super::payload::PayloadContext;
use super::sanitize::sanitize_identifier;
use crate::flow::{
    Action, ActionName, Component, ComponentKind, DataSource, DataSourceEntry, DataSourceOption,
    FieldSpec, Layout, LayoutNode, Screen,
};
use ahash::AHashSet;
use serde_json::{Map, Value};
use tracing::debug;

/// Rewrites every screen of a flow into its platform form, without validating.
///
/// The input is left untouched; every rewritten node in the output is a fresh value.
pub fn rewrite_screens(screens: &[Screen]) -> Vec<Screen> {
    let no_extra_types = AHashSet::new();
    ScreenRewriter::new(screens, &no_extra_types).rewrite_all(screens)
}

/// Walks screens left to right, threading the fields of earlier screens forward.
pub(crate) struct ScreenRewriter<'a> {
    extra_no_id_types: &'a AHashSet<String>,
    flow_fields: Vec<String>,
    prior_fields: Vec<String>,
}

impl<'a> ScreenRewriter<'a> {
    pub(crate) fn new(screens: &[Screen], extra_no_id_types: &'a AHashSet<String>) -> Self {
        Self {
            extra_no_id_types,
            flow_fields: flow_fields(screens),
            prior_fields: Vec::new(),
        }
    }

    pub(crate) fn flow_fields(&self) -> &[String] {
        &self.flow_fields
    }

    pub(crate) fn rewrite_all(mut self, screens: &[Screen]) -> Vec<Screen> {
        screens
            .iter()
            .enumerate()
            .map(|(index, screen)| self.rewrite_screen(index, screen))
            .collect()
    }

    fn rewrite_screen(&mut self, index: usize, screen: &Screen) -> Screen {
        let id = sanitize_identifier(&screen.id).into_owned();
        if id != screen.id {
            debug!(original = %screen.id, sanitized = %id, "screen id rewritten");
        }

        let screen_fields = collect_fields(screen);
        let screen_field_set: AHashSet<String> = screen_fields.iter().cloned().collect();

        // A non-object `data` stays in `attributes` and is forwarded as authored.
        let raw_data = screen.attributes.contains_key("data");
        let mut data = screen.data.clone();
        if index > 0 && !self.prior_fields.is_empty() && !raw_data {
            let data = data.get_or_insert_with(Map::new);
            for field in &self.prior_fields {
                data.entry(field.as_str())
                    .or_insert_with(|| FieldSpec::default().into());
            }
        }

        let context = PayloadContext {
            screen_fields: &screen_fields,
            screen_field_set: &screen_field_set,
            prior_fields: &self.prior_fields,
            flow_fields: &self.flow_fields,
        };

        let mut terminal = false;
        let layout = screen.layout.as_ref().map(|layout| Layout {
            children: layout
                .children
                .as_ref()
                .map(|children| self.rewrite_nodes(children, &context, &mut terminal)),
            attributes: layout.attributes.clone(),
        });

        debug!(
            screen = %id,
            fields = screen_fields.len(),
            inherited = self.prior_fields.len(),
            terminal,
            "rewrote screen"
        );

        self.prior_fields.extend(screen_fields);

        Screen {
            id,
            layout,
            data,
            terminal: terminal.then_some(true),
            attributes: screen.attributes.clone(),
        }
    }

    fn rewrite_nodes(
        &self,
        nodes: &[LayoutNode],
        context: &PayloadContext<'_>,
        terminal: &mut bool,
    ) -> Vec<LayoutNode> {
        nodes
            .iter()
            .map(|node| match node {
                LayoutNode::Component(component) => {
                    LayoutNode::Component(self.rewrite_component(component, context, terminal))
                }
                LayoutNode::Opaque(value) => LayoutNode::Opaque(value.clone()),
            })
            .collect()
    }

    fn rewrite_component(
        &self,
        component: &Component,
        context: &PayloadContext<'_>,
        terminal: &mut bool,
    ) -> Component {
        let mut attributes = component.attributes.clone();
        let id = if self.suppresses_id(&component.kind) {
            // Malformed ids are still ids.
            let raw_id = attributes.shift_remove("id");
            if component.id.is_some() || raw_id.is_some() {
                debug!(kind = %component.kind, "stripped id from component");
            }
            None
        } else {
            component.id.clone()
        };

        let on_click_action = component.on_click_action.as_ref().map(|action| {
            if action.name == ActionName::Complete {
                *terminal = true;
            }
            rewrite_action(action, context)
        });

        let children = component
            .children
            .as_ref()
            .map(|children| self.rewrite_nodes(children, context, terminal));

        Component {
            kind: component.kind.clone(),
            id,
            name: component
                .name
                .as_deref()
                .map(|name| sanitize_identifier(name).into_owned()),
            data_source: component.data_source.as_ref().map(rewrite_data_source),
            on_click_action,
            children,
            attributes,
        }
    }

    fn suppresses_id(&self, kind: &ComponentKind) -> bool {
        kind.suppresses_id() || self.extra_no_id_types.contains(kind.as_str())
    }
}

fn rewrite_action(action: &Action, context: &PayloadContext<'_>) -> Action {
    let payload = match action.name {
        ActionName::Complete => Some(Value::Object(context.complete_payload())),
        ActionName::Navigate => match context.navigate_payload() {
            Some(payload) => Some(Value::Object(payload)),
            None => action.payload.clone(),
        },
        ActionName::Other(_) => action.payload.clone(),
    };

    Action {
        name: action.name.clone(),
        payload,
        attributes: action.attributes.clone(),
    }
}

fn rewrite_data_source(source: &DataSource) -> DataSource {
    match source {
        DataSource::Options(entries) => DataSource::Options(
            entries
                .iter()
                .map(|entry| match entry {
                    DataSourceEntry::Typed(option) => DataSourceEntry::Typed(DataSourceOption {
                        id: sanitize_identifier(&option.id).into_owned(),
                        attributes: option.attributes.clone(),
                    }),
                    DataSourceEntry::Opaque(value) => DataSourceEntry::Opaque(value.clone()),
                })
                .collect(),
        ),
        DataSource::Dynamic(value) => DataSource::Dynamic(value.clone()),
    }
}
