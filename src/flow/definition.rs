use super::component::ComponentKind;
use super::lenient::{deserialize_via_value, take_array, take_if, take_object, take_string};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value, json};

/// One step of a flow: an identifier, a component layout, and optional data bindings.
///
/// Attributes of the wrong JSON type are not interpreted; they stay in
/// `attributes` and are forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<bool>,
    /// Every other screen attribute (`title`, `refresh_on_back`, ...), kept verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Screen {
    pub fn new(id: impl Into<String>, children: Vec<LayoutNode>) -> Self {
        Self {
            id: id.into(),
            layout: Some(Layout::new(children)),
            data: None,
            terminal: None,
            attributes: Map::new(),
        }
    }

    /// Builds a screen from raw JSON. Only a missing or non-string `id` is an error.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(mut map) = value else {
            return Err("a screen must be a JSON object".to_string());
        };
        let id = take_string(&mut map, "id")
            .ok_or_else(|| "a screen needs a string 'id'".to_string())?;
        let layout = take_object(&mut map, "layout").map(Layout::from_map);
        let data = take_object(&mut map, "data");
        // Recomputed on output, so a malformed flag is simply dropped.
        let terminal = map.shift_remove("terminal").and_then(|v| v.as_bool());

        Ok(Self {
            id,
            layout,
            data,
            terminal,
            attributes: map,
        })
    }

    /// Top-level layout entries, empty when the screen has no usable layout.
    pub fn children(&self) -> &[LayoutNode] {
        self.layout
            .as_ref()
            .and_then(|l| l.children.as_deref())
            .unwrap_or(&[])
    }

    /// Visits every component of the screen depth-first, parents before children.
    pub fn for_each_component<'a>(&'a self, visit: &mut impl FnMut(&'a Component)) {
        walk_components(self.children(), visit);
    }

    pub fn has_complete_action(&self) -> bool {
        let mut found = false;
        self.for_each_component(&mut |c| found |= c.has_complete_action());
        found
    }
}

deserialize_via_value!(Screen, Screen::from_value);

fn walk_components<'a>(nodes: &'a [LayoutNode], visit: &mut impl FnMut(&'a Component)) {
    for node in nodes {
        if let LayoutNode::Component(component) = node {
            visit(component);
            if let Some(children) = &component.children {
                walk_components(children, visit);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// `None` when absent or not a list; a malformed value stays in `attributes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<LayoutNode>>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Layout {
    pub fn new(children: Vec<LayoutNode>) -> Self {
        let mut attributes = Map::new();
        attributes.insert("type".to_string(), json!("SingleColumnLayout"));
        Self {
            children: Some(children),
            attributes,
        }
    }

    pub fn from_map(mut map: Map<String, Value>) -> Self {
        Self {
            children: take_array(&mut map, "children").map(LayoutNode::from_values),
            attributes: map,
        }
    }

    fn parse(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            _ => Err("a layout must be a JSON object".to_string()),
        }
    }
}

deserialize_via_value!(Layout, Layout::parse);

/// A layout entry. Anything without a string `type` is carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LayoutNode {
    Component(Component),
    Opaque(Value),
}

impl LayoutNode {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => match Component::from_map(map) {
                Ok(component) => LayoutNode::Component(component),
                Err(map) => LayoutNode::Opaque(Value::Object(map)),
            },
            other => LayoutNode::Opaque(other),
        }
    }

    fn from_values(values: Vec<Value>) -> Vec<Self> {
        values.into_iter().map(Self::from_value).collect()
    }

    fn parse(value: Value) -> Result<Self, String> {
        Ok(Self::from_value(value))
    }
}

deserialize_via_value!(LayoutNode, LayoutNode::parse);

impl From<Component> for LayoutNode {
    fn from(component: Component) -> Self {
        LayoutNode::Component(component)
    }
}

/// A typed UI element inside a screen layout.
///
/// `id`, `name`, `on-click-action` and `children` are only read when they have
/// the expected shape; otherwise the raw value remains in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "data-source", skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,
    #[serde(rename = "on-click-action", skip_serializing_if = "Option::is_none")]
    pub on_click_action: Option<Action>,
    /// Nested components, for container types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<LayoutNode>>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Component {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            id: None,
            name: None,
            data_source: None,
            on_click_action: None,
            children: None,
            attributes: Map::new(),
        }
    }

    /// Reads a component from a raw object, handing the object back when it has
    /// no string `type`.
    pub fn from_map(mut map: Map<String, Value>) -> Result<Self, Map<String, Value>> {
        let Some(tag) = take_string(&mut map, "type") else {
            return Err(map);
        };
        let on_click_action = take_if(&mut map, "on-click-action", |v| {
            v.get("name").is_some_and(Value::is_string)
        })
        .and_then(|v| match v {
            Value::Object(action) => Action::from_map(action).ok(),
            _ => None,
        });

        Ok(Self {
            kind: ComponentKind::from_tag(&tag),
            id: take_string(&mut map, "id"),
            name: take_string(&mut map, "name"),
            data_source: map.shift_remove("data-source").map(DataSource::from_value),
            on_click_action,
            children: take_array(&mut map, "children").map(LayoutNode::from_values),
            attributes: map,
        })
    }

    fn parse(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(map) => {
                Self::from_map(map).map_err(|_| "a component needs a string 'type'".to_string())
            }
            _ => Err("a component must be a JSON object".to_string()),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.on_click_action = Some(action);
        self
    }

    pub fn with_children(mut self, children: Vec<LayoutNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_attribute(mut self, key: &str, value: Value) -> Self {
        self.attributes.insert(key.to_string(), value);
        self
    }

    /// The raw form-field name, if this component is a form field.
    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn has_complete_action(&self) -> bool {
        self.on_click_action
            .as_ref()
            .is_some_and(|a| a.name == ActionName::Complete)
    }
}

deserialize_via_value!(Component, Component::parse);

/// The options of a selection component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataSource {
    Options(Vec<DataSourceEntry>),
    /// A binding such as `${data.options}` or any other shape; never rewritten.
    Dynamic(Value),
}

impl DataSource {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                DataSource::Options(items.into_iter().map(DataSourceEntry::from_value).collect())
            }
            other => DataSource::Dynamic(other),
        }
    }

    fn parse(value: Value) -> Result<Self, String> {
        Ok(Self::from_value(value))
    }
}

deserialize_via_value!(DataSource, DataSource::parse);

/// One entry of an option list; entries without a string `id` are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataSourceEntry {
    Typed(DataSourceOption),
    Opaque(Value),
}

impl DataSourceEntry {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match take_string(&mut map, "id") {
                Some(id) => DataSourceEntry::Typed(DataSourceOption {
                    id,
                    attributes: map,
                }),
                None => DataSourceEntry::Opaque(Value::Object(map)),
            },
            other => DataSourceEntry::Opaque(other),
        }
    }
}

impl From<DataSourceOption> for DataSourceEntry {
    fn from(option: DataSourceOption) -> Self {
        DataSourceEntry::Typed(option)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSourceOption {
    pub id: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl DataSourceOption {
    pub fn new(id: impl Into<String>, title: &str) -> Self {
        let mut attributes = Map::new();
        attributes.insert("title".to_string(), json!(title));
        Self {
            id: id.into(),
            attributes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub name: ActionName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// `next` and any other action attributes.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Action {
    pub fn new(name: ActionName) -> Self {
        Self {
            name,
            payload: None,
            attributes: Map::new(),
        }
    }

    /// Reads an action from a raw object, handing it back when `name` is not a string.
    pub fn from_map(mut map: Map<String, Value>) -> Result<Self, Map<String, Value>> {
        let Some(name) = take_string(&mut map, "name") else {
            return Err(map);
        };
        Ok(Self {
            name: ActionName::from(name.as_str()),
            payload: map.shift_remove("payload"),
            attributes: map,
        })
    }

    fn parse(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(map) => {
                Self::from_map(map).map_err(|_| "an action needs a string 'name'".to_string())
            }
            _ => Err("an action must be a JSON object".to_string()),
        }
    }

    pub fn complete() -> Self {
        Self::new(ActionName::Complete)
    }

    /// A `navigate` action pointing at the given screen.
    pub fn navigate(next_screen: &str) -> Self {
        let mut action = Self::new(ActionName::Navigate);
        action.attributes.insert(
            "next".to_string(),
            json!({ "type": "screen", "name": next_screen }),
        );
        action
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

deserialize_via_value!(Action, Action::parse);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionName {
    Navigate,
    Complete,
    Other(String),
}

impl ActionName {
    pub fn as_str(&self) -> &str {
        match self {
            ActionName::Navigate => "navigate",
            ActionName::Complete => "complete",
            ActionName::Other(name) => name.as_str(),
        }
    }
}

impl From<&str> for ActionName {
    fn from(name: &str) -> Self {
        match name {
            "navigate" => ActionName::Navigate,
            "complete" => ActionName::Complete,
            other => ActionName::Other(other.to_string()),
        }
    }
}

impl Serialize for ActionName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActionName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ActionName::from(name.as_str()))
    }
}

/// Placeholder declaring that a field is supplied from an earlier screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(rename = "__example__")]
    pub example: String,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            field_type: "string".to_string(),
            example: String::new(),
        }
    }
}

impl From<FieldSpec> for Value {
    fn from(spec: FieldSpec) -> Self {
        json!({ "type": spec.field_type, "__example__": spec.example })
    }
}
