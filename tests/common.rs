//! Common test utilities for building flow definitions.
use flowcraft::prelude::*;
use serde_json::json;

/// A `TextInput` form field.
#[allow(dead_code)]
pub fn text_input(name: &str) -> LayoutNode {
    Component::new(ComponentKind::TextInput)
        .with_name(name)
        .with_attribute("label", json!(name))
        .into()
}

/// A `Footer` that navigates to `next`.
#[allow(dead_code)]
pub fn navigate_footer(next: &str) -> LayoutNode {
    Component::new(ComponentKind::Footer)
        .with_attribute("label", json!("Continue"))
        .with_action(Action::navigate(next))
        .into()
}

/// A `Footer` that completes the flow.
#[allow(dead_code)]
pub fn complete_footer() -> LayoutNode {
    Component::new(ComponentKind::Footer)
        .with_attribute("label", json!("Submit"))
        .with_action(Action::complete())
        .into()
}

/// A plain heading, no field and no action.
#[allow(dead_code)]
pub fn heading(text: &str) -> LayoutNode {
    Component::new(ComponentKind::TextHeading)
        .with_attribute("text", json!(text))
        .into()
}

/// Two screens: a name field that navigates on, then a completing footer.
///
/// `SCREEN_1: full_name -> navigate(SCREEN_2)`, `SCREEN_2: complete`
#[allow(dead_code)]
pub fn create_two_screen_flow() -> Vec<Screen> {
    vec![
        Screen::new(
            "SCREEN_1",
            vec![text_input("full_name"), navigate_footer("SCREEN_2")],
        ),
        Screen::new("SCREEN_2", vec![complete_footer()]),
    ]
}

/// Three screens, one field on each of the first two.
///
/// `name -> email -> complete`
#[allow(dead_code)]
pub fn create_three_screen_flow() -> Vec<Screen> {
    vec![
        Screen::new("WELCOME", vec![text_input("name"), navigate_footer("CONTACT")]),
        Screen::new("CONTACT", vec![text_input("email"), navigate_footer("DONE")]),
        Screen::new("DONE", vec![heading("Thanks"), complete_footer()]),
    ]
}

/// Looks up the `on-click-action` payload of the first component with an action.
#[allow(dead_code)]
pub fn action_payload(screen: &Screen) -> Option<serde_json::Value> {
    let mut payload = None;
    screen.for_each_component(&mut |component| {
        if payload.is_none() {
            if let Some(action) = &component.on_click_action {
                payload = Some(action.payload.clone().unwrap_or(serde_json::Value::Null));
            }
        }
    });
    payload
}
