//! Tests for the structural checks that run before any rewriting.
mod common;
use common::*;
use flowcraft::prelude::*;

#[test]
fn test_empty_flow_is_rejected() {
    assert_eq!(validate(&[]), Err(ValidationError::EmptyFlow));
    assert_eq!(diagnose(&[]), vec![ValidationError::EmptyFlow]);
}

#[test]
fn test_flow_without_complete_action_is_rejected() {
    let screens = vec![Screen::new("ONLY", vec![text_input("name")])];
    assert_eq!(
        validate(&screens),
        Err(ValidationError::MissingTerminalAction)
    );
}

#[test]
fn test_screen_without_layout_counts_as_non_terminal() {
    let mut screen = Screen::new("ONLY", vec![]);
    screen.layout = None;
    assert_eq!(
        validate(&[screen]),
        Err(ValidationError::MissingTerminalAction)
    );
}

#[test]
fn test_complete_action_on_first_of_two_screens_is_misplaced() {
    let screens = vec![
        Screen::new("FIRST", vec![complete_footer()]),
        Screen::new("SECOND", vec![heading("Nothing here")]),
    ];
    assert_eq!(
        validate(&screens),
        Err(ValidationError::MisplacedTerminalAction { screen_index: 0 })
    );
}

#[test]
fn test_complete_action_on_non_last_screen_is_misplaced_even_when_last_completes() {
    let screens = vec![
        Screen::new("FIRST", vec![complete_footer()]),
        Screen::new("SECOND", vec![complete_footer()]),
        Screen::new("THIRD", vec![complete_footer()]),
    ];
    assert_eq!(
        diagnose(&screens),
        vec![
            ValidationError::MisplacedTerminalAction { screen_index: 0 },
            ValidationError::MisplacedTerminalAction { screen_index: 1 },
        ]
    );
    assert_eq!(
        validate(&screens),
        Err(ValidationError::MisplacedTerminalAction { screen_index: 0 })
    );
}

#[test]
fn test_single_screen_with_complete_footer_passes() {
    let screens = vec![Screen::new("ONLY", vec![text_input("email"), complete_footer()])];
    assert_eq!(validate(&screens), Ok(()));
    assert!(diagnose(&screens).is_empty());
}

#[test]
fn test_multi_screen_flow_completing_on_last_screen_passes() {
    assert_eq!(validate(&create_three_screen_flow()), Ok(()));
}

#[test]
fn test_complete_action_inside_container_is_found() {
    let form = Component::new(ComponentKind::from_tag("Form"))
        .with_id("form")
        .with_children(vec![text_input("email"), complete_footer()]);
    let screens = vec![Screen::new("ONLY", vec![form.into()])];
    assert_eq!(validate(&screens), Ok(()));
}

#[test]
fn test_validation_errors_display_one_based_positions() {
    let err = ValidationError::MisplacedTerminalAction { screen_index: 2 };
    assert!(err.to_string().contains("Screen 3"));
    assert_eq!(err.screen_number(), Some(3));
    assert_eq!(ValidationError::EmptyFlow.screen_number(), None);
}

#[test]
fn test_compiler_refuses_invalid_flow() {
    let screens = vec![
        Screen::new("FIRST", vec![complete_footer()]),
        Screen::new("SECOND", vec![heading("Nothing here")]),
    ];
    let result = Compiler::builder(screens).build().compile();
    match result {
        Err(CompileError::Validation(ValidationError::MisplacedTerminalAction { screen_index })) => {
            assert_eq!(screen_index, 0)
        }
        other => panic!("Expected MisplacedTerminalAction, got {:?}", other),
    }
}

#[test]
fn test_complete_action_is_found_when_sibling_attributes_are_malformed() {
    let raw = serde_json::json!([{
        "id": "ONLY",
        "layout": { "type": "SingleColumnLayout", "children": [
            { "type": "Footer", "name": 1, "id": ["x"], "on-click-action": { "name": "complete" } }
        ]}
    }]);
    let screens = raw.into_screens().expect("screens parse");
    assert_eq!(validate(&screens), Ok(()));
}
