use crate::error::ValidationError;
use crate::flow::Screen;

/// Checks that the flow ends with exactly one correctly placed `complete` action.
///
/// Returns the first problem found. Nothing is rewritten here.
pub fn validate(screens: &[Screen]) -> Result<(), ValidationError> {
    match diagnose(screens).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Like [`validate`], but reports every structural problem in screen order.
///
/// Each non-last screen carrying a `complete` action yields its own
/// `MisplacedTerminalAction`, whether or not the last screen also has one.
pub fn diagnose(screens: &[Screen]) -> Vec<ValidationError> {
    if screens.is_empty() {
        return vec![ValidationError::EmptyFlow];
    }

    let terminal: Vec<bool> = screens.iter().map(Screen::has_complete_action).collect();
    if !terminal.contains(&true) {
        return vec![ValidationError::MissingTerminalAction];
    }

    let last = screens.len() - 1;
    terminal
        .iter()
        .enumerate()
        .filter(|&(index, &has_complete)| has_complete && index != last)
        .map(|(screen_index, _)| ValidationError::MisplacedTerminalAction { screen_index })
        .collect()
}
