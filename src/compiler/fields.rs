use super::sanitize::sanitize_identifier;
use crate::flow::Screen;
use itertools::Itertools;

/// Sanitized form-field names declared on one screen, in encounter order.
///
/// Duplicates are kept; callers that need set semantics collapse them.
pub fn collect_fields(screen: &Screen) -> Vec<String> {
    let mut fields = Vec::new();
    screen.for_each_component(&mut |component| {
        if let Some(name) = component.field_name() {
            fields.push(sanitize_identifier(name).into_owned());
        }
    });
    fields
}

/// Every field declared anywhere in the flow, deduplicated by first occurrence.
pub fn flow_fields(screens: &[Screen]) -> Vec<String> {
    screens.iter().flat_map(collect_fields).unique().collect()
}

/// Pairs of raw field names that collide once sanitized.
///
/// Returns `(screen_index, first_raw, second_raw, sanitized)` for each raw
/// name whose sanitized form was already claimed by a different raw name.
pub(crate) fn find_collisions(screens: &[Screen]) -> Vec<(usize, String, String, String)> {
    let mut claimed: ahash::AHashMap<String, String> = ahash::AHashMap::new();
    let mut collisions = Vec::new();

    for (screen_index, screen) in screens.iter().enumerate() {
        screen.for_each_component(&mut |component| {
            let Some(raw) = component.field_name() else {
                return;
            };
            let sanitized = sanitize_identifier(raw).into_owned();
            match claimed.get(&sanitized) {
                Some(first) if first != raw => collisions.push((
                    screen_index,
                    first.clone(),
                    raw.to_string(),
                    sanitized,
                )),
                Some(_) => {}
                None => {
                    claimed.insert(sanitized, raw.to_string());
                }
            }
        });
    }
    collisions
}
