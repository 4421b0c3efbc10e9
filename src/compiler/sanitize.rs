use std::borrow::Cow;

/// Whether `id` already fits the platform identifier charset (`[A-Za-z_]*`).
pub fn is_valid_identifier(id: &str) -> bool {
    id.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
}

/// Normalizes an identifier to the platform charset.
///
/// Digits map to letters (`0` -> `A` ... `9` -> `J`), ASCII letters and `_` are
/// kept, everything else is dropped. Identifiers that are already valid are
/// returned borrowed and unchanged.
pub fn sanitize_identifier(id: &str) -> Cow<'_, str> {
    if is_valid_identifier(id) {
        return Cow::Borrowed(id);
    }

    let sanitized: String = id
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some((b'A' + (c as u8 - b'0')) as char),
            c if c.is_ascii_alphabetic() || c == '_' => Some(c),
            _ => None,
        })
        .collect();

    tracing::trace!(original = id, sanitized = %sanitized, "sanitized identifier");
    Cow::Owned(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_identifiers_are_borrowed() {
        assert!(matches!(
            sanitize_identifier("full_name"),
            Cow::Borrowed("full_name")
        ));
        assert!(matches!(sanitize_identifier(""), Cow::Borrowed("")));
    }

    #[test]
    fn digits_map_to_letters() {
        assert_eq!(sanitize_identifier("SCREEN_1"), "SCREEN_A");
        assert_eq!(sanitize_identifier("id_1234_abc"), "id_ABCD_abc");
        assert_eq!(sanitize_identifier("0123456789"), "ABCDEFGHIJ");
    }

    #[test]
    fn other_characters_are_dropped() {
        assert_eq!(sanitize_identifier("first-name"), "firstname");
        assert_eq!(sanitize_identifier("order #1"), "orderB");
        assert_eq!(sanitize_identifier("café_ß"), "caf_");
        assert_eq!(sanitize_identifier("!@# $%"), "");
    }

    #[test]
    fn sanitizing_is_idempotent_and_stays_in_charset() {
        let inputs = [
            "SCREEN_1",
            "Hello, World 42!",
            "ünïcödé-9",
            "__a__",
            "\t\n",
            "x9y8z7",
        ];
        for input in inputs {
            let once = sanitize_identifier(input).into_owned();
            assert!(is_valid_identifier(&once), "{input:?} -> {once:?}");
            assert_eq!(sanitize_identifier(&once), once);
        }
    }
}
