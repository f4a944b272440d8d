use crate::types::names::{ANY_TYPE_NAME, INT_TYPE_NAME};

/// Display name of an absent (unresolved) type
pub const UNRESOLVED_DISPLAY_NAME: &str = "?";

/// Fixed raw-name to display-name table used when rendering nested type arguments
const ALIASES: &[(&str, &str)] = &[(ANY_TYPE_NAME, "Any?"), (INT_TYPE_NAME, "Int")];

/// Extra display spellings accepted when reading signatures back
const CANONICAL_SPELLINGS: &[(&str, &str)] = &[("Any", ANY_TYPE_NAME)];

/// Map a raw type name to its display name.
///
/// An absent name renders as `?`, the root type as `Any?` and `i32` as `Int`.
/// Every other name passes through unchanged.
pub fn alias(name: Option<&str>) -> &str {
    let Some(name) = name else {
        return UNRESOLVED_DISPLAY_NAME;
    };

    for (raw, display) in ALIASES {
        if *raw == name {
            return display;
        }
    }
    name
}

/// Map a display name back to the raw name it aliases, if any
pub fn canonical_name(display: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .map(|(raw, display)| (*display, *raw))
        .chain(CANONICAL_SPELLINGS.iter().copied())
        .find(|(spelling, _)| *spelling == display)
        .map(|(_, raw)| raw)
}
