use crate::types::alias::{alias, UNRESOLVED_DISPLAY_NAME};
use crate::types::descriptor::TypeDescriptor;

/// Render a compact signature for a declared type, e.g. `Box<Number>`.
///
/// Only the root, its first type argument and that argument's first type
/// argument are rendered; deeper nesting is never inspected. Nested names go
/// through the alias table (`i32` renders as `Int`, the root type as `Any?`,
/// unresolved arguments as `?`) while the root name is written verbatim.
pub fn resolve_type_name(descriptor: &TypeDescriptor) -> String {
    let root = descriptor.base_name().unwrap_or(UNRESOLVED_DISPLAY_NAME);
    let layer1 = descriptor.argument(0);
    let layer2 = layer1.and_then(|layer| layer.argument(0));

    let Some(layer1) = layer1 else {
        return root.to_string();
    };

    let mid = match layer2 {
        Some(layer2) => format!("{}<{}>", alias(layer1.base_name()), alias(layer2.base_name())),
        None => alias(layer1.base_name()).to_string(),
    };

    format!("{}<{}>", root, mid)
}
