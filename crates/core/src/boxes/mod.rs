//! Value holders demonstrating variance.
//!
//! * [`OutBox`] only produces its value and is covariant: it is [`Readable`]
//!   as any type its value converts into.
//! * [`InBox`] only consumes values and is contravariant: it is [`Writable`]
//!   from any type that converts into its value type.
//! * [`Box`] both produces and consumes, so it is invariant; its
//!   [`copy_from`](Box::copy_from) and [`copy_to`](Box::copy_to) operations
//!   take projected views instead.
//!
//! The star views in [`star`] expose the subset of operations that stays safe
//! when the element type is unknown.

pub mod capability;
pub mod in_box;
pub mod invariant;
pub mod out_box;
pub mod star;

pub use capability::{Readable, TypeLabel, Writable};
pub use in_box::InBox;
pub use invariant::Box;
pub use out_box::OutBox;
pub use star::{StarBox, StarInBox, StarOutBox};

use std::fmt;

/// `{label}[{value}]` when labelled, `{kind}[{value}]` otherwise
pub(crate) fn render(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    label: Option<&str>,
    value: &dyn fmt::Display,
) -> fmt::Result {
    write!(f, "{}[{}]", label.unwrap_or(kind), value)
}

macro_rules! holder_bean {
    ($($holder:ident),* $(,)?) => {
        $(
            impl<T> crate::container::Bean for $holder<T>
            where
                T: fmt::Display + Send + Sync + 'static,
            {
                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }

                fn into_any(
                    self: std::sync::Arc<Self>,
                ) -> std::sync::Arc<dyn std::any::Any + Send + Sync> {
                    self
                }
            }

            impl<T> TypeLabel for $holder<T> {
                fn type_name(&self) -> Option<&str> {
                    self.type_name.as_deref()
                }

                fn set_type_name(&mut self, type_name: String) {
                    self.type_name = Some(type_name);
                }
            }
        )*
    };
}

holder_bean!(OutBox, InBox, Box);
