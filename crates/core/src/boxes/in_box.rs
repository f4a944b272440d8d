use crate::boxes::{render, Writable};
use crate::types::descriptor::{DescribeType, TypeDescriptor};
use crate::types::names::IN_BOX_TYPE_NAME;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Consumer-only holder.
///
/// The value can be replaced but never read back, so an
/// `InBox<CharSequence>` is [`Writable`] from a `String` as well.
///
/// ```compile_fail
/// use covary_core::boxes::InBox;
///
/// let inbox = InBox::new(1);
/// let _value = inbox.value();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InBox<T> {
    value: T,
    #[serde(skip)]
    pub(super) type_name: Option<String>,
}

impl<T> InBox<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            type_name: None,
        }
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }
}

impl<T, S> Writable<S> for InBox<T>
where
    S: Into<T>,
{
    fn write(&mut self, value: S) {
        self.value = value.into();
    }
}

impl<T: fmt::Display> fmt::Display for InBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, "InBox", self.type_name.as_deref(), &self.value)
    }
}

impl<T: DescribeType> DescribeType for InBox<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::generic(IN_BOX_TYPE_NAME, vec![T::type_descriptor()])
    }
}
