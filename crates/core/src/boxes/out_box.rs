use crate::boxes::{render, Readable};
use crate::types::descriptor::{DescribeType, TypeDescriptor};
use crate::types::names::OUT_BOX_TYPE_NAME;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Producer-only holder.
///
/// The value is fixed at construction and can only be read, so an
/// `OutBox<i32>` is [`Readable`] as a `Number` as well as an `i32`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutBox<T> {
    value: T,
    #[serde(skip)]
    pub(super) type_name: Option<String>,
}

impl<T> OutBox<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            type_name: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Convert into a producer of a supertype, keeping value and label
    pub fn upcast<U>(self) -> OutBox<U>
    where
        T: Into<U>,
    {
        OutBox {
            value: self.value.into(),
            type_name: self.type_name,
        }
    }
}

impl<T, U> Readable<U> for OutBox<T>
where
    T: Clone + Into<U>,
{
    fn read(&self) -> U {
        self.value.clone().into()
    }
}

impl<T: fmt::Display> fmt::Display for OutBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, "OutBox", self.type_name.as_deref(), &self.value)
    }
}

impl<T: DescribeType> DescribeType for OutBox<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::generic(OUT_BOX_TYPE_NAME, vec![T::type_descriptor()])
    }
}
