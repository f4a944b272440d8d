use crate::boxes::{render, Readable, Writable};
use crate::types::descriptor::{DescribeType, TypeDescriptor};
use crate::types::names::BOX_TYPE_NAME;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Producer-consumer holder over an optional value.
///
/// `Box<T>` both reads and writes `T`, so `Box<i32>` and `Box<Number>` are
/// unrelated. The copy operations recover the safe half of each direction:
/// [`copy_from`](Box::copy_from) only reads its source and
/// [`copy_to`](Box::copy_to) only writes its destination.
///
/// ```
/// use covary_core::boxes::Box;
/// use covary_core::types::Number;
///
/// let int_box = Box::new(10_i32);
/// let mut number_box = Box::<Number>::empty();
/// number_box.copy_from(&int_box);
/// assert_eq!(number_box.value(), Some(&Number::Int(10)));
/// ```
///
/// Plain assignment between element types does not compile:
///
/// ```compile_fail
/// use covary_core::boxes::Box;
/// use covary_core::types::Number;
///
/// let int_box = Box::new(10_i32);
/// let _number_box: Box<Number> = int_box;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Box<T> {
    value: Option<T>,
    #[serde(skip)]
    pub(super) type_name: Option<String>,
}

impl<T> Box<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            type_name: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            value: None,
            type_name: None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<T>) {
        self.value = value;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Take the value of any producer whose element converts into `T`
    pub fn copy_from<S>(&mut self, source: &S)
    where
        S: Readable<Option<T>> + ?Sized,
    {
        self.value = source.read();
    }

    /// Push this value into any consumer whose element `T` converts into
    pub fn copy_to<D>(&self, dest: &mut D)
    where
        D: Writable<Option<T>> + ?Sized,
        T: Clone,
    {
        dest.write(self.value.clone());
    }
}

impl<T> Default for Box<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, U> Readable<Option<U>> for Box<T>
where
    T: Clone + Into<U>,
{
    fn read(&self) -> Option<U> {
        self.value.clone().map(Into::into)
    }
}

impl<T, S> Writable<Option<S>> for Box<T>
where
    S: Into<T>,
{
    fn write(&mut self, value: Option<S>) {
        self.value = value.map(Into::into);
    }
}

impl<T: fmt::Display> fmt::Display for Box<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.type_name.as_deref();
        match &self.value {
            Some(value) => render(f, "Box", label, value),
            None => render(f, "Box", label, &"null"),
        }
    }
}

impl<T: DescribeType> DescribeType for Box<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::generic(BOX_TYPE_NAME, vec![T::type_descriptor()])
    }
}
