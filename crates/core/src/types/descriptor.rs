use crate::errors::CoreError;
use crate::types::names::{
    ANY_TYPE_NAME, DOUBLE_TYPE_NAME, INT_TYPE_NAME, LIST_TYPE_NAME, LONG_TYPE_NAME, STRING_TYPE_NAME,
};
use crate::types::parser;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::str::FromStr;

/// Use-site projection of a type argument (`out T`, `in T`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// No projection; the declared variance of the parameter applies
    #[default]
    None,
    /// Read-only use of the argument
    Out,
    /// Write-only use of the argument
    In,
}

impl Projection {
    pub fn is_none(&self) -> bool {
        matches!(self, Projection::None)
    }

    /// Keyword written before the argument, if any
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Projection::None => None,
            Projection::Out => Some("out"),
            Projection::In => Some("in"),
        }
    }
}

/// Description of a declared type: its base name and ordered type arguments.
///
/// A descriptor without a base name is unresolved. That is how star
/// projections, wildcards and the bottom type are carried when they appear
/// as type arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    base_name: Option<String>,
    #[serde(default, skip_serializing_if = "Projection::is_none")]
    projection: Projection,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    type_arguments: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Descriptor of a non-generic type
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            base_name: Some(name.into()),
            projection: Projection::None,
            type_arguments: Vec::new(),
        }
    }

    /// Descriptor of a generic type applied to the given arguments
    pub fn generic(name: impl Into<String>, type_arguments: Vec<TypeDescriptor>) -> Self {
        Self {
            base_name: Some(name.into()),
            projection: Projection::None,
            type_arguments,
        }
    }

    /// Unresolved descriptor (star projection, wildcard or bottom type)
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// Descriptor of a Rust type that carries one
    pub fn of<T: DescribeType + ?Sized>() -> Self {
        T::type_descriptor()
    }

    /// Parse a textual signature such as `List<Box<out Int>>`
    pub fn parse(signature: &str) -> Result<Self, CoreError> {
        parser::parse_signature(signature)
    }

    /// Append a type argument
    pub fn with_argument(mut self, argument: TypeDescriptor) -> Self {
        self.type_arguments.push(argument);
        self
    }

    /// Apply a use-site projection
    pub fn projected(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Shorthand for `projected(Projection::Out)`
    pub fn out_projected(self) -> Self {
        self.projected(Projection::Out)
    }

    /// Shorthand for `projected(Projection::In)`
    pub fn in_projected(self) -> Self {
        self.projected(Projection::In)
    }

    pub fn base_name(&self) -> Option<&str> {
        self.base_name.as_deref()
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn type_arguments(&self) -> &[TypeDescriptor] {
        &self.type_arguments
    }

    /// Type argument at `index`
    pub fn argument(&self, index: usize) -> Option<&TypeDescriptor> {
        self.type_arguments.get(index)
    }

    pub fn is_unresolved(&self) -> bool {
        self.base_name.is_none()
    }

    pub fn is_generic(&self) -> bool {
        !self.type_arguments.is_empty()
    }

    /// Collect every base name mentioned by this descriptor, outermost first
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Some(name) = self.base_name() {
            names.push(name);
        }
        for argument in &self.type_arguments {
            argument.collect_names(names);
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Full signature with raw names, projections and every nesting level
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(keyword) = self.projection.keyword() {
            write!(f, "{} ", keyword)?;
        }

        match &self.base_name {
            Some(name) => write!(f, "{}", name)?,
            None => return write!(f, "*"),
        }

        if !self.type_arguments.is_empty() {
            write!(f, "<")?;
            for (index, argument) in self.type_arguments.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", argument)?;
            }
            write!(f, ">")?;
        }

        Ok(())
    }
}

/// Types that can describe themselves with a [`TypeDescriptor`].
///
/// Rust erases generic arguments at runtime, so declarations carry their
/// descriptor explicitly through this trait instead of relying on reflection.
pub trait DescribeType {
    fn type_descriptor() -> TypeDescriptor;
}

macro_rules! describe_named {
    ($($ty:ty => $name:expr),* $(,)?) => {
        $(
            impl DescribeType for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::named($name)
                }
            }
        )*
    };
}

describe_named! {
    i32 => INT_TYPE_NAME,
    i64 => LONG_TYPE_NAME,
    f64 => DOUBLE_TYPE_NAME,
    String => STRING_TYPE_NAME,
    dyn Any => ANY_TYPE_NAME,
}

impl<T: DescribeType> DescribeType for Vec<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::generic(LIST_TYPE_NAME, vec![T::type_descriptor()])
    }
}
