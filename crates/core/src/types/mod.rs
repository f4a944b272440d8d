//! Generic type descriptors and the signature resolver
//!
//! A [`TypeDescriptor`] is the side-channel description of a declared type: a
//! base name plus ordered type arguments, each of which may carry a use-site
//! projection or be unresolved (star, wildcard or bottom). Descriptors are
//! built from Rust types through [`DescribeType`] or from text through
//! [`TypeDescriptor::parse`].

pub mod alias;
pub mod descriptor;
pub mod hierarchy;
pub mod names;
pub mod parser;
pub mod resolver;
pub mod values;

pub use alias::{alias, canonical_name};
pub use descriptor::{DescribeType, Projection, TypeDescriptor};
pub use hierarchy::{TypeHierarchy, TypeInfo, Variance};
pub use resolver::resolve_type_name;
pub use values::{CharSequence, Nothing, Number};
