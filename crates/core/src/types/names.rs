//! Raw type names carried by descriptors.

/// Root of the type lattice; every type is assignable to it
pub const ANY_TYPE_NAME: &str = "dyn Any";

/// 32-bit signed integer
pub const INT_TYPE_NAME: &str = "i32";

/// 64-bit signed integer
pub const LONG_TYPE_NAME: &str = "i64";

/// 64-bit float
pub const DOUBLE_TYPE_NAME: &str = "f64";

pub const NUMBER_TYPE_NAME: &str = "Number";
pub const CHAR_SEQUENCE_TYPE_NAME: &str = "CharSequence";
pub const STRING_TYPE_NAME: &str = "String";

/// Bottom type; only ever appears in signatures, descriptors carry it as unresolved
pub const NOTHING_TYPE_NAME: &str = "Nothing";

pub const OUT_BOX_TYPE_NAME: &str = "OutBox";
pub const IN_BOX_TYPE_NAME: &str = "InBox";
pub const BOX_TYPE_NAME: &str = "Box";

/// Collection type used by injection points
pub const LIST_TYPE_NAME: &str = "List";
