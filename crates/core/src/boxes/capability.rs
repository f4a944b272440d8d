/// Read capability: a producer of `T`.
///
/// A holder that only produces values may implement `Readable<U>` for every
/// `U` its element converts into, which is how covariance is expressed.
///
/// ```compile_fail
/// use covary_core::boxes::{InBox, Readable};
///
/// let inbox = InBox::new(1);
/// // an InBox never hands its value back out
/// let _value: i32 = inbox.read();
/// ```
pub trait Readable<T> {
    fn read(&self) -> T;
}

/// Write capability: a consumer of `T`.
///
/// ```compile_fail
/// use covary_core::boxes::{OutBox, Writable};
///
/// let mut outbox = OutBox::new(1);
/// // an OutBox never accepts a value after construction
/// outbox.write(2);
/// ```
pub trait Writable<T> {
    fn write(&mut self, value: T);
}

/// Display label attached to a holder by the container
pub trait TypeLabel {
    fn type_name(&self) -> Option<&str>;

    fn set_type_name(&mut self, type_name: String);
}
