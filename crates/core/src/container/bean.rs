use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Instance that can be registered in the container.
///
/// Beans render themselves for logging and expose `Any` so typed lookups can
/// downcast them back to their concrete holder type.
pub trait Bean: fmt::Display + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl fmt::Debug for dyn Bean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bean").field(&self.to_string()).finish()
    }
}
