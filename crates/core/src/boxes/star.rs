//! Star projections: holders viewed without knowing their element type.
//!
//! `OutBox<*>` still produces values, but only as the widest upper bound, so
//! reads come back as `&dyn Any`. `InBox<*>` accepts nothing, since no value
//! is known to fit. `Box<*>` combines both: reads as `&dyn Any`, no writes,
//! though clearing stays safe because it stores no element.
//!
//! ```compile_fail
//! use covary_core::boxes::{Box, StarBox};
//!
//! let mut boxed = Box::new("box".to_string());
//! let star: &mut dyn StarBox = &mut boxed;
//! star.set_value(Some("ok".to_string()));
//! ```

use crate::boxes::{Box, InBox, OutBox};
use std::any::Any;
use std::fmt;

/// `OutBox<*>`
pub trait StarOutBox: fmt::Display {
    fn read_any(&self) -> &dyn Any;
}

/// `InBox<*>`; exposes no operation on the element
pub trait StarInBox: fmt::Display {}

/// `Box<*>`
pub trait StarBox: fmt::Display {
    fn read_any(&self) -> Option<&dyn Any>;

    fn is_empty(&self) -> bool;

    fn clear(&mut self);
}

impl<T: Any + fmt::Display> StarOutBox for OutBox<T> {
    fn read_any(&self) -> &dyn Any {
        self.value()
    }
}

impl<T: fmt::Display> StarInBox for InBox<T> {}

impl<T: Any + fmt::Display> StarBox for Box<T> {
    fn read_any(&self) -> Option<&dyn Any> {
        self.value().map(|value| value as &dyn Any)
    }

    fn is_empty(&self) -> bool {
        Box::is_empty(self)
    }

    fn clear(&mut self) {
        Box::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Number;

    #[test]
    fn test_star_out_box_reads_upper_bound() {
        let star: &dyn StarOutBox = &OutBox::new("out".to_string());

        assert_eq!(star.read_any().downcast_ref::<String>().map(String::as_str), Some("out"));
        assert!(star.read_any().downcast_ref::<i32>().is_none());
        assert_eq!(star.to_string(), "OutBox[out]");
    }

    #[test]
    fn test_star_in_box_only_renders() {
        let star: &dyn StarInBox = &InBox::new("in".to_string());
        assert_eq!(star.to_string(), "InBox[in]");
    }

    #[test]
    fn test_star_box_reads_and_clears() {
        let mut boxed = Box::new("box".to_string());
        let star: &mut dyn StarBox = &mut boxed;

        assert_eq!(star.read_any().and_then(|v| v.downcast_ref::<String>()).map(String::as_str), Some("box"));
        assert!(!star.is_empty());

        star.clear();
        assert!(star.is_empty());
        assert!(star.read_any().is_none());
    }

    #[test]
    fn test_heterogeneous_star_collection() {
        let boxes: Vec<std::boxed::Box<dyn StarOutBox>> = vec![
            std::boxed::Box::new(OutBox::new(10_i32)),
            std::boxed::Box::new(OutBox::new(Number::Double(1.5))),
            std::boxed::Box::new(OutBox::new("out".to_string())),
        ];

        let rendered: Vec<String> = boxes.iter().map(|b| b.to_string()).collect();
        assert_eq!(rendered, vec!["OutBox[10]", "OutBox[1.5]", "OutBox[out]"]);
    }
}
