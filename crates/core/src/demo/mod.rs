//! The demo bean set and the holder whose collection fields are wired from it.
//!
//! Nine beans cover every holder kind over `i32`, `Number` and `String`.
//! [`BoxBeansHolder`] declares one collection field per interesting element
//! type, so wiring it shows which beans each variance rule admits.

pub mod beans;
pub mod holder;
pub mod report;

pub use beans::{default_container, register_default_beans};
pub use holder::BoxBeansHolder;
pub use report::{WiringEntry, WiringReport};
