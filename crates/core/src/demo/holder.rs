use crate::container::{Bean, Container, InjectionPoint};
use crate::demo::report::{WiringEntry, WiringReport};
use crate::errors::CoreError;
use std::sync::Arc;

macro_rules! box_beans_holder {
    ($($field:ident => $name:literal : $signature:literal),* $(,)?) => {
        /// Collection fields wired by generic type.
        ///
        /// Each field receives every registered bean whose declared type is
        /// assignable to the field's element type.
        #[derive(Debug, Clone, Default)]
        pub struct BoxBeansHolder {
            $(pub $field: Vec<Arc<dyn Bean>>,)*
        }

        impl BoxBeansHolder {
            /// Field names and declared signatures, in declaration order
            pub const FIELDS: &'static [(&'static str, &'static str)] = &[$(($name, $signature)),*];

            /// Fill every field from the container
            pub fn wire(container: &Container) -> Result<Self, CoreError> {
                Ok(Self {
                    $($field: container.inject_collection(&InjectionPoint::parse($name, $signature)?)?,)*
                })
            }

            /// Beans wired into a field, looked up by its declared name
            pub fn field(&self, name: &str) -> Option<&[Arc<dyn Bean>]> {
                match name {
                    $($name => Some(self.$field.as_slice()),)*
                    _ => None,
                }
            }

            pub fn report(&self) -> Result<WiringReport, CoreError> {
                let entries = vec![
                    $(WiringEntry::new(
                        $name,
                        InjectionPoint::parse($name, $signature)?.target_name(),
                        &self.$field,
                    ),)*
                ];
                Ok(WiringReport::new(entries))
            }
        }
    };
}

box_beans_holder! {
    star_out_box_list => "starOutBoxList": "List<OutBox<*>>",
    star_in_box_list => "starInBoxList": "List<InBox<*>>",
    star_box_list => "starBoxList": "List<Box<*>>",

    any_out_box_list => "anyOutBoxList": "List<OutBox<Any?>>",
    any_in_box_list => "anyInBoxList": "List<InBox<Any?>>",
    any_box_list => "anyBoxList": "List<Box<Any?>>",

    nothing_out_box_list => "nothingOutBoxList": "List<OutBox<Nothing>>",
    nothing_in_box_list => "nothingInBoxList": "List<InBox<Nothing>>",
    nothing_box_list => "nothingBoxList": "List<Box<Nothing>>",

    number_out_box_list => "numberOutBoxList": "List<OutBox<Number>>",
    number_in_box_list => "numberInBoxList": "List<InBox<Number>>",
    number_box_list => "numberBoxList": "List<Box<Number>>",

    int_out_box_list => "intOutBoxList": "List<OutBox<Int>>",
    int_in_box_list => "intInBoxList": "List<InBox<Int>>",
    int_box_list => "intBoxList": "List<Box<Int>>",

    int_box_out_projection_list => "intBoxOutProjectionList": "List<Box<out Int>>",
    number_box_out_projection_list => "numberBoxOutProjectionList": "List<Box<out Number>>",
    int_box_in_projection_list => "intBoxInProjectionList": "List<Box<in Int>>",
    number_box_in_projection_list => "numberBoxInProjectionList": "List<Box<in Number>>",
}

impl BoxBeansHolder {
    /// Injection points for every field
    pub fn injection_points() -> Result<Vec<InjectionPoint>, CoreError> {
        Self::FIELDS
            .iter()
            .map(|(name, signature)| InjectionPoint::parse(*name, signature))
            .collect()
    }
}
