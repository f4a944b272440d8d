use crate::boxes::{Box, InBox, OutBox};
use crate::container::{Container, ContainerBuilder};
use crate::errors::CoreError;
use crate::types::Number;

/// Add the nine demo beans, one per holder kind and element type
pub fn register_default_beans(builder: ContainerBuilder) -> Result<ContainerBuilder, CoreError> {
    builder
        .add_bean("intOutBox", OutBox::new(10_i32))?
        .add_bean("numberOutBox", OutBox::new(Number::Double(1.5)))?
        .add_bean("stringOutBox", OutBox::new("out".to_string()))?
        .add_bean("intInBox", InBox::new(20_i32))?
        .add_bean("numberInBox", InBox::new(Number::Double(2.5)))?
        .add_bean("stringInBox", InBox::new("in".to_string()))?
        .add_bean("intBox", Box::new(30_i32))?
        .add_bean("numberBox", Box::new(Number::Double(3.5)))?
        .add_bean("stringBox", Box::new("box".to_string()))
}

/// Container holding only the demo beans
pub fn default_container() -> Result<Container, CoreError> {
    register_default_beans(ContainerBuilder::new())?.build()
}
