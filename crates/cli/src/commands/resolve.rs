use covary_core::types::{resolve_type_name, TypeDescriptor};
use covary_core::CoreError;

pub fn run(signatures: &[String]) -> Result<(), CoreError> {
    for line in render(signatures)? {
        println!("{}", line);
    }
    Ok(())
}

/// `signature => name` for each signature; the first parse error aborts
pub fn render(signatures: &[String]) -> Result<Vec<String>, CoreError> {
    signatures
        .iter()
        .map(|signature| {
            let descriptor = TypeDescriptor::parse(signature)?;
            Ok(format!("{} => {}", signature, resolve_type_name(&descriptor)))
        })
        .collect()
}
