use super::load_container;
use covary_core::config::AppConfig;
use covary_core::container::Container;
use covary_core::CoreError;

pub fn run(config: &AppConfig) -> Result<(), CoreError> {
    let container = load_container(config)?;

    println!("Beans: {}", container.bean_count());
    for line in render(&container) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per bean: name, declared type and rendered instance
pub fn render(container: &Container) -> Vec<String> {
    container
        .registry()
        .definitions()
        .iter()
        .map(|definition| format!("{:<14} {:<20} {}", definition.name, definition.descriptor.to_string(), definition.instance))
        .collect()
}
