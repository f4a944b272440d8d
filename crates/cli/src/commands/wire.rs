use super::load_container;
use covary_core::config::AppConfig;
use covary_core::demo::{BoxBeansHolder, WiringReport};
use covary_core::CoreError;

pub fn run(config: &AppConfig, json: bool) -> Result<(), CoreError> {
    let container = load_container(config)?;
    let report = BoxBeansHolder::wire(&container)?.report()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", summarize(&report));
    }
    Ok(())
}

/// Report text followed by the size of every field
pub fn summarize(report: &WiringReport) -> String {
    let mut text = report.to_string();
    text.push('\n');
    for entry in &report.entries {
        text.push_str(&format!("{}: {}\n", entry.field, entry.size()));
    }
    text
}
