use crate::container::Bean;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Outcome of wiring one collection field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WiringEntry {
    pub field: String,
    pub target: String,
    pub candidates: Vec<String>,
}

impl WiringEntry {
    pub fn new(field: impl Into<String>, target: impl Into<String>, beans: &[Arc<dyn Bean>]) -> Self {
        Self {
            field: field.into(),
            target: target.into(),
            candidates: beans.iter().map(|bean| bean.to_string()).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.candidates.len()
    }
}

/// Wiring outcome for every field of a holder, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WiringReport {
    pub entries: Vec<WiringEntry>,
}

impl WiringReport {
    pub fn new(entries: Vec<WiringEntry>) -> Self {
        Self { entries }
    }

    pub fn entry(&self, field: &str) -> Option<&WiringEntry> {
        self.entries.iter().find(|entry| entry.field == field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for WiringEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} target: {}", self.field, self.target)?;
        write!(f, "{} candidates: {}", self.field, self.candidates.join(", "))
    }
}

impl fmt::Display for WiringReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
