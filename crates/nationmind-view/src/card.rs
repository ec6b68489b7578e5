use std::fmt;

use serde::Deserialize;

/// Display data for one nation.
///
/// Rendering is pure: the same triple always produces the same text, and
/// numbers are printed with their plain `Display` form (no rounding, grouping
/// or localization). Negative and non-finite values are shown as they are.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NationCard {
    pub name: String,
    pub resources: f64,
    pub power: f64,
}

impl NationCard {
    pub fn new(name: impl Into<String>, resources: f64, power: f64) -> Self {
        Self {
            name: name.into(),
            resources,
            power,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NationCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.chars().count()))?;
        writeln!(f, "Recursos: {}", self.resources)?;
        write!(f, "Poder: {}", self.power)
    }
}
