use std::{fmt, str::FromStr};

use strum::EnumString;

/// Block of a Solomon instance, named by its header line.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
pub enum Section {
    #[strum(serialize = "VEHICLE")]
    Vehicle,
    #[strum(serialize = "CUSTOMER")]
    Customer,
    // Instance names ("C102") and anything else in capitals land here
    #[strum(default)]
    Other(String),
}

impl Section {
    pub fn from_header(name: &str) -> Self {
        Self::from_str(name).unwrap_or_else(|_| Self::Other(name.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Vehicle => f.write_str("VEHICLE"),
            Section::Customer => f.write_str("CUSTOMER"),
            Section::Other(name) => f.write_str(name),
        }
    }
}

/// A header seen during conversion, with the column names of the label line
/// that followed it. Neither ends up in the CSV output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub section: Section,
    pub labels: Vec<String>,
}

impl fmt::Display for SectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.section, self.labels.join(" "))
    }
}
