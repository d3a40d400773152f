use std::{io, path::PathBuf};

/// Everything that can abort a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot open input {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create output {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A section header was the last line, so there is no label line to skip
    #[error("section header {section:?} on line {line} is not followed by a label line")]
    MissingLabelLine { line: usize, section: String },
}
