use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::{debug, info, warn};

use super::{
    error::ConvertError,
    line::{split_fields, Line},
    section::{Section, SectionHeader},
};

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub label: String,
    pub data_rows: usize,
    pub sections: Vec<SectionHeader>,
}

impl ConversionSummary {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            data_rows: 0,
            sections: Vec::new(),
        }
    }

    /// Records in the output, the leading label row included.
    pub fn rows_written(&self) -> usize {
        1 + self.data_rows
    }
}

/// Converts the Solomon instance at `input` into a CSV file at `output`,
/// creating or truncating it. The first record is `label` on its own.
///
/// If a section header turns out to be the last line, the rows converted so
/// far are left in `output` and [`ConvertError::MissingLabelLine`] is returned.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    label: &str,
) -> Result<ConversionSummary, ConvertError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let infile = File::open(input).map_err(|source| ConvertError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let outfile = File::create(output).map_err(|source| ConvertError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = BufReader::new(infile)
        .lines()
        .collect::<io::Result<_>>()?;

    let summary = convert_lines(&lines, outfile, label)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows = summary.rows_written(),
        "converted {}",
        label,
    );

    Ok(summary)
}

/// Runs the conversion over lines already in memory, writing CSV to `writer`.
pub fn convert_lines<S, W>(
    lines: &[S],
    writer: W,
    label: &str,
) -> Result<ConversionSummary, ConvertError>
where
    S: AsRef<str>,
    W: io::Write,
{
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    writer.write_record([label])?;

    let mut summary = ConversionSummary::new(label);
    let outcome = write_rows(lines, &mut writer, &mut summary);

    // Whatever made it out before a failure stays in the output
    writer.flush()?;
    outcome?;

    Ok(summary)
}

fn write_rows<S, W>(
    lines: &[S],
    writer: &mut csv::Writer<W>,
    summary: &mut ConversionSummary,
) -> Result<(), ConvertError>
where
    S: AsRef<str>,
    W: io::Write,
{
    let mut index = 0;

    while index < lines.len() {
        match Line::classify(lines[index].as_ref()) {
            Line::Blank => index += 1,

            // The line right after a header holds column names, skip both
            Line::Header(name) => {
                let label_line = match lines.get(index + 1) {
                    Some(next) => next.as_ref(),
                    None => {
                        warn!(line = index + 1, section = name, "header without label line");
                        return Err(ConvertError::MissingLabelLine {
                            line: index + 1,
                            section: name.to_string(),
                        });
                    }
                };

                let section = Section::from_header(name);
                let labels: Vec<String> = split_fields(label_line)
                    .into_iter()
                    .map(str::to_string)
                    .collect();

                debug!(line = index + 1, %section, ?labels, "entering section");

                summary.sections.push(SectionHeader { section, labels });
                index += 2;
            }

            Line::Data(fields) => {
                writer.write_record(&fields)?;
                summary.data_rows += 1;
                index += 1;
            }
        }
    }

    Ok(())
}
