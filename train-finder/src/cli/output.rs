//! Result rendering for the terminal.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::TrainRecord;
use crate::store::TrainDto;

/// Render records as a JSON array indented by one space per level.
///
/// Field names and time format match the timetable input.
pub fn render_json(records: &[&TrainRecord]) -> serde_json::Result<String> {
    let dtos: Vec<TrainDto> = records.iter().map(|r| TrainDto::from(*r)).collect();

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    dtos.serialize(&mut ser)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the rendered records to `output` in green.
pub fn print_results<W: Write>(output: &mut W, records: &[&TrainRecord]) -> crate::Result<()> {
    let json = render_json(records)?;
    writeln!(output, "{}", json.green())?;
    Ok(())
}
