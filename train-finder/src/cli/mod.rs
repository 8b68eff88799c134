//! Terminal front end.
//!
//! Asks for whatever the command line did not supply, validates it, runs the
//! query against the timetable file and prints the best few trains.

mod output;
mod prompt;

pub use output::{print_results, render_json};
pub use prompt::{InputError, Prompter};

use std::io::{BufRead, Write};

use colored::Color;

use crate::config::FinderConfig;
use crate::query::{QueryRequest, query, top_n};
use crate::store::RecordStore;

/// Answers supplied up front, e.g. as command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryAnswers {
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub criteria: Option<String>,
    pub limit: Option<usize>,
}

/// Run one query end to end.
///
/// Missing answers are prompted for on `output` and read from `input`.
/// Parameters are validated before the timetable is loaded.
pub fn run_query<R: BufRead, W: Write>(
    input: R,
    output: W,
    answers: QueryAnswers,
    config: &FinderConfig,
) -> crate::Result<()> {
    let mut prompter = Prompter::new(input, output);

    let departure = match answers.departure {
        Some(value) => value,
        None => prompter.ask(
            "Please enter the departure station.",
            Color::Green,
            "departure station",
        )?,
    };
    let arrival = match answers.arrival {
        Some(value) => value,
        None => prompter.ask(
            "Please enter the station of arrival.",
            Color::Blue,
            "arrival station",
        )?,
    };
    let criteria = match answers.criteria {
        Some(value) => value,
        None => prompter.ask(
            "Please enter the criteria to sort search result.",
            Color::Green,
            "criteria",
        )?,
    };

    let request = QueryRequest::parse(&departure, &arrival, &criteria)?;

    let store = RecordStore::load_file(&config.data_path)?;
    let results = query(&store, &request);
    let limit = config.query.limit(answers.limit);

    let mut output = prompter.into_output();
    print_results(&mut output, top_n(&results, limit))
}
