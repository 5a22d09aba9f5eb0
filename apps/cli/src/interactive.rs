//! Line-oriented lookup session.
//!
//! Each input line is one UI event. Lines starting with `:` are commands;
//! anything else replaces the search text. A leading `::` stands for a
//! literal `:` in the search text. The page is re-rendered after
//! every event.

use std::io::{BufRead, Write};

use tradefee_core::{FeeLookupService, LookupSession};

use crate::render::write_page;

const HELP: &str = "\
Commands:
  :open        open the search box
  :select N    choose match number N
  :close       close the search box and clear the selection
  :help        show this help
  :quit        leave
Any other line replaces the search text. Start it with :: to search for a leading colon.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Open,
    Close,
    Select(usize),
    Help,
    Quit,
    Query(String),
    Invalid(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(rest) = line.trim_start().strip_prefix("::") {
            return Input::Query(format!(":{rest}"));
        }
        let Some(command) = line.trim().strip_prefix(':') else {
            return Input::Query(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("open"), None) => Input::Open,
            (Some("close"), None) => Input::Close,
            (Some("help"), None) => Input::Help,
            (Some("quit" | "q" | "exit"), None) => Input::Quit,
            (Some("select"), Some(n)) => match n.parse::<usize>() {
                Ok(n) if n >= 1 => Input::Select(n),
                _ => Input::Invalid(format!("not a match number: {n}")),
            },
            _ => Input::Invalid(format!("unknown command: {line}")),
        }
    }
}

pub fn run_interactive<R: BufRead, W: Write>(
    lookup: &FeeLookupService,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut session = LookupSession::new();
    render(lookup, &session, out)?;

    for line in input.lines() {
        let event = Input::parse(&line?);
        tracing::debug!(?event, "input");

        match event {
            Input::Quit => break,
            Input::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Input::Invalid(message) => {
                writeln!(out, "{message} (type :help)")?;
                continue;
            }
            Input::Open => {
                session.open();
            }
            Input::Close => {
                session.close();
            }
            Input::Select(n) => {
                if !lookup.select_match(&mut session, n - 1)? {
                    writeln!(out, "No match number {n} to select.")?;
                    continue;
                }
            }
            Input::Query(text) => {
                if !session.set_query(text) {
                    writeln!(out, "Type :open to start searching.")?;
                    continue;
                }
            }
        }

        render(lookup, &session, out)?;
    }

    Ok(())
}

fn render<W: Write>(
    lookup: &FeeLookupService,
    session: &LookupSession,
    out: &mut W,
) -> anyhow::Result<()> {
    let matches = lookup.matches(session)?;
    writeln!(out)?;
    write_page(out, session, &matches)?;
    out.flush()?;
    Ok(())
}
