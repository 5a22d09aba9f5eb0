use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tradefee_cli::config::Config;
use tradefee_cli::interactive::run_interactive;
use tradefee_cli::render::{write_details, write_fee_table, write_matches};
use tradefee_cli::{build_state, init_tracing, AppState};
use tradefee_core::LookupSession;

/// Look up Finance Act fees for a business activity.
#[derive(Parser, Debug)]
#[command(name = "tradefee", version, about)]
struct Cli {
    /// Directory with taxonomy.json / finance_act.json overriding the bundled data
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List activities whose name contains QUERY (all activities when omitted).
    Search {
        query: Option<String>,
        /// Print JSON instead of a numbered list
        #[arg(long)]
        json: bool,
    },
    /// Show the taxonomy details and fee rows of one activity.
    Show {
        activity_code: String,
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Search and select interactively (default).
    Interactive,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_data_dir(cli.data_dir);
    init_tracing(config.log_format);

    let state = build_state(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Search { query, json } => search(&state, query, json, &mut out),
        Commands::Show {
            activity_code,
            json,
        } => show(&state, &activity_code, json, &mut out),
        Commands::Interactive => run_interactive(&state.lookup, io::stdin().lock(), &mut out),
    }
}

fn search<W: Write>(
    state: &AppState,
    query: Option<String>,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut session = LookupSession::new();
    session.open();
    session.set_query(query.unwrap_or_default());
    let matches = state.lookup.matches(&session)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &matches)?;
        writeln!(out)?;
    } else {
        write_matches(out, &matches)?;
    }
    Ok(())
}

fn show<W: Write>(
    state: &AppState,
    activity_code: &str,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let session = state.lookup.lookup_activity(activity_code)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &session.as_ref().map(|s| s.state()))?;
        writeln!(out)?;
        return Ok(());
    }

    let Some(session) = session else {
        writeln!(out, "No activity with code {activity_code}.")?;
        return Ok(());
    };
    write_details(out, &session.details())?;
    writeln!(out)?;
    write_fee_table(out, session.fees())?;
    Ok(())
}
