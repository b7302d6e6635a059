//! stl2h - ASCII STL to fixed-point C header converter.

use std::process::ExitCode;

use clap::Parser;
use stl2h::{run, Args, TerminalPrompt};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {}", err);
    }

    let command_line = std::env::args().collect::<Vec<_>>().join(" ");
    let mut prompt = TerminalPrompt::stdio();

    match run(&args, command_line, &mut prompt) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
