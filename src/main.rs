mod args;
mod batch;

use std::process::ExitCode;

use clap::Parser;

use self::args::{Args, Command};

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Command::Check { path, log } => {
            if let Some(log) = log {
                if let Some(level) = log.to_level_filter().to_level() {
                    simple_logger::init_with_level(level).expect("this is the only logger");
                }
            } else if std::env::var("RUST_LOG").is_ok() {
                simple_logger::init_with_env().expect("this is the only logger");
            }

            batch_error(batch::run(&path))
        }
    }
}

fn batch_error(result: anyhow::Result<batch::Summary>) -> ExitCode {
    match result {
        Ok(summary) => {
            if summary.num_warnings == 0 {
                return ExitCode::SUCCESS;
            }

            let ws = if summary.num_warnings != 1 { "s" } else { "" };
            eprintln!("finished with {} warning{ws}", summary.num_warnings);
            ExitCode::FAILURE
        }

        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
