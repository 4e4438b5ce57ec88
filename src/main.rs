use std::process::ExitCode;

use clap::Parser;
use log::error;

use bmfont_binary::{convert, Args};

fn main() -> ExitCode {
    // Use "info" logging level by default.
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();

    match convert(&args) {
        Ok(_) => {
            println!("Ok.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed to convert {}: {err}", args.input.display());
            ExitCode::FAILURE
        }
    }
}
