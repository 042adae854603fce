//! VoiceNotes CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voice_notes::cli::{run, Cli, EXIT_ERROR};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let code = runtime.block_on(run(cli));
    // A pending stdin read cannot be cancelled; don't wait for it
    runtime.shutdown_background();
    code
}
