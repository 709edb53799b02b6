use anyhow::Result;
use clap::Parser;
use log::info;
use std::process::ExitCode;
use vercel_env::cli::{Cli, commands::set_command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Initialize logger to file (truncate on each run), stderr if unwritable
    let mut logger = env_logger::Builder::from_default_env();
    match std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("vercel-env.log")
    {
        Ok(log_file) => {
            logger.target(env_logger::Target::Pipe(Box::new(log_file)));
        }
        Err(e) => eprintln!("Warning: cannot open vercel-env.log ({}), logging to stderr", e),
    }
    logger.init();

    let cli = Cli::parse();
    info!("Starting vercel-env");

    let mut stdout = std::io::stdout().lock();
    let succeeded = set_command(cli.set, &mut stdout).await?;
    info!("Finished, success: {}", succeeded);

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
