use super::commands::SetArgs;
use clap::Parser;

#[derive(Parser)]
#[command(name = "vercel-env")]
#[command(about = "Set an environment variable on a Vercel project")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub set: SetArgs,
}
