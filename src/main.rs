use clap::{Parser, Subcommand};
use infragen::AppError;

#[derive(Parser)]
#[command(name = "infragen")]
#[command(version)]
#[command(
    about = "Generate Terraform variable files for containerized AWS deployments",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively collect project settings and write tfvars files
    #[clap(visible_alias = "i")]
    Init,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init => infragen::init(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
