use actions_provenance::{
    cli::{self, ProvenanceArgs},
    error::Result,
};
use clap::Parser;

/// Generate SLSA provenance for the artifacts of a GitHub Actions run
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    args: ProvenanceArgs,
}

fn main() -> Result<()> {
    // Initialize logging
    actions_provenance::init_logging()?;

    // Parse command line arguments
    let cli = Cli::parse();

    let result = cli::handle_provenance_command(cli.args);

    // Format and display any errors
    if let Err(ref e) = result {
        eprintln!("{}", cli::format_error(e));
    }

    result
}
