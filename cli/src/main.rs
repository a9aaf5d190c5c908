use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod decode;
mod error;
mod logging;
mod output;
mod render;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "kairo")]
#[command(about = "Routing request decoder and result renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a JSON request into validated service parameters
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Render a JSON result tree as a native value or a JSON buffer
    Render {
        #[command(flatten)]
        config: render::Config,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Decode { config } => decode::execute(config),
        Commands::Render { config } => render::execute(config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
