use anyhow::Context;
use clap::Parser;
use collection2k6::{
    cli::{Cli, Commands},
    commands::{self, ConvertCommandArgs},
    telemetry,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_telemetry();

    match cli.command {
        Commands::Convert {
            collection,
            globals,
            environment,
            json,
            csv,
            output,
        } => {
            commands::execute_convert(ConvertCommandArgs {
                collection_path: &collection,
                globals: globals.as_deref(),
                environment: environment.as_deref(),
                json: json.as_deref(),
                csv: csv.as_deref(),
                output_path: output.as_deref(),
            })
            .with_context(|| format!("Failed to convert {}", collection.display()))?;
        }
        Commands::List { collection } => {
            commands::execute_list(&collection)
                .with_context(|| format!("Failed to list {}", collection.display()))?;
        }
    }

    Ok(())
}
