use anyhow::Result;
use clap::Parser;
use seoaudit::cli::{Cli, Commands};
use seoaudit::commands::{
    self, AuditCommand, BatchCommand, CommandOutcome, CompareCommand,
};
use seoaudit::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    let outcome = match cli.command {
        Commands::Audit {
            facts,
            audit,
            compare_url,
            format,
            output,
            plain,
            fail_under,
            verbosity: _,
        } => commands::run_audit(AuditCommand {
            facts,
            audit,
            compare_url,
            format,
            output,
            plain,
            fail_under,
        })?,
        Commands::Batch {
            facts,
            audit,
            json,
            fail_under,
            verbosity: _,
        } => commands::run_batch(BatchCommand {
            facts,
            audit,
            json,
            fail_under,
        })?,
        Commands::Compare {
            facts,
            competitor,
            competitor_signals,
            audit,
            format,
            output,
            plain,
            verbosity: _,
        } => {
            commands::run_compare(CompareCommand {
                facts,
                competitor,
                competitor_signals,
                audit,
                format,
                output,
                plain,
            })?;
            CommandOutcome::Success
        }
        Commands::Rules { json } => {
            commands::list_rules(json)?;
            CommandOutcome::Success
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
            CommandOutcome::Success
        }
    };

    if outcome != CommandOutcome::Success {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}
