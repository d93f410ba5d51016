mod migrate;
pub use migrate::MigrateCommand;

mod models;
pub use models::{load_models, parse_models, FieldEntry, ModelEntry};

mod utility;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ddlsync")]
#[command(about = "ddlsync - converge a live database schema to its models")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Create missing tables and reconcile every column
    Migrate(MigrateCommand),

    /// Same as `migrate --dry-run`
    Plan(MigrateCommand),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Migrate(cmd) => cmd.run().await,
            Command::Plan(cmd) => {
                MigrateCommand {
                    dry_run: true,
                    ..cmd
                }
                .run()
                .await
            }
        }
    }
}
