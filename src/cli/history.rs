//! History CLI commands
//!
//! Closing months, listing snapshots, trends and CSV export.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_history_table;
use crate::error::{FinplanError, FinplanResult};
use crate::models::Period;
use crate::reports::TrendReport;
use crate::services::{BudgetService, HistoryService};
use crate::storage::RecordStore;

/// History subcommands
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Snapshot the current budget into the history
    Close {
        /// Month to record (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List recorded months
    #[command(alias = "ls")]
    List,

    /// Show surplus and savings-rate trends
    Trend,

    /// Export the history to a CSV file
    Export {
        /// Output file path
        file: PathBuf,
    },
}

/// Handle a history command
pub fn handle_history_command<S: RecordStore>(
    store: &S,
    settings: &Settings,
    cmd: HistoryCommands,
) -> FinplanResult<()> {
    let history = HistoryService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        HistoryCommands::Close { period } => {
            let period = match period {
                Some(p) => Period::parse(&p)
                    .map_err(|e| FinplanError::Validation(format!("Invalid period: {}", e)))?,
                None => Period::current(),
            };

            let budget = BudgetService::new(store).load();
            let replaced = history.get(period).is_some();
            let entry =
                history.close_month(period, &budget, settings.scoring.investable_ratio_cap)?;

            let verb = if replaced { "Updated" } else { "Recorded" };
            println!(
                "{} {}: surplus {}",
                verb,
                period.friendly(),
                entry.surplus.format_with_symbol(symbol)
            );
        }
        HistoryCommands::List => {
            println!("{}", format_history_table(&history.list(), symbol));
        }
        HistoryCommands::Trend => {
            print!("{}", TrendReport::generate(store).format_terminal(symbol));
        }
        HistoryCommands::Export { file } => {
            let handle = File::create(&file).map_err(|e| {
                FinplanError::Export(format!("Failed to create {}: {}", file.display(), e))
            })?;
            let rows = history.export_csv(BufWriter::new(handle))?;
            println!("Exported {} month(s) to {}", rows, file.display());
        }
    }

    Ok(())
}
