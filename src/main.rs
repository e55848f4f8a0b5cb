use anyhow::Result;
use clap::{Parser, Subcommand};

use finplan::cli::{
    handle_expense_command, handle_history_command, handle_income_command, handle_invest_command,
};
use finplan::config::{paths::FinplanPaths, settings::Settings};
use finplan::log::init_logging;
use finplan::reports::DashboardReport;
use finplan::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "finplan",
    version,
    about = "Personal finance planning from the terminal",
    long_about = "finplan tracks your monthly net income and fixed expenses, scores \
                  the health of your budget, projects monthly investments and keeps \
                  a month-by-month history of your surplus."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly net income
    #[command(subcommand)]
    Income(finplan::cli::IncomeCommands),

    /// Fixed monthly expenses
    #[command(subcommand)]
    Expense(finplan::cli::ExpenseCommands),

    /// Show metrics, health score and expense breakdown
    #[command(alias = "dash")]
    Dashboard,

    /// Monthly snapshots and trends
    #[command(subcommand)]
    History(finplan::cli::HistoryCommands),

    /// Project a monthly investment plan
    Invest(finplan::cli::InvestArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = FinplanPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = JsonFileStore::new(&paths);

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_income_command(&store, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&store, &settings, cmd)?;
        }
        Some(Commands::Dashboard) => {
            let report = DashboardReport::generate(&store, &settings);
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
        Some(Commands::History(cmd)) => {
            handle_history_command(&store, &settings, cmd)?;
        }
        Some(Commands::Invest(args)) => {
            handle_invest_command(&store, &settings, args)?;
        }
        Some(Commands::Config) => {
            println!("finplan Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!(
                "  Health score policy: savings {}/fixed costs {}/investable {}",
                settings.scoring.savings_weight,
                settings.scoring.fixed_cost_weight,
                settings.scoring.investment_weight
            );
            println!(
                "  Investment defaults: {:.0}% of surplus at {}% for {} years, goal {}",
                settings.investment.contribution_share * 100.0,
                settings.investment.annual_return_rate,
                settings.investment.duration_years,
                settings
                    .investment
                    .goal_amount
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
        None => {
            println!("finplan - Personal finance planning from the terminal");
            println!();
            println!("Run 'finplan --help' for usage information.");
            println!("Run 'finplan dashboard' to see where your budget stands.");
        }
    }

    Ok(())
}
