use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use spendpace::cli::{
    handle_budget_command, handle_expense_command, handle_monthly_summary, handle_overview,
    handle_review, BudgetCommands, ExpenseCommands,
};
use spendpace::config::{paths::PacePaths, settings::Settings};
use spendpace::models::UserId;
use spendpace::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendpace",
    version,
    about = "Budget pacing and safe-to-spend calculator",
    long_about = "SpendPace tracks expenses against weekly or monthly category budgets \
                  and tells you whether you are on pace and how much is safe to spend today."
)]
struct Cli {
    /// User whose budgets and expenses to use (defaults to the configured user)
    #[arg(short, long, global = true, env = "SPENDPACE_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Month-to-date summary with per-category pacing
    Summary {
        /// Evaluate as of this date or datetime (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Overall pacing for the current week
    Overview {
        /// Evaluate as of this date or datetime (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Weekly review with insights
    Review {
        /// Evaluate as of this date or datetime (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PacePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let user = match cli.user {
        Some(name) => UserId::new(name)?,
        None => settings.default_user_id()?,
    };

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, &user, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, &user, cmd)?;
        }
        Some(Commands::Summary { at, json }) => {
            handle_monthly_summary(&storage, &settings, &user, at.as_deref(), json)?;
        }
        Some(Commands::Overview { at, json }) => {
            handle_overview(&storage, &settings, &user, at.as_deref(), json)?;
        }
        Some(Commands::Review { at, json }) => {
            handle_review(&storage, &user, at.as_deref(), json)?;
        }
        Some(Commands::Config) => {
            println!("SpendPace Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Active user:      {}", user);
            println!("  Default period:   {}", settings.default_period);
            println!("  Weeks per month:  {}", settings.weeks_per_month);
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Log level:        {}", settings.log_level);
        }
        None => {
            println!("SpendPace - budget pacing and safe-to-spend");
            println!();
            println!("Run 'spendpace --help' for usage information.");
        }
    }

    Ok(())
}
