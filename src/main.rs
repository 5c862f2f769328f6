use anyhow::Result;
use clap::{Parser, Subcommand};

use tiffin::audit::AuditLogger;
use tiffin::cli::{
    handle_add, handle_advance_command, handle_audit, handle_delete, handle_export, handle_list,
    handle_prices_command, handle_summary, AddArgs, AdvanceCommands, AuditArgs, DeleteArgs,
    ExportArgs, ListArgs, PricesCommands,
};
use tiffin::config::{Settings, TiffinPaths};
use tiffin::services::RecordStore;
use tiffin::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "tiffin",
    version,
    about = "Track tiffin meals, prices, and advance payments",
    long_about = "TiffinCLI keeps a record of morning and evening tiffin meals, \
                  prices each meal at the rate in effect when it was added, and \
                  shows how much of the advance paid to the service is left."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record meals for a day
    Add(AddArgs),

    /// Delete a meal record
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// List meal records grouped by month
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show total cost, advance, and balance
    Summary,

    /// Meal price commands
    #[command(subcommand)]
    Prices(PricesCommands),

    /// Advance payment commands
    #[command(subcommand)]
    Advance(AdvanceCommands),

    /// Export records to a file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    Audit(AuditArgs),

    /// Create the config file and optionally set meal prices
    Init {
        /// Morning meal price
        #[arg(long, requires = "evening", allow_hyphen_values = true)]
        morning: Option<String>,
        /// Evening meal price
        #[arg(long, requires = "morning", allow_hyphen_values = true)]
        evening: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TiffinPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Load the record store
    let audit_logger = AuditLogger::new(paths.audit_log());
    let mut store = RecordStore::initialize(FileStore::open(&paths)?);
    if settings.audit_enabled {
        store = store.with_audit_logger(audit_logger.clone());
    }

    print_warnings(store.warnings());
    let reported = store.warnings().len();

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut store, &settings, args)?,
        Some(Commands::Delete(args)) => handle_delete(&mut store, &settings, args)?,
        Some(Commands::List(args)) => {
            print_setup_hint(&store);
            handle_list(&store, &settings, args)?;
        }
        Some(Commands::Summary) => {
            print_setup_hint(&store);
            handle_summary(&store, &settings)?;
        }
        Some(Commands::Prices(cmd)) => handle_prices_command(&mut store, &settings, cmd)?,
        Some(Commands::Advance(cmd)) => handle_advance_command(&mut store, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export(&store, &settings, args)?,
        Some(Commands::Audit(args)) => handle_audit(&audit_logger, settings.audit_enabled, args)?,
        Some(Commands::Init { morning, evening }) => {
            println!("Initializing TiffinCLI at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            if let (Some(morning), Some(evening)) = (morning, evening) {
                handle_prices_command(
                    &mut store,
                    &settings,
                    PricesCommands::Set { morning, evening },
                )?;
            }
            println!("Initialization complete!");
            print_setup_hint(&store);
        }
        Some(Commands::Config) => {
            println!("TiffinCLI Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", store.port().dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("TiffinCLI - Tiffin meal tracker");
            println!();
            print_setup_hint(&store);
            handle_summary(&store, &settings)?;
            println!();
            println!("Run 'tiffin --help' for usage information.");
        }
    }

    print_warnings(&store.warnings()[reported..]);

    Ok(())
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn print_setup_hint(store: &RecordStore<FileStore>) {
    if store.needs_price_setup() {
        eprintln!("Meal prices are not set yet. Run 'tiffin prices set <morning> <evening>' to get started.");
    }
}
