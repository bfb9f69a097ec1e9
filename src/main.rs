use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use wallet_cli::audit::AuditLogger;
use wallet_cli::cli::{run_main_menu, MenuContext, Prompter};
use wallet_cli::config::{Settings, WalletPaths};
use wallet_cli::storage::{LoadOutcome, LoadedRegistry, RegistryStore};

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "wallet-cli keeps per-user ledgers of categorized income and \
                  expenses, tracks per-category budgets and warns when a budget \
                  or the overall balance goes negative."
)]
struct Cli {
    /// Directory holding settings, saved users and the audit log
    #[arg(long, global = true, env = "WALLET_CLI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => WalletPaths::with_base_dir(dir),
        None => WalletPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_interactive(&paths, &settings)?,
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("wallet-cli Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", paths.data_file(&settings.data_file).display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit enabled: {}", settings.audit_enabled);
        }
        Commands::Audit { limit } => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}

/// Load users, run the menus on stdin/stdout, then save users
fn run_interactive(paths: &WalletPaths, settings: &Settings) -> Result<()> {
    if let Err(e) = paths.ensure_directories() {
        warn!(error = %e, "Could not create data directory");
    }

    let store = RegistryStore::new(paths.data_file(&settings.data_file));
    let LoadedRegistry {
        mut registry,
        outcome,
    } = store.load();

    if let LoadOutcome::Corrupt {
        reason,
        quarantined,
    } = &outcome
    {
        eprintln!(
            "Warning: saved data could not be read ({}); starting with no users.",
            reason
        );
        if let Some(moved) = quarantined {
            eprintln!("The unreadable file was moved to {}", moved.display());
        }
    }

    let audit = settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()));
    let ctx = MenuContext {
        settings,
        audit: audit.as_ref(),
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let menu_result = run_main_menu(&mut registry, &ctx, &mut prompter);

    // Save even when the menu stopped on an I/O error
    match store.save(&registry) {
        Ok(()) => println!("\nData saved. Exiting..."),
        Err(e) => eprintln!("Error saving data: {}", e),
    }

    menu_result?;
    Ok(())
}

/// Initialise the `tracing` subscriber.
///
/// Logs go to stderr so they never interleave with menu output on stdout.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_env("WALLET_LOG")
        .unwrap_or_else(|_| EnvFilter::new("wallet_cli=error"));

    if std::env::var("WALLET_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    }
}
