use std::io;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use bank_menu::cli::{handle_config_command, handle_init_command};
use bank_menu::config::{BankPaths, Settings};
use bank_menu::menu::{Console, Session};

#[derive(Parser)]
#[command(
    name = "bank",
    version,
    about = "Console menu for savings and current bank accounts",
    long_about = "Operate an in-memory savings account (which keeps a minimum \
                  balance) and current account (which may be drawn down to \
                  zero) from an interactive console menu. Balances last for \
                  the session only."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Currency symbol printed in front of amounts
    #[arg(long, global = true, env = "BANK_MENU_CURRENCY")]
    currency: Option<String>,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive account menu (default)
    Menu,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::new().filter_or("BANK_MENU_LOG", default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = BankPaths::new();
    let mut settings = match &paths {
        Ok(paths) => Settings::load_or_default(paths),
        Err(e) => {
            log::warn!("{}; using default settings", e);
            Settings::default()
        }
    };
    if let Some(symbol) = cli.currency {
        settings.currency_symbol = symbol;
    }

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let console = Console::new(io::stdin().lock(), io::stdout());
            Session::new(console, settings).run()?;
        }
        Commands::Init => handle_init_command(&paths?, &settings)?,
        Commands::Config => handle_config_command(&paths?, &settings),
    }

    Ok(())
}
