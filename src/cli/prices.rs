//! Price and advance CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_prices;
use crate::error::TiffinResult;
use crate::services::RecordStore;
use crate::storage::KeyValueStore;

/// Price subcommands
#[derive(Subcommand, Debug)]
pub enum PricesCommands {
    /// Set the price of each meal (applies to meals added from now on)
    Set {
        /// Morning meal price
        #[arg(allow_hyphen_values = true)]
        morning: String,
        /// Evening meal price
        #[arg(allow_hyphen_values = true)]
        evening: String,
    },
    /// Show the current meal prices
    Show,
}

/// Advance subcommands
#[derive(Subcommand, Debug)]
pub enum AdvanceCommands {
    /// Set the advance amount paid to the tiffin service
    Set {
        /// Amount paid in advance
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show the advance amount
    Show,
}

/// Handle a prices command
pub fn handle_prices_command<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    settings: &Settings,
    cmd: PricesCommands,
) -> TiffinResult<()> {
    match cmd {
        PricesCommands::Set { morning, evening } => {
            let prices = store.set_prices(&morning, &evening)?;
            println!("Meal prices saved.");
            print!("{}", format_prices(Some(prices), &settings.currency_symbol));
        }
        PricesCommands::Show => {
            print!("{}", format_prices(store.prices(), &settings.currency_symbol));
        }
    }

    Ok(())
}

/// Handle an advance command
pub fn handle_advance_command<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    settings: &Settings,
    cmd: AdvanceCommands,
) -> TiffinResult<()> {
    match cmd {
        AdvanceCommands::Set { amount } => {
            let advance = store.set_advance(&amount)?;
            println!(
                "Advance set to {}",
                advance.format_with_symbol(&settings.currency_symbol)
            );
            println!(
                "Balance: {}",
                store
                    .summary()
                    .balance
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
        AdvanceCommands::Show => {
            println!(
                "Advance Given: {}",
                store.advance().format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
