//! Terminal blackjack: one or more players against the dealer.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use bjtable::{ConsoleTerminal, Table, TableOptions, Terminal, Tone};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("shuffling with seed {seed}");

    let mut term = ConsoleTerminal::new();
    let mut table = Table::new(TableOptions::default(), seed);

    let seated = table
        .seat_players(&mut term)
        .context("failed to read the number of players")?;
    if seated == 0 {
        term.notify("Nobody is playing. Goodbye.", Tone::Plain);
        return Ok(());
    }

    let rounds = table.run(&mut term).context("the game was interrupted")?;
    term.notify(
        &format!("Thanks for playing! ({rounds} rounds)"),
        Tone::Highlight,
    );
    Ok(())
}
