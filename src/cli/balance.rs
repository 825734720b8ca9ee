use tdhistory::error::{HistoryError, Result};
use tdhistory::money::format_money;
use tdhistory::settings::load_settings;

use super::load_snapshot;

pub fn run(snapshot: &str, csv: bool) -> Result<()> {
    let settings = load_settings();
    let snapshot = load_snapshot(snapshot, csv)?;
    let balance = snapshot
        .balance(&settings.balance_selector)
        .map_err(HistoryError::NoBalanceSeed)?;
    println!("{}", format_money(balance));
    Ok(())
}
