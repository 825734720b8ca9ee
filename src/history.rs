use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{FieldError, HistoryError, LookupError, Result};
use crate::fields::{FieldHandler, FieldRegistry};
use crate::models::{FieldDiagnostic, History, LedgerRecord};

/// Header labels containing this mark the table as carrying its own balances.
const BALANCE_MARKER: &str = "Balance";

/// Rebuild an account history from a scraped table.
///
/// `rows` must be newest-first, the order the bank renders them. The result is
/// oldest-first. When no header mentions a balance, `balance_seed` is called
/// once for the current account balance and every row's balance is derived
/// backwards from it.
///
/// Bad cells are recorded in [`History::diagnostics`] and leave their field at
/// its default. Only an empty table, a missing seed, or a derived balance
/// that overflows fails the whole call.
pub fn reconstruct_history<H, C, F>(
    header: &[H],
    rows: &[Vec<C>],
    registry: &FieldRegistry,
    balance_seed: F,
) -> Result<History>
where
    H: AsRef<str>,
    C: AsRef<str>,
    F: FnOnce() -> std::result::Result<i64, LookupError>,
{
    if rows.is_empty() {
        return Err(HistoryError::EmptyHistory);
    }

    let columns: Vec<(&str, Option<FieldHandler>)> = header
        .iter()
        .map(|h| (h.as_ref(), registry.lookup(h.as_ref())))
        .collect();
    let has_balance = columns.iter().any(|(name, _)| name.contains(BALANCE_MARKER));

    let mut running = if has_balance {
        None
    } else {
        match balance_seed() {
            Ok(seed) => Some(seed),
            Err(e) => {
                warn!(error = %e, "couldn't determine account balance");
                return Err(HistoryError::NoBalanceSeed(e));
            }
        }
    };
    debug!(
        rows = rows.len(),
        columns = columns.len(),
        has_balance,
        "reconstructing account history"
    );

    let mut records = Vec::with_capacity(rows.len());
    let mut diagnostics = Vec::new();

    for (i, cells) in rows.iter().enumerate() {
        let row = i + 1;
        let mut record = LedgerRecord::default();

        for (j, (column, handler)) in columns.iter().enumerate() {
            let value = cells.get(j).map(|c| c.as_ref()).unwrap_or("");
            let outcome = match handler {
                Some(apply) => apply(&mut record, value),
                None => Err(FieldError::UnknownColumn(column.to_string())),
            };
            if let Err(error) = outcome {
                warn!(row, column = %column, value, %error, "skipping field");
                diagnostics.push(FieldDiagnostic {
                    row,
                    column: column.to_string(),
                    value: value.to_string(),
                    error,
                });
            }
        }

        // Walking back in time: this row's balance is what remains before
        // the newer rows were applied.
        if let Some(balance) = running.as_mut() {
            let current = *balance;
            record.balance = current;
            *balance = record
                .net()
                .and_then(|net| current.checked_sub(net))
                .ok_or(HistoryError::BalanceOverflow { row })?;
        }

        records.push(record);
    }

    records.reverse();
    assign_indices(&mut records);

    debug!(
        records = records.len(),
        diagnostics = diagnostics.len(),
        "account history reconstructed"
    );

    Ok(History {
        records,
        diagnostics,
        balance_inferred: !has_balance,
    })
}

/// Number records 1, 2, 3... within each run of equal dates.
pub fn assign_indices(records: &mut [LedgerRecord]) {
    let mut cursor: Option<NaiveDate> = None;
    let mut index = 0;
    for record in records.iter_mut() {
        if cursor == Some(record.date) {
            index += 1;
        } else {
            index = 1;
            cursor = Some(record.date);
        }
        record.index = index;
    }
}
