use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::UNPARSED_DATE;
use crate::error::FieldError;

/// One transaction line of an account history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRecord {
    /// 1-based position among the records sharing `date`.
    pub index: u32,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Minor units.
    pub debit: i64,
    /// Minor units.
    pub credit: i64,
    /// Balance after this transaction, in minor units.
    pub balance: i64,
}

impl Default for LedgerRecord {
    fn default() -> Self {
        Self {
            index: 0,
            date: UNPARSED_DATE,
            kind: String::new(),
            description: String::new(),
            debit: 0,
            credit: 0,
            balance: 0,
        }
    }
}

impl LedgerRecord {
    /// `credit - debit`, or `None` if that doesn't fit in an i64.
    pub fn net(&self) -> Option<i64> {
        self.credit.checked_sub(self.debit)
    }
}

/// A cell that could not be applied to its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiagnostic {
    /// 1-based data row in source order (header excluded).
    pub row: usize,
    pub column: String,
    pub value: String,
    pub error: FieldError,
}

/// Output of a history reconstruction, oldest record first.
#[derive(Debug, Clone, Default)]
pub struct History {
    pub records: Vec<LedgerRecord>,
    pub diagnostics: Vec<FieldDiagnostic>,
    /// True when balances were derived from a seed rather than read from a column.
    pub balance_inferred: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net() {
        let r = LedgerRecord { debit: 450, credit: 100, ..Default::default() };
        assert_eq!(r.net(), Some(-350));
    }

    #[test]
    fn test_net_overflow() {
        let r = LedgerRecord { debit: i64::MIN, credit: 1, ..Default::default() };
        assert_eq!(r.net(), None);
    }
}
