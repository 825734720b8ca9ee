use std::collections::HashMap;

use crate::dates::parse_date;
use crate::error::{FieldError, HistoryError, Result};
use crate::models::LedgerRecord;
use crate::money::parse_money;

/// Applies one cell of text to the record under construction.
pub type FieldHandler = fn(&mut LedgerRecord, &str) -> std::result::Result<(), FieldError>;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub fn date_from_str(record: &mut LedgerRecord, value: &str) -> std::result::Result<(), FieldError> {
    record.date = parse_date(value)?;
    Ok(())
}

pub fn type_from_str(record: &mut LedgerRecord, value: &str) -> std::result::Result<(), FieldError> {
    record.kind = value.trim().to_string();
    Ok(())
}

pub fn description_from_str(
    record: &mut LedgerRecord,
    value: &str,
) -> std::result::Result<(), FieldError> {
    record.description = value.trim().to_string();
    Ok(())
}

/// Blank cells leave the amount at zero.
fn optional_money(value: &str) -> std::result::Result<Option<i64>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_money(value)?))
}

pub fn debit_from_str(record: &mut LedgerRecord, value: &str) -> std::result::Result<(), FieldError> {
    if let Some(debit) = optional_money(value)? {
        record.debit = debit;
    }
    Ok(())
}

pub fn credit_from_str(record: &mut LedgerRecord, value: &str) -> std::result::Result<(), FieldError> {
    if let Some(credit) = optional_money(value)? {
        record.credit = credit;
    }
    Ok(())
}

pub fn balance_from_str(record: &mut LedgerRecord, value: &str) -> std::result::Result<(), FieldError> {
    if let Some(balance) = optional_money(value)? {
        record.balance = balance;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Standard columns: enum dispatch over the bank's header labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Type,
    Description,
    Debit,
    Credit,
    AccountBalance,
}

impl Field {
    pub fn header(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Type => "Type",
            Self::Description => "Description",
            Self::Debit => "Debit",
            Self::Credit => "Credit",
            Self::AccountBalance => "Account Balance",
        }
    }

    pub fn handler(&self) -> FieldHandler {
        match self {
            Self::Date => date_from_str,
            Self::Type => type_from_str,
            Self::Description => description_from_str,
            Self::Debit => debit_from_str,
            Self::Credit => credit_from_str,
            Self::AccountBalance => balance_from_str,
        }
    }
}

pub const ALL_FIELDS: &[Field] = &[
    Field::Date,
    Field::Type,
    Field::Description,
    Field::Debit,
    Field::Credit,
    Field::AccountBalance,
];

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Header label -> handler. Labels match exactly; nothing is normalized.
#[derive(Clone, Default)]
pub struct FieldRegistry {
    handlers: HashMap<String, FieldHandler>,
}

impl std::fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("columns", &self.columns())
            .finish()
    }
}

impl FieldRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The six columns the bank's history tables use.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for field in ALL_FIELDS {
            registry.insert(field.header(), field.handler());
        }
        registry
    }

    pub fn insert(&mut self, column: &str, handler: FieldHandler) -> &mut Self {
        self.handlers.insert(column.to_string(), handler);
        self
    }

    /// Make `label` parse the same way as the already-registered `existing`.
    pub fn alias(&mut self, label: &str, existing: &str) -> Result<&mut Self> {
        let handler = self
            .lookup(existing)
            .ok_or_else(|| HistoryError::UnknownField(existing.to_string()))?;
        Ok(self.insert(label, handler))
    }

    pub fn lookup(&self, column: &str) -> Option<FieldHandler> {
        self.handlers.get(column).copied()
    }

    pub fn columns(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
