use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, Result};
use crate::fields::FieldRegistry;
use crate::history::reconstruct_history;
use crate::models::History;
use crate::page::{extract_balance, Page, PageElement, ACCOUNT_BALANCE_SELECTOR};

/// Plain-text capture of an account history page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub header: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
    /// Locator the balance widgets were captured with.
    #[serde(default = "default_balance_selector")]
    pub balance_selector: String,
    /// Texts of the elements matching `balance_selector`, in document order.
    #[serde(default)]
    pub balance_widgets: Vec<String>,
}

fn default_balance_selector() -> String {
    ACCOUNT_BALANCE_SELECTOR.to_string()
}

impl Default for TableSnapshot {
    fn default() -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
            balance_selector: default_balance_selector(),
            balance_widgets: Vec::new(),
        }
    }
}

pub struct SnapshotElement(String);

impl PageElement for SnapshotElement {
    fn text(&self) -> std::result::Result<String, LookupError> {
        Ok(self.0.clone())
    }
}

/// Only the balance locator was captured; any other selector matches nothing.
impl Page for TableSnapshot {
    type Element = SnapshotElement;

    fn find_all<'a>(&'a self, selector: &str) -> Box<dyn Iterator<Item = SnapshotElement> + 'a> {
        if selector == self.balance_selector {
            Box::new(self.balance_widgets.iter().cloned().map(SnapshotElement))
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl TableSnapshot {
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// First record is the header; every later record is a data row.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(std::io::BufReader::new(file));

        let mut snapshot = Self::default();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            if i == 0 {
                snapshot.header = cells;
            } else {
                snapshot.rows.push(cells);
            }
        }
        Ok(snapshot)
    }

    /// JSON unless the file ends in `.csv`.
    pub fn load(path: &Path) -> Result<Self> {
        let is_csv = path
            .extension()
            .map_or(false, |e| e.eq_ignore_ascii_case("csv"));
        if is_csv {
            Self::load_csv(path)
        } else {
            Self::load_json(path)
        }
    }

    pub fn balance(&self, selector: &str) -> std::result::Result<i64, LookupError> {
        extract_balance(self, selector)
    }

    /// Reconstruct, seeding from `seed` if given, else from the balance widgets.
    pub fn reconstruct(
        &self,
        registry: &FieldRegistry,
        selector: &str,
        seed: Option<i64>,
    ) -> Result<History> {
        reconstruct_history(&self.header, &self.rows, registry, || match seed {
            Some(balance) => Ok(balance),
            None => self.balance(selector),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HistoryError;
    use crate::page::ACCOUNT_BALANCE_SELECTOR;

    fn credit_card() -> TableSnapshot {
        TableSnapshot {
            header: vec!["Date".into(), "Description".into(), "Debit".into(), "Credit".into()],
            rows: vec![
                vec!["01/05/2023".into(), "PAYMENT".into(), "".into(), "100.00".into()],
                vec!["01/04/2023".into(), "BOOKSTORE".into(), "25.00".into(), "".into()],
            ],
            balance_widgets: vec!["$9.00".into(), "$1,075.00".into()],
            ..TableSnapshot::default()
        }
    }

    #[test]
    fn test_balance_only_for_captured_selector() {
        let snapshot = credit_card();
        assert_eq!(snapshot.balance(ACCOUNT_BALANCE_SELECTOR).unwrap(), 107500);
        assert_eq!(
            snapshot.balance("div.nonexistent-widget"),
            Err(LookupError::NotFound {
                selector: "div.nonexistent-widget".to_string()
            })
        );
    }

    #[test]
    fn test_reconstruct_with_other_selector_has_no_seed() {
        let err = credit_card()
            .reconstruct(&FieldRegistry::standard(), "div.nonexistent-widget", None)
            .unwrap_err();
        assert!(matches!(err, HistoryError::NoBalanceSeed(LookupError::NotFound { .. })));
    }

    #[test]
    fn test_load_json_with_custom_balance_selector() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(
            &path,
            r#"{"header": ["Date", "Debit"], "rows": [["01/02/2023", "1.00"]],
                "balance_selector": "span.total", "balance_widgets": ["$3.00"]}"#,
        )
        .unwrap();
        let snapshot = TableSnapshot::load(&path).unwrap();
        assert_eq!(snapshot.balance("span.total").unwrap(), 300);
        assert!(snapshot.balance(ACCOUNT_BALANCE_SELECTOR).is_err());
    }

    #[test]
    fn test_reconstruct_seeds_from_widgets() {
        let history = credit_card()
            .reconstruct(&FieldRegistry::standard(), ACCOUNT_BALANCE_SELECTOR, None)
            .unwrap();
        assert_eq!(history.records[1].description, "PAYMENT");
        assert_eq!(history.records[1].balance, 107500);
        assert_eq!(history.records[0].balance, 97500);
    }

    #[test]
    fn test_reconstruct_seed_override() {
        let mut snapshot = credit_card();
        snapshot.balance_widgets.clear();
        let history = snapshot
            .reconstruct(&FieldRegistry::standard(), ACCOUNT_BALANCE_SELECTOR, Some(0))
            .unwrap();
        assert_eq!(history.records[1].balance, 0);
        assert_eq!(history.records[0].balance, -10000);
    }

    #[test]
    fn test_reconstruct_without_widgets_fails() {
        let mut snapshot = credit_card();
        snapshot.balance_widgets.clear();
        let err = snapshot
            .reconstruct(&FieldRegistry::standard(), ACCOUNT_BALANCE_SELECTOR, None)
            .unwrap_err();
        assert!(matches!(err, HistoryError::NoBalanceSeed(LookupError::NotFound { .. })));
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(
            &path,
            r#"{"header": ["Date", "Account Balance"], "rows": [["01/02/2023", " $1.00 "]]}"#,
        )
        .unwrap();
        let snapshot = TableSnapshot::load(&path).unwrap();
        assert_eq!(snapshot.header, vec!["Date", "Account Balance"]);
        assert_eq!(snapshot.rows.len(), 1);
        assert!(snapshot.balance_widgets.is_empty());
        assert_eq!(snapshot.balance_selector, ACCOUNT_BALANCE_SELECTOR);
    }

    #[test]
    fn test_load_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.CSV");
        let content = "\
Date,Description,Debit,Credit,Account Balance
01/03/2023,PAYROLL,,\"2,000.00\",\"2,100.00\"
01/02/2023,RENT,900.00
";
        std::fs::write(&path, content).unwrap();
        let snapshot = TableSnapshot::load(&path).unwrap();
        assert_eq!(snapshot.header.len(), 5);
        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.rows[0][3], "2,000.00");
        assert_eq!(snapshot.rows[1].len(), 3);
    }

    #[test]
    fn test_load_csv_header_only_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.csv");
        std::fs::write(&path, "Date,Description,Account Balance\n").unwrap();
        let snapshot = TableSnapshot::load(&path).unwrap();
        let err = snapshot
            .reconstruct(&FieldRegistry::standard(), ACCOUNT_BALANCE_SELECTOR, None)
            .unwrap_err();
        assert!(matches!(err, HistoryError::EmptyHistory));
    }
}
