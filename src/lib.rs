pub mod dates;
pub mod error;
pub mod export;
pub mod fields;
pub mod history;
pub mod models;
pub mod money;
pub mod page;
pub mod settings;
pub mod snapshot;

pub use error::{FieldError, HistoryError, LookupError, MoneyError, Result};
pub use fields::{FieldHandler, FieldRegistry};
pub use history::reconstruct_history;
pub use models::{FieldDiagnostic, History, LedgerRecord};
pub use money::parse_money;
pub use page::{extract_balance, Page, PageElement};
pub use snapshot::TableSnapshot;
