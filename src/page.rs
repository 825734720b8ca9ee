//! The slice of the browser layer the history engine reads from.

use tracing::debug;

use crate::error::LookupError;
use crate::money::parse_money;

pub const ACCOUNT_BALANCE_SELECTOR: &str =
    "table[id=Table2] span, table[id=AccountBalanceSection] span";

pub trait PageElement {
    fn text(&self) -> Result<String, LookupError>;
}

pub trait Page {
    type Element: PageElement;

    /// Elements matching `selector`, in document order.
    fn find_all<'a>(&'a self, selector: &str) -> Box<dyn Iterator<Item = Self::Element> + 'a>;
}

/// Read the account-wide balance display.
///
/// Several balance widgets can render on one page; the last one holds the
/// authoritative total.
pub fn extract_balance<P: Page>(page: &P, selector: &str) -> Result<i64, LookupError> {
    let element = page
        .find_all(selector)
        .last()
        .ok_or_else(|| LookupError::NotFound {
            selector: selector.to_string(),
        })?;
    let text = element.text()?;
    debug!(%text, "account balance widget");
    Ok(parse_money(text.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoneyError;

    struct Widget(Option<&'static str>);

    impl PageElement for Widget {
        fn text(&self) -> Result<String, LookupError> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| LookupError::Text("detached".to_string()))
        }
    }

    struct FakePage(Vec<Option<&'static str>>);

    impl Page for FakePage {
        type Element = Widget;

        fn find_all<'a>(&'a self, selector: &str) -> Box<dyn Iterator<Item = Widget> + 'a> {
            if selector == ACCOUNT_BALANCE_SELECTOR {
                Box::new(self.0.iter().copied().map(Widget))
            } else {
                Box::new(std::iter::empty())
            }
        }
    }

    #[test]
    fn test_extract_balance_takes_last_widget() {
        let page = FakePage(vec![Some("$1.00"), Some("Available"), Some(" $2,500.10 ")]);
        assert_eq!(extract_balance(&page, ACCOUNT_BALANCE_SELECTOR).unwrap(), 250010);
    }

    #[test]
    fn test_extract_balance_not_found() {
        let page = FakePage(vec![]);
        assert_eq!(
            extract_balance(&page, ACCOUNT_BALANCE_SELECTOR),
            Err(LookupError::NotFound {
                selector: ACCOUNT_BALANCE_SELECTOR.to_string()
            })
        );
    }

    #[test]
    fn test_extract_balance_respects_selector() {
        let page = FakePage(vec![Some("$1.00")]);
        assert!(matches!(
            extract_balance(&page, "div.balance"),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn test_extract_balance_bad_text() {
        let page = FakePage(vec![Some("$1.00"), Some("pending")]);
        assert!(matches!(
            extract_balance(&page, ACCOUNT_BALANCE_SELECTOR),
            Err(LookupError::Money(MoneyError::NotANumber { .. }))
        ));

        let page = FakePage(vec![None]);
        assert!(matches!(
            extract_balance(&page, ACCOUNT_BALANCE_SELECTOR),
            Err(LookupError::Text(_))
        ));
    }
}
