use tdhistory::dates::{format_query_date, parse_date};
use tdhistory::error::{HistoryError, Result};

pub fn run(start: &str, end: Option<&str>) -> Result<()> {
    let start = parse_date(start).map_err(|e| HistoryError::Other(format!("start: {e}")))?;
    println!("start {}", format_query_date(start));

    if let Some(end) = end {
        let end = parse_date(end).map_err(|e| HistoryError::Other(format!("end: {e}")))?;
        if end < start {
            return Err(HistoryError::Other(format!(
                "end {} is before start {}",
                format_query_date(end),
                format_query_date(start)
            )));
        }
        println!("end {}", format_query_date(end));
    }
    Ok(())
}
