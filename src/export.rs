use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::models::LedgerRecord;
use crate::money::decimal;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CsvRow<'a> {
    index: u32,
    date: String,
    #[serde(rename = "Type")]
    kind: &'a str,
    description: &'a str,
    debit: String,
    credit: String,
    balance: String,
}

impl<'a> From<&'a LedgerRecord> for CsvRow<'a> {
    fn from(r: &'a LedgerRecord) -> Self {
        Self {
            index: r.index,
            date: r.date.format("%Y-%m-%d").to_string(),
            kind: &r.kind,
            description: &r.description,
            debit: decimal(r.debit),
            credit: decimal(r.credit),
            balance: decimal(r.balance),
        }
    }
}

pub fn write_csv<W: Write>(records: &[LedgerRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(CsvRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Money stays in integer minor units.
pub fn write_json<W: Write>(records: &[LedgerRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
