use std::io::Write;

use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info;

use tdhistory::error::{HistoryError, Result};
use tdhistory::export::{write_csv, write_json};
use tdhistory::money::{format_money, parse_money};
use tdhistory::settings::{load_settings, OutputFormat};
use tdhistory::{FieldDiagnostic, LedgerRecord};

use super::load_snapshot;

pub fn run(
    snapshot: &str,
    format: Option<OutputFormat>,
    output: Option<&str>,
    balance: Option<&str>,
    csv: bool,
) -> Result<()> {
    let settings = load_settings();
    let registry = settings.registry()?;
    let seed = balance
        .map(|b| parse_money(b.trim()))
        .transpose()
        .map_err(|e| HistoryError::Other(format!("--balance: {e}")))?;

    let table = load_snapshot(snapshot, csv)?;
    let history = table.reconstruct(&registry, &settings.balance_selector, seed)?;
    info!(
        records = history.records.len(),
        inferred_balance = history.balance_inferred,
        "parsed {snapshot}"
    );

    let format = format.unwrap_or(settings.output_format);
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            render(&history.records, format, std::io::BufWriter::new(file))?;
            println!("Wrote {} records to {path}", history.records.len());
        }
        None => render(&history.records, format, std::io::stdout().lock())?,
    }

    report_diagnostics(&history.diagnostics);
    Ok(())
}

fn render<W: Write>(records: &[LedgerRecord], format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(records, out),
        OutputFormat::Json => write_json(records, out),
        OutputFormat::Table => {
            writeln!(out, "{}", ledger_table(records))?;
            out.flush()?;
            Ok(())
        }
    }
}

fn ledger_table(records: &[LedgerRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Type", "Description", "Debit", "Credit", "Balance"]);
    for r in records {
        let amount = |v: i64| {
            if v == 0 {
                Cell::new("")
            } else {
                Cell::new(format_money(v)).set_alignment(CellAlignment::Right)
            }
        };
        let balance = if r.balance < 0 {
            format_money(r.balance).red().to_string()
        } else {
            format_money(r.balance)
        };
        table.add_row(vec![
            Cell::new(r.index),
            Cell::new(r.date.format("%Y-%m-%d")),
            Cell::new(&r.kind),
            Cell::new(&r.description),
            amount(r.debit),
            amount(r.credit),
            Cell::new(balance).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn report_diagnostics(diagnostics: &[FieldDiagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    eprintln!(
        "{}",
        format!("{} field(s) could not be read:", diagnostics.len()).yellow()
    );
    for d in diagnostics {
        eprintln!("  row {} {:?} = {:?}: {}", d.row, d.column, d.value, d.error);
    }
}
