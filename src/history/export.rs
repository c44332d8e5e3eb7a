//! Serialization of the history ledger to the three download payloads:
//! CSV for spreadsheets, a plain-text report, and a printable HTML table.
//!
//! All exports return `None` for an empty ledger; the caller simply has
//! nothing to offer for download in that case.

use super::ledger::{HistoryEntry, HistoryLedger};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

/// A single history entry with every field pre-formatted for display.
/// Shared by the CSV export and the interactive history table.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct HistoryRow {
    #[tabled(rename = "Timestamp")]
    pub timestamp: String,

    #[tabled(rename = "Mode")]
    pub mode: String,

    #[tabled(rename = "Rate (%)")]
    pub rate_pct: String,

    #[tabled(rename = "Base (₹)")]
    pub base: String,

    #[tabled(rename = "GST (₹)")]
    pub gst: String,

    #[tabled(rename = "CGST (₹)")]
    pub cgst: String,

    #[tabled(rename = "SGST (₹)")]
    pub sgst: String,

    #[tabled(rename = "Total (₹)")]
    pub total: String,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        let b = &entry.breakdown;
        HistoryRow {
            timestamp: entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            mode: entry.mode.label().to_string(),
            rate_pct: b.rate_pct.to_string(),
            base: format!("{:.2}", b.base),
            gst: format!("{:.2}", b.gst),
            cgst: format!("{:.2}", b.cgst),
            sgst: format!("{:.2}", b.sgst),
            total: format!("{:.2}", b.total),
        }
    }
}

pub fn rows(ledger: &HistoryLedger) -> Vec<HistoryRow> {
    ledger.entries().map(HistoryRow::from).collect()
}

/// Serialize the ledger as CSV with columns
/// `timestamp,mode,rate_pct,base,gst,cgst,sgst,total`, newest entry first.
pub fn to_csv(ledger: &HistoryLedger) -> anyhow::Result<Option<Vec<u8>>> {
    if ledger.is_empty() {
        return Ok(None);
    }

    let mut wtr = csv::Writer::from_writer(Vec::new());
    for entry in ledger.entries() {
        wtr.serialize(HistoryRow::from(entry))?;
    }
    let bytes = wtr.into_inner()?;
    Ok(Some(bytes))
}

/// One human-readable line per entry with the `₹` glyph and 2 decimal places.
pub fn to_txt(ledger: &HistoryLedger) -> Option<String> {
    if ledger.is_empty() {
        return None;
    }

    let lines: Vec<String> = ledger
        .entries()
        .map(|entry| {
            let b = &entry.breakdown;
            format!(
                "{} | {} | Rate: {}% | Base: {} | GST: {} | CGST: {} | SGST: {} | Total: {}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.mode,
                b.rate_pct,
                format_inr(b.base),
                format_inr(b.gst),
                format_inr(b.cgst),
                format_inr(b.sgst),
                format_inr(b.total),
            )
        })
        .collect();

    Some(lines.join("\n"))
}

/// Render the ledger as a self-contained HTML document with a single table,
/// suitable for "print to PDF".
pub fn to_html(ledger: &HistoryLedger) -> Option<String> {
    if ledger.is_empty() {
        return None;
    }

    let mut body_rows = String::new();
    for entry in ledger.entries() {
        let row = HistoryRow::from(entry);
        body_rows.push_str(&format!(
            "            <tr><td>{}</td><td>{}</td><td class=\"number\">{}</td>\
<td class=\"number\">{}</td><td class=\"number\">{}</td><td class=\"number\">{}</td>\
<td class=\"number\">{}</td><td class=\"number\">{}</td></tr>\n",
            row.timestamp, row.mode, row.rate_pct, row.base, row.gst, row.cgst, row.sgst, row.total,
        ));
    }

    Some(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>GST Calculation History</title>
    <style>
{css}
    </style>
</head>
<body>
    <h1>GST Calculation History</h1>
    <table>
        <thead>
            <tr>
                <th>Timestamp</th>
                <th>Mode</th>
                <th>Rate (%)</th>
                <th>Base (₹)</th>
                <th>GST (₹)</th>
                <th>CGST (₹)</th>
                <th>SGST (₹)</th>
                <th>Total (₹)</th>
            </tr>
        </thead>
        <tbody>
{body_rows}        </tbody>
    </table>
</body>
</html>"##,
        css = CSS,
        body_rows = body_rows
    ))
}

fn format_inr(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}

const CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    color: #111827;
    margin: 2rem;
}

h1 {
    font-size: 1.25rem;
    font-weight: 600;
    margin-bottom: 1rem;
}

table {
    border-collapse: collapse;
    font-size: 0.875rem;
}

th, td {
    text-align: left;
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid #e5e7eb;
}

th {
    background: #f9fafb;
    font-weight: 500;
}

tbody tr:nth-child(even) {
    background: #f9fafb;
}

.number {
    text-align: right;
    font-variant-numeric: tabular-nums;
}
"#;
