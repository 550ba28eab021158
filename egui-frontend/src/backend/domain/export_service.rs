//! Export orchestration for the cash drawer counter.
//!
//! ## Responsibilities:
//! - Serialize the current drawer state to CSV (every field quoted)
//! - Write a printable HTML report and hand it to the system handler,
//!   which is where PDF generation happens (the user prints from there)
//! - Resolve the output directory (Documents, then home, then cwd)
//!
//! The UI only handles presentation; everything here is plain file I/O.

use anyhow::{Context, Result};
use chrono::Local;
use csv::{QuoteStyle, WriterBuilder};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use shared::ExportResponse;

use super::ledger_service::{format_count, format_currency, DrawerTotals};

/// Column headers of the denomination section of the CSV.
const CSV_HEADER: [&str; 3] = ["Denomination", "Count", "Value"];

pub struct ExportService {
    output_dir: PathBuf,
}

impl ExportService {
    pub fn new() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }

    /// Point exports at a specific directory instead of Documents.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write the CSV export file and report where it landed.
    pub fn export_csv(&self, totals: &DrawerTotals) -> Result<ExportResponse> {
        let path = self.output_path(&csv_filename());
        info!("Exporting drawer count as CSV to {}", path.display());

        let content = build_csv(totals)?;
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("creating export directory {}", self.output_dir.display()))?;
        fs::write(&path, content)
            .with_context(|| format!("writing CSV export to {}", path.display()))?;

        Ok(ExportResponse {
            success: true,
            file_path: path.display().to_string(),
            message: format!("Exported drawer count to {}", path.display()),
        })
    }

    /// Write the printable report and open it with the platform's default
    /// handler; printing (or saving as PDF) happens there.
    pub fn export_print_report(&self, totals: &DrawerTotals) -> Result<ExportResponse> {
        let path = self.write_print_report(totals)?;
        if let Err(e) = open::that(&path) {
            // The report still exists on disk, so keep the export a success.
            warn!("Could not open print report {}: {}", path.display(), e);
        }
        Ok(ExportResponse {
            success: true,
            file_path: path.display().to_string(),
            message: format!("Print report ready at {}", path.display()),
        })
    }

    /// File-writing half of the print path, split out so it can be tested
    /// without launching an external viewer.
    pub fn write_print_report(&self, totals: &DrawerTotals) -> Result<PathBuf> {
        let path = self.output_path(&report_filename());
        info!("Writing print report to {}", path.display());

        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("creating export directory {}", self.output_dir.display()))?;
        fs::write(&path, build_print_report(totals))
            .with_context(|| format!("writing print report to {}", path.display()))?;
        Ok(path)
    }

    fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

/// `cash_drawer_count_YYYY-MM-DD.csv`, dated with the local calendar day.
pub fn csv_filename() -> String {
    format!("cash_drawer_count_{}.csv", Local::now().format("%Y-%m-%d"))
}

fn report_filename() -> String {
    format!("cash_drawer_count_{}.html", Local::now().format("%Y-%m-%d"))
}

/// Build the CSV text: header, one row per denomination, a blank separator
/// row, then the summary rows. Every field is double-quoted.
pub fn build_csv(totals: &DrawerTotals) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for row in &totals.rows {
        writer.write_record([
            row.label,
            format_count(row.count).as_str(),
            format_currency(row.extended).as_str(),
        ])?;
    }
    writer.write_record(["", "", ""])?;

    let summary: [(&str, String); 6] = [
        ("Total in drawer", format_currency(totals.total)),
        ("Expected amount", format_currency(totals.expected)),
        ("Variance", format_currency(totals.variance)),
        ("Cash Taken", format_currency(totals.cash_taken)),
        ("New Drawer", format_currency(totals.new_drawer)),
        ("Date", Local::now().format("%Y-%m-%d").to_string()),
    ];
    for (label, value) in summary {
        writer.write_record([label, "", value.as_str()])?;
    }

    let bytes = writer.into_inner().context("flushing CSV writer")?;
    String::from_utf8(bytes).context("CSV export was not valid UTF-8")
}

/// Plain single-table HTML, styled just enough to print cleanly. Layout and
/// pagination stay with the viewer that opens it.
pub fn build_print_report(totals: &DrawerTotals) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Cash Drawer Count</title>\n<style>\n");
    html.push_str("body { font-family: sans-serif; margin: 2em; }\n");
    html.push_str("table { border-collapse: collapse; }\n");
    html.push_str("td, th { border: 1px solid #999; padding: 4px 12px; text-align: left; }\n");
    html.push_str("</style>\n</head>\n<body>\n<h1>Cash Drawer Count</h1>\n<table>\n");
    html.push_str("<tr><th>Denomination</th><th>Count</th><th>Value</th></tr>\n");

    for row in &totals.rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.label,
            format_count(row.count),
            format_currency(row.extended)
        ));
    }

    let summary = [
        ("Total in drawer", format_currency(totals.total)),
        ("Expected amount", format_currency(totals.expected)),
        ("Variance", format_currency(totals.variance)),
        ("Cash Taken", format_currency(totals.cash_taken)),
        ("New Drawer", format_currency(totals.new_drawer)),
        ("Date", Local::now().format("%Y-%m-%d").to_string()),
    ];
    for (label, value) in summary {
        html.push_str(&format!(
            "<tr><th>{}</th><td colspan=\"2\">{}</td></tr>\n",
            label, value
        ));
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn default_output_dir() -> PathBuf {
    if let Some(user_dirs) = directories::UserDirs::new() {
        if let Some(documents) = user_dirs.document_dir() {
            return documents.to_path_buf();
        }
        return user_dirs.home_dir().to_path_buf();
    }
    Path::new(".").to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::ledger_service::{DrawerForm, LedgerService};
    use csv::ReaderBuilder;

    fn sample_totals() -> DrawerTotals {
        let mut form = DrawerForm::new();
        form.counts[0] = "10".to_string(); // Pennies
        form.counts[1] = "4".to_string(); // Nickels
        form.expected_amount = "0.50".to_string();
        form.cash_taken = "25".to_string();
        form.new_drawer = "250".to_string();
        LedgerService::new().compute(&form)
    }

    #[test]
    fn csv_round_trips_the_visible_table() -> Result<()> {
        let totals = sample_totals();
        let content = build_csv(&totals)?;

        let mut reader = ReaderBuilder::new().from_reader(content.as_bytes());
        assert_eq!(reader.headers()?.clone(), vec!["Denomination", "Count", "Value"]);

        let records: Vec<csv::StringRecord> =
            reader.records().collect::<std::result::Result<_, _>>()?;
        // 10 denominations + blank separator + 6 summary rows
        assert_eq!(records.len(), 17);

        assert_eq!(records[0], vec!["Pennies", "10", "$0.10"]);
        assert_eq!(records[1], vec!["Nickels", "4", "$0.20"]);
        assert_eq!(records[2], vec!["Dimes", "0", "$0.00"]);
        assert_eq!(records[10], vec!["", "", ""]);
        assert_eq!(records[11], vec!["Total in drawer", "", "$0.30"]);
        assert_eq!(records[12], vec!["Expected amount", "", "$0.50"]);
        assert_eq!(records[13], vec!["Variance", "", "$-0.20"]);
        assert_eq!(records[14], vec!["Cash Taken", "", "$25.00"]);
        assert_eq!(records[15], vec!["New Drawer", "", "$250.00"]);
        assert_eq!(records[16].get(0), Some("Date"));
        Ok(())
    }

    #[test]
    fn every_csv_field_is_quoted() -> Result<()> {
        let content = build_csv(&sample_totals())?;
        for line in content.lines() {
            assert!(line.starts_with('"') && line.ends_with('"'), "line: {line}");
        }
        Ok(())
    }

    #[test]
    fn export_writes_file_with_dated_name() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let service = ExportService::with_output_dir(dir.path());

        let response = service.export_csv(&sample_totals())?;
        assert!(response.success);

        let path = PathBuf::from(&response.file_path);
        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("cash_drawer_count_"), "name: {name}");
        assert!(name.ends_with(".csv"));
        Ok(())
    }

    #[test]
    fn print_report_shows_the_same_figures() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let service = ExportService::with_output_dir(dir.path());

        let path = service.write_print_report(&sample_totals())?;
        let html = fs::read_to_string(path)?;
        assert!(html.contains("<td>Pennies</td><td>10</td><td>$0.10</td>"));
        assert!(html.contains("<th>Total in drawer</th><td colspan=\"2\">$0.30</td>"));
        assert!(html.contains("<th>Variance</th><td colspan=\"2\">$-0.20</td>"));
        Ok(())
    }
}
