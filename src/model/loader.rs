//! Load projection requests and catalogue files
//!
//! Requests (minus conditions, which are code) are stored as JSON;
//! income/expense/scheduled catalogues can also be loaded from CSV with
//! columns: Name, Amount, Kind, Date, Taxable, OneOff.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use csv::Reader;

use super::entry::{AmountKind, LedgerEntry};
use super::request::ProjectionRequest;

/// Raw CSV row for a catalogue entry
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Kind")]
    kind: String,
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Taxable", default)]
    taxable: bool,
    #[serde(rename = "OneOff", default)]
    one_off: bool,
}

impl CsvRow {
    fn to_entry(self) -> Result<LedgerEntry, Box<dyn Error>> {
        let kind = match self.kind.as_str() {
            "Absolute" => AmountKind::Absolute,
            "SalaryRatio" => AmountKind::SalaryRatio,
            other => return Err(format!("Unknown Kind: {}", other).into()),
        };

        Ok(LedgerEntry {
            name: self.name,
            amount: self.amount,
            kind,
            posted_at: self.date,
            taxable: self.taxable,
            one_off: self.one_off,
        })
    }
}

/// Load a projection request from a JSON file
///
/// Conditions cannot be expressed in data and come back empty; attach them
/// in code after loading.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<ProjectionRequest, Box<dyn Error>> {
    let file = File::open(path)?;
    let request = serde_json::from_reader(BufReader::new(file))?;
    Ok(request)
}

/// Load catalogue entries from a CSV file
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<LedgerEntry>, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    collect_entries(reader)
}

/// Load catalogue entries from any reader (e.g. string buffer)
pub fn load_entries_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<LedgerEntry>, Box<dyn Error>> {
    collect_entries(Reader::from_reader(reader))
}

fn collect_entries<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<LedgerEntry>, Box<dyn Error>> {
    let mut entries = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        entries.push(row.to_entry()?);
    }

    Ok(entries)
}
