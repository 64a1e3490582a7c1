use super::record::{LaunchRecord, Outcome};
use crate::error::{DashError, DashResult};
use csv::StringRecord;
use std::io::Read;
use tracing::debug;

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    site: usize,
    payload: usize,
    booster: usize,
    class: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> DashResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DashError::DataLoad(format!("missing required column '{}'", name)))
        };

        Ok(Self {
            site: find(COL_SITE)?,
            payload: find(COL_PAYLOAD)?,
            booster: find(COL_BOOSTER)?,
            class: find(COL_CLASS)?,
        })
    }
}

fn field<'r>(rec: &'r StringRecord, idx: usize, name: &str, row: usize) -> DashResult<&'r str> {
    rec.get(idx)
        .map(str::trim)
        .ok_or_else(|| DashError::DataLoad(format!("row {}: missing value for '{}'", row, name)))
}

fn parse_row(rec: &StringRecord, cols: &ColumnMap, row: usize) -> DashResult<LaunchRecord> {
    let site = field(rec, cols.site, COL_SITE, row)?;

    let payload_raw = field(rec, cols.payload, COL_PAYLOAD, row)?;
    let payload: f64 = payload_raw.parse().map_err(|_| {
        DashError::DataLoad(format!(
            "row {}: '{}' is not a valid {}",
            row, payload_raw, COL_PAYLOAD
        ))
    })?;
    if !payload.is_finite() || payload < 0.0 {
        return Err(DashError::DataLoad(format!(
            "row {}: {} must be a non-negative number, got {}",
            row, COL_PAYLOAD, payload_raw
        )));
    }

    let booster = field(rec, cols.booster, COL_BOOSTER, row)?;

    let class_raw = field(rec, cols.class, COL_CLASS, row)?;
    let outcome = class_raw
        .parse::<u8>()
        .ok()
        .and_then(Outcome::from_class)
        .ok_or_else(|| {
            DashError::DataLoad(format!(
                "row {}: '{}' must be 0 or 1, got '{}'",
                row, COL_CLASS, class_raw
            ))
        })?;

    Ok(LaunchRecord::new(site, payload, booster, outcome))
}

/// Parses launch records from CSV with a header row. Columns are matched by
/// name, so their order and any extra columns are irrelevant.
pub fn load_records<R: Read>(reader: R) -> DashResult<Vec<LaunchRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let cols = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = idx + 1;
        let rec = result.map_err(|e| DashError::DataLoad(format!("row {}: {}", row, e)))?;
        records.push(parse_row(&rec, &cols, row)?);
    }

    debug!("Parsed {} launch records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn columns_are_matched_by_name() {
        let csv = "class,Booster Version Category,Payload Mass (kg),Launch Site\n1,FT,2500,KSC LC-39A\n";
        let records = load_records(Cursor::new(csv)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].site, "KSC LC-39A");
        assert_eq!(records[0].payload_mass_kg, 2500.0);
        assert_eq!(records[0].outcome, Outcome::Success);
    }

    #[test]
    fn header_whitespace_is_ignored() {
        let csv = " Launch Site , Payload Mass (kg) ,Booster Version Category, class\nVAFB SLC-4E , 9600 ,B4, 0\n";
        let records = load_records(Cursor::new(csv)).unwrap();
        assert_eq!(records[0].site, "VAFB SLC-4E");
        assert_eq!(records[0].outcome, Outcome::Failure);
    }
}
