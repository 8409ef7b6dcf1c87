// Output table and its CSV serialization

use crate::error::{GeotagError, Result};
use crate::resolve::Resolution;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADER: [&str; 5] = ["", "location", "latitude", "longitude", "source_file"];

#[derive(Debug, Clone, PartialEq)]
pub struct GeoRow {
    pub location: String,
    pub resolution: Resolution,
    pub source_file: String,
}

impl GeoRow {
    pub fn new(location: impl Into<String>, resolution: Resolution, source_file: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            resolution,
            source_file: source_file.into(),
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.resolution.coordinate().map(|c| c.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.resolution.coordinate().map(|c| c.longitude)
    }
}

/// Counts of each resolution outcome in a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
    pub found: usize,
    pub no_coordinates: usize,
    pub no_page: usize,
}

impl TableSummary {
    pub fn total(&self) -> usize {
        self.found + self.no_coordinates + self.no_page
    }
}

/// Geotag results in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoTable {
    rows: Vec<GeoRow>,
}

impl GeoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: GeoRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[GeoRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> TableSummary {
        let mut summary = TableSummary::default();
        for row in &self.rows {
            match row.resolution {
                Resolution::Found(_) => summary.found += 1,
                Resolution::NoCoordinates => summary.no_coordinates += 1,
                Resolution::NoPage => summary.no_page += 1,
            }
        }
        summary
    }

    /// Serialize as CSV: a leading row-index column, then location, latitude,
    /// longitude and source file. Unresolved rows carry the -100000 (no
    /// coordinates) or -200000 (no page) markers in both coordinate cells.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(CSV_HEADER)?;

        for (index, row) in self.rows.iter().enumerate() {
            let (latitude, longitude) = row.resolution.sentinel_pair();
            let latitude = format_degrees(latitude);
            let longitude = format_degrees(longitude);
            csv_writer.write_record([
                index.to_string().as_str(),
                row.location.as_str(),
                latitude.as_str(),
                longitude.as_str(),
                row.source_file.as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| GeotagError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to(file)
    }
}

/// Degrees always carry a decimal point so integral values read back as floats
fn format_degrees(value: f64) -> String {
    let formatted = value.to_string();
    if formatted.contains('.') || !value.is_finite() {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}
