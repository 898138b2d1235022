// File: crates/scatter-core/src/dataset.rs
// Summary: Dataset model and CSV ingestion with strict numeric validation.

use std::path::Path;

use crate::error::ChartError;

/// One row of the source table. Immutable after ingestion.
#[derive(Clone, Debug, PartialEq)]
pub struct DataRecord {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub obesity: f64,
    pub smokes: f64,
    pub healthcare: f64,
}

/// Ordered record collection, loaded once per chart construction.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<DataRecord>,
}

/// Required header columns, in canonical order.
pub const COLUMNS: [&str; 8] = [
    "state", "abbr", "poverty", "age", "income", "obesity", "smokes", "healthcare",
];

const MEASURE_COLUMNS: [&str; 6] = ["poverty", "age", "income", "obesity", "smokes", "healthcare"];

impl Dataset {
    pub fn from_records(records: Vec<DataRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DataRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min/max of one measure across all records, or None when empty.
    pub fn min_max(&self, value_of: impl Fn(&DataRecord) -> f64) -> Option<(f64, f64)> {
        let mut min_v = f64::INFINITY;
        let mut max_v = f64::NEG_INFINITY;
        for r in &self.records {
            let v = value_of(r);
            min_v = min_v.min(v);
            max_v = max_v.max(v);
        }
        if min_v.is_finite() && max_v.is_finite() {
            Some((min_v, max_v))
        } else {
            None
        }
    }

    /// Load a headered CSV with the eight canonical columns.
    ///
    /// Header matching is case-insensitive and order-independent. Measure
    /// fields must parse as finite numbers; a malformed field fails the whole
    /// load with the offending row and column named. An empty file is an
    /// error too, since scale bounds need at least one record.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| ChartError::DatasetRead { path: path_str.clone(), source: e })?;

        let headers = rdr
            .headers()
            .map_err(|e| ChartError::DatasetRead { path: path_str.clone(), source: e })?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();

        let idx = |name: &'static str| -> Result<usize, ChartError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(ChartError::MissingColumn { path: path_str.clone(), column: name })
        };

        let i_state = idx("state")?;
        let i_abbr = idx("abbr")?;
        let mut i_measure = [0usize; 6];
        for (slot, name) in i_measure.iter_mut().zip(MEASURE_COLUMNS) {
            *slot = idx(name)?;
        }

        let mut records = Vec::new();
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec.map_err(|e| ChartError::DatasetRead { path: path_str.clone(), source: e })?;

            let field = |i: usize| rec.get(i).unwrap_or("").to_string();
            let mut measures = [0f64; 6];
            for (k, &col) in i_measure.iter().enumerate() {
                let raw = rec.get(col).unwrap_or("");
                let parsed = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
                measures[k] = parsed.ok_or_else(|| ChartError::MalformedField {
                    row: row + 1,
                    column: MEASURE_COLUMNS[k],
                    value: raw.to_string(),
                })?;
            }

            records.push(DataRecord {
                state: field(i_state),
                abbr: field(i_abbr),
                poverty: measures[0],
                age: measures[1],
                income: measures[2],
                obesity: measures[3],
                smokes: measures[4],
                healthcare: measures[5],
            });
        }

        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        Ok(Self { records })
    }
}
