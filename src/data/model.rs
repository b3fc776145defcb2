use std::fmt;

use crate::analysis::RowOutcome;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the uploaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the dtypes a CSV reader would infer.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Infer the most specific type for a raw CSV field.
    pub fn guess(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the upload
// ---------------------------------------------------------------------------

/// One parsed row.
#[derive(Debug, Clone)]
pub struct Record {
    /// 1-based line number in the source file.
    pub line: u64,
    /// Raw contents of the text column; a missing cell is the empty string.
    pub text: String,
    /// Every column in header order, for the table view.
    pub cells: Vec<CellValue>,
}

// ---------------------------------------------------------------------------
// Dataset – the validated upload
// ---------------------------------------------------------------------------

/// Ordered rows of a validated upload. The header always contains the text
/// column; ingestion rejects anything else.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.text.as_str())
    }
}

/// A row dropped during ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Result of a successful ingestion: the clean dataset plus what was dropped.
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub dataset: Dataset,
    pub skipped_rows: Vec<SkippedRow>,
}

// ---------------------------------------------------------------------------
// AnalysedRecord – a record after inference
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AnalysedRecord {
    pub record: Record,
    pub outcome: RowOutcome,
}
