use std::path::Path;

use crate::error::AnalysisError;

use super::model::{CellValue, Dataset, IngestOutcome, Record, SkippedRow};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Column that must be present and holds the text to classify.
    pub text_column: String,
    /// Drop malformed rows (and report them) instead of failing the upload.
    pub skip_malformed_rows: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            text_column: "text".to_string(),
            skip_malformed_rows: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and ingest a CSV file picked by the user.
pub fn load_file(path: &Path, options: &IngestOptions) -> Result<IngestOutcome, AnalysisError> {
    let bytes = std::fs::read(path)?;
    ingest_csv(&bytes, options)
}

/// Parse uploaded CSV bytes into a validated [`Dataset`].
///
/// * The whole input must be UTF-8 with balanced quotes, otherwise
///   [`AnalysisError::Parse`].
/// * The header must contain `options.text_column`, otherwise
///   [`AnalysisError::Validation`] before any row is read.
/// * The text column is kept verbatim; other columns are type-guessed for
///   display.
/// * A row with more fields than the header is malformed unless every extra
///   field is empty (a trailing comma). Rows with fewer fields are padded
///   with [`CellValue::Null`].
pub fn ingest_csv(bytes: &[u8], options: &IngestOptions) -> Result<IngestOutcome, AnalysisError> {
    let text = std::str::from_utf8(bytes).map_err(AnalysisError::parse)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if let Some(line) = unterminated_quote_line(text) {
        return Err(AnalysisError::Parse(format!(
            "line {line}: EOF inside string starting here"
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(AnalysisError::parse)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(AnalysisError::Parse("No columns to parse from file".into()));
    }

    let text_idx = headers
        .iter()
        .position(|h| *h == options.text_column)
        .ok_or_else(|| AnalysisError::Validation {
            column: options.text_column.clone(),
        })?;

    let mut records = Vec::new();
    let mut skipped_rows = Vec::new();

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                skip_or_fail(options, &mut skipped_rows, line, e.to_string())?;
                continue;
            }
        };
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() > headers.len() && row.iter().skip(headers.len()).any(|f| !f.is_empty()) {
            let reason = format!("expected {} fields, saw {}", headers.len(), row.len());
            skip_or_fail(options, &mut skipped_rows, line, reason)?;
            continue;
        }

        let text = row.get(text_idx).unwrap_or("").to_string();
        let cells: Vec<CellValue> = (0..headers.len())
            .map(|i| match row.get(i) {
                Some(field) if i == text_idx && !field.is_empty() => {
                    CellValue::String(field.to_string())
                }
                Some(field) => CellValue::guess(field),
                None => CellValue::Null,
            })
            .collect();

        records.push(Record { line, text, cells });
    }

    if !skipped_rows.is_empty() {
        log::info!("Skipped {} malformed CSV row(s)", skipped_rows.len());
    }

    Ok(IngestOutcome {
        dataset: Dataset { headers, records },
        skipped_rows,
    })
}

/// Line on which a quoted field opens without ever closing. Escaped quotes
/// (`""`) come in pairs, so only an odd total leaves the reader in a quote.
fn unterminated_quote_line(text: &str) -> Option<u64> {
    let mut line = 1u64;
    let mut open_at = None;
    for c in text.chars() {
        match c {
            '"' if open_at.is_some() => open_at = None,
            '"' => open_at = Some(line),
            '\n' => line += 1,
            _ => {}
        }
    }
    open_at
}

fn skip_or_fail(
    options: &IngestOptions,
    skipped: &mut Vec<SkippedRow>,
    line: u64,
    reason: String,
) -> Result<(), AnalysisError> {
    if !options.skip_malformed_rows {
        return Err(AnalysisError::Parse(format!("line {line}: {reason}")));
    }
    log::debug!("Skipping CSV line {line}: {reason}");
    skipped.push(SkippedRow { line, reason });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingest(input: &str) -> Result<IngestOutcome, AnalysisError> {
        ingest_csv(input.as_bytes(), &IngestOptions::default())
    }

    #[test]
    fn keeps_blank_row_with_trailing_comma() {
        let out = ingest("text\n\"great product\"\n\"\",\n\"terrible\"\n").unwrap();
        let texts: Vec<&str> = out.dataset.texts().collect();
        assert_eq!(texts, ["great product", "", "terrible"]);
        assert!(out.skipped_rows.is_empty());
    }

    #[test]
    fn missing_text_column_is_a_validation_error() {
        let err = ingest("comment\nnice\n").unwrap_err();
        assert!(matches!(err, AnalysisError::Validation { ref column } if column == "text"));
    }

    #[test]
    fn malformed_rows_are_skipped_and_reported() {
        let out = ingest("text,score\nok,1\nbad,2,extra\nfine,3\n").unwrap();
        assert_eq!(out.dataset.len(), 2);
        assert_eq!(out.skipped_rows.len(), 1);
        assert_eq!(out.skipped_rows[0].line, 3);
    }

    #[test]
    fn malformed_rows_fail_when_skipping_is_disabled() {
        let options = IngestOptions {
            skip_malformed_rows: false,
            ..IngestOptions::default()
        };
        let err = ingest_csv(b"text\nok\nbad,extra\n", &options).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(ref msg) if msg.contains("line 3")));
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = ingest_csv(b"text\n\xff\xfe bad\n", &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[test]
    fn unterminated_quote_is_a_parse_error() {
        let err = ingest("text\n\"abc\nfoo\n").unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(ref msg) if msg.contains("line 2")));

        let err = ingest("text,id\nok,1\n\"say \"\"hi\"\"\",2\n\"open,3\n").unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(ref msg) if msg.contains("line 4")));
    }

    #[test]
    fn escaped_quotes_are_balanced() {
        let out = ingest("text\n\"she said \"\"great\"\"\"\n\"multi\nline\"\n").unwrap();
        let texts: Vec<&str> = out.dataset.texts().collect();
        assert_eq!(texts, ["she said \"great\"", "multi\nline"]);
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert!(matches!(ingest(""), Err(AnalysisError::Parse(_))));
    }

    #[test]
    fn short_rows_are_padded() {
        let out = ingest("id,text\n1\n2,hello\n").unwrap();
        assert_eq!(out.dataset.len(), 2);
        assert_eq!(out.dataset.records[0].text, "");
        assert_eq!(out.dataset.records[0].cells[1], CellValue::Null);
    }

    #[test]
    fn non_text_values_are_kept_verbatim() {
        let out = ingest("text,id\n007,7\n").unwrap();
        let rec = &out.dataset.records[0];
        assert_eq!(rec.text, "007");
        assert_eq!(
            rec.cells,
            vec![CellValue::String("007".into()), CellValue::Integer(7)]
        );
        assert_eq!(out.dataset.headers, ["text", "id"]);
    }

    #[test]
    fn custom_text_column_and_bom() {
        let options = IngestOptions {
            text_column: "ulasan".into(),
            ..IngestOptions::default()
        };
        let out = ingest_csv("\u{feff}ulasan\nbagus\n".as_bytes(), &options).unwrap();
        assert_eq!(out.dataset.records[0].text, "bagus");
    }

    #[test]
    fn load_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.csv");
        std::fs::write(&path, "text\nhello\n").unwrap();
        let out = load_file(&path, &IngestOptions::default()).unwrap();
        assert_eq!(out.dataset.len(), 1);

        let err = load_file(&dir.path().join("nope.csv"), &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
