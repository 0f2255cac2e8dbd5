use thiserror::Error;
use tracing::warn;

use crate::core::types::{DiseaseDescription, DiseaseRecord, SYMPTOM_COLUMNS};
use crate::utils::validation::{check_row_limit, MAX_DATASET_ROWS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Too many rows: {0} exceeds maximum allowed ({max})", max = MAX_DATASET_ROWS)]
    TooManyRows(usize),
}

/// Disease column plus the symptom columns
const DISEASE_TABLE_WIDTH: usize = 1 + SYMPTOM_COLUMNS;

/// Disease column plus the description column
const DESCRIPTION_TABLE_WIDTH: usize = 2;

/// Parse the disease table: `Disease,Symptom_1,...,Symptom_17`
///
/// The first line is always treated as a header and dropped. Blank lines are
/// skipped. Rows with fewer columns than expected are padded with empty
/// strings; extra columns are ignored. Fields are not unquoted, so an embedded
/// comma always starts a new column.
///
/// # Errors
///
/// Returns `ParseError::TooManyRows` if the table exceeds the row limit.
pub fn parse_disease_text(text: &str) -> Result<Vec<DiseaseRecord>, ParseError> {
    let mut records = Vec::new();

    for (line_num, columns) in data_rows(text, DISEASE_TABLE_WIDTH) {
        if check_row_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRows(records.len()));
        }

        let mut columns = columns.into_iter();
        let disease = columns.next().unwrap_or_default();
        if disease.is_empty() {
            warn!(line = line_num, "Disease row has an empty disease name");
        }

        records.push(DiseaseRecord::new(disease, columns.collect::<Vec<_>>()));
    }

    Ok(records)
}

/// Parse the description table: `Disease,Description`
///
/// Same row rules as [`parse_disease_text`]. A description containing a comma
/// is cut at the first comma.
///
/// # Errors
///
/// Returns `ParseError::TooManyRows` if the table exceeds the row limit.
pub fn parse_description_text(text: &str) -> Result<Vec<DiseaseDescription>, ParseError> {
    let mut descriptions = Vec::new();

    for (_, columns) in data_rows(text, DESCRIPTION_TABLE_WIDTH) {
        if check_row_limit(descriptions.len()).is_some() {
            return Err(ParseError::TooManyRows(descriptions.len()));
        }

        let [disease, description]: [String; 2] = columns
            .try_into()
            .unwrap_or_else(|_| [String::new(), String::new()]);
        descriptions.push(DiseaseDescription::new(disease, description));
    }

    Ok(descriptions)
}

/// Iterate over data rows as `(1-based line number, trimmed columns)`.
///
/// Every yielded row has exactly `width` columns.
fn data_rows(text: &str, width: usize) -> impl Iterator<Item = (usize, Vec<String>)> + '_ {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(move |(i, line)| {
            let line_num = i + 1;
            let mut columns: Vec<String> = line
                .split(',')
                .take(width)
                .map(|c| c.trim().to_string())
                .collect();

            if columns.len() < width {
                warn!(
                    line = line_num,
                    found = columns.len(),
                    expected = width,
                    "Short row, missing columns treated as empty"
                );
                columns.resize(width, String::new());
            }

            (line_num, columns)
        })
}
