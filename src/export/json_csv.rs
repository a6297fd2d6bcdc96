// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ResultExport, intervals_to_rows};
use crate::models::CalculationResult;

/// Pretty-printed JSON document for a result.
pub fn result_to_json(result: &CalculationResult) -> AppResult<String> {
    serde_json::to_string_pretty(&ResultExport::from_result(result))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

/// CSV with a header row and one line per interval.
pub fn result_to_csv(result: &CalculationResult) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in intervals_to_rows(result) {
        wtr.serialize(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
