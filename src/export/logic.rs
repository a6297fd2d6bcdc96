// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{result_to_csv, result_to_json};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::CalculationResult;
use crate::ui::messages::info;
use crate::ui::render::render_result;
use crate::utils::path::expand_tilde;
use std::fs;

/// Output options shared by every format.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: ExportFormat,
    /// Destination file; stdout when `None`.
    pub file: Option<String>,
    pub force: bool,
    pub color: bool,
    pub separator: String,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Renders `result` in the requested format and writes it to the file
    /// or stdout.
    pub fn export(result: &CalculationResult, opts: &OutputOptions) -> AppResult<()> {
        let Some(file) = &opts.file else {
            print!("{}", Self::render(result, opts.format, opts.color, &opts.separator)?);
            return Ok(());
        };

        let path = expand_tilde(file);
        ensure_writable(&path, opts.force)?;

        info(format!(
            "Exporting to {}: {}",
            opts.format.as_str().to_uppercase(),
            path.display()
        ));

        // files never carry escape codes
        let content = Self::render(result, opts.format, false, &opts.separator)?;
        fs::write(&path, content)?;

        notify_export_success(&opts.format.as_str().to_uppercase(), &path);
        Ok(())
    }

    pub fn render(
        result: &CalculationResult,
        format: ExportFormat,
        color: bool,
        separator: &str,
    ) -> AppResult<String> {
        match format {
            ExportFormat::Text => Ok(render_result(result, color, separator)),
            ExportFormat::Json => Ok(format!("{}\n", result_to_json(result)?)),
            ExportFormat::Csv => result_to_csv(result),
        }
    }
}
