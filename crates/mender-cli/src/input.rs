//! Diagnostics document loading and document URI resolution.

use std::fs;
use std::io::Read;
use std::path::Path;

use lsp_types::{Diagnostic, Uri};
use serde::Deserialize;

use crate::errors::AppError;

/// Diagnostics reported for one file, as read from the input document.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DiagnosticsDocument {
    /// Filesystem path or `file://` URI of the checked file.
    pub(crate) path: String,
    /// Diagnostics in the order the checker reported them.
    #[serde(default)]
    pub(crate) diagnostics: Vec<Diagnostic>,
}

/// Reads and parses the diagnostics document from `path`, or from `stdin`
/// when `path` is `None`.
pub(crate) fn read_document<R: Read>(
    path: Option<&Path>,
    stdin: &mut R,
) -> Result<DiagnosticsDocument, AppError> {
    let raw = match path {
        Some(file) => fs::read_to_string(file).map_err(|source| AppError::ReadInput {
            path: file.to_path_buf(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .map_err(|source| AppError::ReadInput {
                    path: Path::new("<stdin>").to_path_buf(),
                    source,
                })?;
            buffer
        }
    };

    serde_json::from_str(&raw).map_err(AppError::ParseInput)
}

/// Resolves the document path to the URI used as the registry key.
///
/// Values that already carry a URI scheme are parsed verbatim; anything else
/// is treated as a filesystem path, made absolute and `file://` encoded.
pub(crate) fn document_uri(path: &str) -> Result<Uri, AppError> {
    if path.contains("://") {
        return path
            .parse()
            .map_err(|source| AppError::invalid_path(path, format!("{source}")));
    }

    let absolute = std::path::absolute(path)
        .map_err(|source| AppError::invalid_path(path, source.to_string()))?;
    let file_url = url::Url::from_file_path(&absolute)
        .map_err(|()| AppError::invalid_path(path, "cannot be expressed as a file:// URI"))?;

    file_url
        .as_str()
        .parse()
        .map_err(|source| AppError::invalid_path(path, format!("{source}")))
}
