// DeviceDiag - platform/fs.rs
//
// Report file output.

use crate::util::constants::REPORT_FILE_EXTENSION;
use crate::util::error::SaveError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Give a save destination the report extension when it has none.
///
/// Native save dialogs return the name exactly as typed, so `report`
/// becomes `report.txt`. A name with any extension is kept as chosen.
pub fn with_report_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(REPORT_FILE_EXTENSION)
    }
}

/// Write `report` to `path` as raw bytes, creating or truncating the file.
///
/// The bytes are exactly the displayed text: UTF-8, no BOM, no line-ending
/// translation, no header.
pub fn write_report(path: &Path, report: &str) -> Result<usize, SaveError> {
    let io_err = |source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = std::fs::File::create(path).map_err(io_err)?;
    file.write_all(report.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), bytes = report.len(), "Report saved");
    Ok(report.len())
}
