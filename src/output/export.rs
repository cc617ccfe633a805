use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::EXPORT_SUFFIX;
use crate::error::AppError;
use crate::session::Syllabus;

/// Download file name: spaces and slashes become underscores
pub(crate) fn export_file_name(subject: &str) -> String {
    format!("{}{EXPORT_SUFFIX}", subject.replace([' ', '/'], "_"))
}

/// Explicit path wins; otherwise the derived name inside `output_dir`
/// (current directory when unset).
pub(crate) fn export_path(explicit: Option<&Path>, output_dir: Option<&Path>, subject: &str) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => output_dir
            .unwrap_or_else(|| Path::new("."))
            .join(export_file_name(subject)),
    }
}

/// Write the syllabus text unchanged as a plain-text file
pub(crate) fn write_export(path: &Path, syllabus: &Syllabus) -> Result<(), AppError> {
    let to_err = |source| AppError::Export {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_err)?;
    }
    fs::write(path, syllabus.content.as_bytes()).map_err(to_err)
}
