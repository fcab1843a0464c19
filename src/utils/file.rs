//! File system operations for YAML, JSON and plain text documents

use crate::error::FileError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn io_error(path: &Path, source: std::io::Error) -> FileError {
    FileError::Io {
        path: display_path(path),
        source,
    }
}

/// Load a YAML document, optionally narrowed to a single top-level key.
///
/// `<<` merge keys are resolved before the lookup. Scalars follow YAML 1.2,
/// so `yes`/`no` stay strings.
///
/// An empty `key` returns the whole document. A non-empty key that is absent
/// (or a document that is not a mapping) fails with [`FileError::KeyNotFound`].
pub fn open_yaml<T, P>(path: P, key: &str) -> crate::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;

    let parse_error = |e: serde_yaml::Error| FileError::Parse {
        path: display_path(path),
        format: "YAML",
        message: e.to_string(),
    };

    let mut document: serde_yaml::Value = serde_yaml::from_str(&content).map_err(parse_error)?;
    document.apply_merge().map_err(parse_error)?;

    let selected = if key.is_empty() {
        document
    } else {
        document
            .get(key)
            .cloned()
            .ok_or_else(|| FileError::KeyNotFound {
                key: key.to_string(),
                path: display_path(path),
            })?
    };

    Ok(serde_yaml::from_value(selected).map_err(parse_error)?)
}

/// Load a JSON document.
///
/// A missing file is logged and reported as [`FileError::NotFound`] so the
/// caller decides whether to abort.
///
/// # Examples
/// ```no_run
/// use common_utils::utils::file::open_json;
///
/// # fn main() -> common_utils::Result<()> {
/// let config: serde_json::Value = open_json("config.json")?;
/// # Ok(())
/// # }
/// ```
pub fn open_json<T, P>(path: P) -> crate::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::error!("Error: JSON file not found at {}. Aborting.", path.display());
            return Err(FileError::NotFound {
                path: display_path(path),
            }
            .into());
        }
        Err(e) => return Err(io_error(path, e).into()),
    };

    Ok(serde_json::from_str(&content).map_err(|e| FileError::Parse {
        path: display_path(path),
        format: "JSON",
        message: e.to_string(),
    })?)
}

/// Write `data` as JSON with a 4-space indent, overwriting `path`.
///
/// Non-ASCII text is written as raw UTF-8 rather than `\uXXXX` escapes.
/// Parent directories are not created.
pub fn dump_to_json<T, P>(path: P, data: &T) -> crate::Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

    data.serialize(&mut serializer)
        .map_err(|e| FileError::Serialize {
            path: display_path(path),
            format: "JSON",
            message: e.to_string(),
        })?;

    fs::write(path, buffer).map_err(|e| io_error(path, e))?;
    Ok(())
}

/// Write UTF-8 text to `path`, creating any missing parent directories first.
pub fn dump_to_text<P: AsRef<Path>>(text: &str, path: P) -> crate::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    fs::write(path, text.as_bytes()).map_err(|e| io_error(path, e))?;
    log::info!("Text successfully written to {}", path.display());
    Ok(())
}
