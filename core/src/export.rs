use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::info;

use crate::{ExportError, WordPair};

/// Where [`export`] writes, relative to the current directory.
pub const DEFAULT_OUTPUT: &str = "names.json";

/// Write the compiled-in lists to [`DEFAULT_OUTPUT`] in the current
/// directory.
///
/// This is the whole tool with no input: shorthand for
/// `export(&WordPair::builtin())`.
pub fn export_builtin() -> Result<PathBuf, ExportError> {
    export(&WordPair::builtin())
}

/// Write `pair` to [`DEFAULT_OUTPUT`] in the current directory.
///
/// Returns the path written to.
pub fn export(pair: &WordPair) -> Result<PathBuf, ExportError> {
    export_to(pair, DEFAULT_OUTPUT)
}

/// Write `pair` as JSON to `path`, creating or truncating the file.
///
/// Returns the path written to.
pub fn export_to(
    pair: &WordPair,
    path: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let path = path.as_ref();
    let bytes = pair.to_json()?;
    let write_err = |io_err| ExportError::FailedToWrite(path.to_owned(), io_err);

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(&bytes).map_err(write_err)?;
    // Flush so late write errors land here
    file.sync_all().map_err(write_err)?;

    info!(
        "wrote {} left and {} right words to {}",
        pair.left().len(),
        pair.right().len(),
        path.display(),
    );
    Ok(path.to_owned())
}
