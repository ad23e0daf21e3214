#![doc = include_str!("../README.md")]

mod errors;
mod export;
mod word_pair;

use std::{fs, path::Path, sync::LazyLock};

pub use errors::ExportError;
pub use export::{DEFAULT_OUTPUT, export, export_builtin, export_to};
pub use word_pair::WordPair;

fn newline_delimited_words(input: impl AsRef<str>) -> Vec<String> {
    input
        .as_ref()
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// Load a word list from a file.
///
/// The file is expected to contain one entry per line. Entries are trimmed,
/// may contain inner spaces, and blank lines are skipped.
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, ExportError> {
    let path = path.as_ref();
    let file_content = fs::read_to_string(path)
        .map_err(|io_err| ExportError::FailedToRead(path.to_owned(), io_err))?;
    let words = newline_delimited_words(file_content);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

macro_rules! builtin_wordlist {
    (ident: $ident:ident, path: $path:literal $(,)?) => {
        /// The built-in
        #[doc = ::std::stringify!($ident)]
        /// word list.
        ///
        /// Compiled into the binary, split into words on first access.
        pub static $ident: LazyLock<Vec<String>> = LazyLock::new(|| {
            let words = newline_delimited_words(include_str!($path));
            ::log::debug!(
                "loaded {} words for {}",
                words.len(),
                ::std::stringify!($ident),
            );
            words
        });
    };
}

builtin_wordlist! {
    ident: LEFT,
    path: "../data/left.txt",
}
builtin_wordlist! {
    ident: RIGHT,
    path: "../data/right.txt",
}
