//! Filename-as-schema parser for result files.
//!
//! The configuration identity is carried entirely by the filename; file
//! content holds only raw samples. The grammar is
//! `<program:word>-<size:digits>-Hilos-<threads:digits>.dat`, anchored at
//! both ends. `Hilos` is the literal marker the measurement scripts emit
//! between the size and the thread count.

use crate::record::ConfigurationKey;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RESULT_FILENAME: Regex =
        Regex::new(r"^(\w+)-(\d+)-Hilos-(\d+)\.dat$").unwrap();
}

/// Parse a directory entry name into a [`ConfigurationKey`].
///
/// `None` is the skip signal: names that do not match the grammar are not
/// errors, since unrelated files may coexist in the results directory. A
/// numeric field that overflows `u32`, or a thread count of zero, is
/// likewise a skip.
///
/// # Examples
///
/// ```
/// use scaling_core::ingest::parse_result_filename;
///
/// let key = parse_result_filename("mmClasicaOpenMP-800-Hilos-4.dat").unwrap();
/// assert_eq!(key.program, "mmClasicaOpenMP");
/// assert_eq!(key.size, 800);
/// assert_eq!(key.threads, 4);
///
/// assert!(parse_result_filename("notes.txt").is_none());
/// ```
pub fn parse_result_filename(name: &str) -> Option<ConfigurationKey> {
    let caps = RESULT_FILENAME.captures(name)?;

    let program = caps[1].to_string();
    let size: u32 = caps[2].parse().ok()?;
    let threads: u32 = caps[3].parse().ok()?;
    if threads == 0 {
        return None;
    }

    Some(ConfigurationKey {
        program,
        size,
        threads,
    })
}
