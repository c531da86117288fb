//! CSV report output
//!
//! Format:
//! ```text
//! Number, Steps
//! 6,8
//! 27,111
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Report file name used when the caller does not pick one
pub const DEFAULT_OUTPUT: &str = "collatz_results.csv";

/// Header line of the report
pub const CSV_HEADER: &str = "Number, Steps";

/// Write one `<input>,<steps>` row per input, in input order
///
/// Rows stop at the shorter of the two slices.
pub fn write_csv<W: Write>(mut writer: W, inputs: &[u64], steps: &[u64]) -> Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for (n, s) in inputs.iter().zip(steps) {
        writeln!(writer, "{},{}", n, s)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the report to it
pub fn save_csv<P: AsRef<Path>>(path: P, inputs: &[u64], steps: &[u64]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), inputs, steps)
}
