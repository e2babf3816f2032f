use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::input::ComplexSample;

/// `<real>+<imag>j` / `<real>-<imag>j` with 6 fractional digits
impl fmt::Display for ComplexSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        write!(f, "{:.6}{}{:.6}j", self.re, sign, self.im.abs())
    }
}

/// Format one report row
pub fn format_row(index: usize, sample: &ComplexSample) -> String {
    format!("  [{:2}] = {}", index, sample)
}

/// Write a blank line, the `<path>:` header, then one row per complex pair
pub fn write_report<W: Write>(
    out: &mut W,
    path: &Path,
    samples: &[ComplexSample],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}:", path.display())?;
    for (index, sample) in samples.iter().enumerate() {
        writeln!(out, "{}", format_row(index, sample))?;
    }
    Ok(())
}

/// Warning line for a file whose length is not a whole number of words
pub fn misaligned_warning(byte_len: usize) -> String {
    format!("Warning: file length {} not a multiple of 4 bytes", byte_len)
}
