use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::DumpError;
use crate::input::pair_up;
use crate::input::raw::read_raw_f32;
use crate::output::{misaligned_warning, write_report};

/// Outcome of a run over all requested paths
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DumpSummary {
    pub dumped: usize,
    pub failed: usize,
}

impl DumpSummary {
    pub fn any_failed(&self) -> bool {
        self.failed > 0
    }
}

/// Dump one file to `out`
pub fn dump_file<W: Write>(out: &mut W, path: &Path) -> Result<(), DumpError> {
    let dump = read_raw_f32(path)?;

    if !dump.is_aligned() {
        log::warn!(
            "{}: {} bytes is not a whole number of float32 words",
            path.display(),
            dump.byte_len
        );
        writeln!(out, "{}", misaligned_warning(dump.byte_len))?;
    }

    if dump.values.len() % 2 != 0 {
        log::debug!(
            "{}: odd value count {}, last value unpaired",
            path.display(),
            dump.values.len()
        );
    }

    let samples = pair_up(&dump.values);
    log::debug!("{}: {} complex samples", path.display(), samples.len());
    write_report(out, path, &samples)?;
    Ok(())
}

/// Dump every path in order. A file that cannot be read is reported inline
/// and never stops the files after it; only a failed write to `out` does.
pub fn dump_files<W: Write>(out: &mut W, paths: &[PathBuf]) -> Result<DumpSummary, DumpError> {
    let mut summary = DumpSummary::default();

    for path in paths {
        match dump_file(out, path) {
            Ok(()) => summary.dumped += 1,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                log::warn!("{}", e);
                writeln!(out, "{}", e)?;
                summary.failed += 1;
            }
        }
    }

    log::info!("Dumped {} file(s), {} failed", summary.dumped, summary.failed);
    Ok(summary)
}
