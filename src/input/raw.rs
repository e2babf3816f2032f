use std::path::Path;

use crate::error::DumpError;

const WORD_BYTES: usize = 4;

/// Contents of one raw float32 dump file
#[derive(Debug, Clone)]
pub struct RawDump {
    /// Byte length of the file as read
    pub byte_len: usize,
    /// Little-endian float32 values, one per complete 4-byte word
    pub values: Vec<f32>,
}

impl RawDump {
    /// Whether the file length was a whole number of float32 words
    pub fn is_aligned(&self) -> bool {
        self.byte_len % WORD_BYTES == 0
    }
}

/// Decode little-endian float32 words from offset 0.
/// A trailing partial word is skipped.
pub fn decode_f32_le(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Read a whole raw float32 dump file into memory and decode it
pub fn read_raw_f32<P: AsRef<Path>>(path: P) -> Result<RawDump, DumpError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| DumpError::from_io(path, e))?;

    log::debug!("{}: read {} bytes", path.display(), bytes.len());

    Ok(RawDump {
        byte_len: bytes.len(),
        values: decode_f32_le(&bytes),
    })
}
