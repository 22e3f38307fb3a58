//! Raw payload decoding shared by the dataset and palette loaders.
//!
//! Data files may be served either as plain JSON or gzip-compressed
//! (`*.json.gz`). Compression is detected from the gzip magic bytes rather
//! than the file name, so a server that strips the extension still works.

use flate2::read::GzDecoder;
use std::borrow::Cow;
use std::io::Read;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Returns true if `bytes` starts with the gzip magic number.
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[..2] == GZIP_MAGIC
}

/// Decompress `bytes` if gzipped, otherwise borrow them unchanged.
pub fn decode(bytes: &[u8]) -> anyhow::Result<Cow<'_, [u8]>> {
    if !is_gzip(bytes) {
        return Ok(Cow::Borrowed(bytes));
    }
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::with_capacity(bytes.len() * 4);
    decoder.read_to_end(&mut out)?;
    log::debug!(
        "[BEX] payload: inflated {} bytes to {} bytes",
        bytes.len(),
        out.len()
    );
    Ok(Cow::Owned(out))
}
