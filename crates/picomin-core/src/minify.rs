// crates/picomin-core/src/minify.rs

use crate::cart::split::split_cart;
use crate::compact::compact_code;
use crate::error::Result;

/// Minify a whole cart: compact the code section, keep the trailer
/// byte-for-byte.
pub fn minify_cart(doc: &[u8]) -> Result<Vec<u8>> {
    let parts = split_cart(doc)?;
    let mut out = compact_code(parts.code);
    out.extend_from_slice(parts.trailer);
    Ok(out)
}
