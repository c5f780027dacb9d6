use crate::error::{CartError, Result};

/// Marker separating the code section from the sprite/data sections.
pub const GFX_MARKER: &[u8] = b"__gfx__";

/// A cart document partitioned at the first marker occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartParts<'a> {
    /// Everything before the marker; subject to compaction.
    pub code: &'a [u8],
    /// The marker and everything after it; passed through untouched.
    pub trailer: &'a [u8],
}

/// Split a document at the first `__gfx__`. Later occurrences belong to the
/// trailer and are not split points.
pub fn split_cart(doc: &[u8]) -> Result<CartParts<'_>> {
    if doc.is_empty() {
        return Err(CartError::EmptyInput);
    }
    let at = find_marker(doc).ok_or(CartError::MissingMarker)?;
    Ok(CartParts {
        code: &doc[..at],
        trailer: &doc[at..],
    })
}

fn find_marker(doc: &[u8]) -> Option<usize> {
    doc.windows(GFX_MARKER.len()).position(|w| w == GFX_MARKER)
}
