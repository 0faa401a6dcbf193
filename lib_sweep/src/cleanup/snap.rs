use crate::raster::{Bgr, BufferError, PixelBuffer};
use log::debug;

pub const MAX_PALETTE_COLORS: usize = 256;

/// Transient palette built during a single snap pass. Entries keep their
/// insertion order; matching is first-fit, so earlier entries win over
/// closer ones inserted later.
struct LocalPalette {
    entries: Vec<Bgr>,
}

impl LocalPalette {
    fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_PALETTE_COLORS),
        }
    }

    /// First entry strictly closer than `threshold`, in insertion order.
    fn first_match(&self, color: Bgr, threshold: f64) -> Option<Bgr> {
        self.entries
            .iter()
            .copied()
            .find(|entry| entry.distance(color) < threshold)
    }

    /// Appends a new representative unless the palette is already full.
    /// Overflowing the cap is silent; the pixel simply stays unmatched.
    fn push(&mut self, color: Bgr) {
        if self.entries.len() < MAX_PALETTE_COLORS {
            self.entries.push(color);
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Collapses near-duplicate colors into a small per-image palette, in
/// place.
///
/// Scans the buffer row-major, building the palette greedily: each
/// non-transparent pixel is rewritten to the first palette entry within
/// `threshold` Euclidean RGB distance (strict `<`), or becomes a new entry
/// itself when none matches and the palette holds fewer than 256 colors.
/// Pixels with alpha 0 never participate, and alpha is never modified.
///
/// A non-positive threshold matches nothing, so every color becomes its
/// own entry up to the cap and the buffer comes back unmodified. The
/// palette is discarded when the pass returns.
///
/// # Errors
/// - `BufferError::OutOfBounds` only on malformed geometry
pub fn snap_to_local_palette(
    buffer: &mut PixelBuffer,
    threshold: f64,
) -> Result<(), BufferError> {
    let mut palette = LocalPalette::new();
    let mut merged = 0usize;

    for row in 0..buffer.height() {
        for col in 0..buffer.width() {
            let (color, alpha) = buffer.read(row, col)?;
            if alpha == 0 {
                continue;
            }

            if let Some(entry) = palette.first_match(color, threshold) {
                buffer.write_bgra(row, col, entry, alpha)?;
                merged += 1;
            } else {
                palette.push(color);
            }
        }
    }

    debug!(
        "snap pass merged {} pixels into {} palette entries",
        merged,
        palette.len()
    );
    Ok(())
}
