use crate::raster::{BufferError, PixelBuffer};
use log::debug;

/// Runs one orphan-removal pass over the buffer, in place.
///
/// A pixel is an orphan when its color matches none of its four direct
/// neighbors (alpha is ignored for the comparison). Each orphan is
/// overwritten with the full RGBA of the pixel directly above it. Border
/// pixels have fewer than four neighbors and are never inspected or
/// mutated.
///
/// The scan is row-major ascending and strictly in place: neighbor reads
/// observe pixels already rewritten earlier in the same pass, so
/// replacements cascade down and to the right. Callers wanting several
/// passes invoke this repeatedly; each pass re-scans the previous pass's
/// output.
///
/// # Errors
/// - `BufferError::OutOfBounds` only on malformed geometry; the interior
///   loop bounds keep every access valid for a well-formed buffer
pub fn remove_orphans(buffer: &mut PixelBuffer) -> Result<(), BufferError> {
    let height = buffer.height();
    let width = buffer.width();
    let mut replaced = 0usize;

    for row in 1..height.saturating_sub(1) {
        for col in 1..width.saturating_sub(1) {
            let (color, _) = buffer.read(row, col)?;

            let neighbors = [
                (row - 1, col), // up
                (row + 1, col),
                (row, col - 1),
                (row, col + 1),
            ];

            let mut is_orphan = true;
            for (nrow, ncol) in neighbors {
                let (neighbor, _) = buffer.read(nrow, ncol)?;
                if neighbor == color {
                    is_orphan = false;
                    break;
                }
            }

            if is_orphan {
                let (up, up_alpha) = buffer.read(row - 1, col)?;
                buffer.write_bgra(row, col, up, up_alpha)?;
                replaced += 1;
            }
        }
    }

    debug!("orphan pass replaced {} pixels", replaced);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Bgr;

    const GRAY: [u8; 4] = [128, 128, 128, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn packed(pixels: &[[u8; 4]]) -> Vec<u8> {
        pixels.iter().flatten().copied().collect()
    }

    #[test]
    fn test_lone_center_pixel_takes_up_neighbor_rgba() {
        let mut data = packed(&[
            GRAY, GRAY, GRAY, //
            GRAY, BLACK, GRAY, //
            GRAY, GRAY, GRAY,
        ]);
        let mut buffer = PixelBuffer::new(&mut data, 3, 3, 12).unwrap();

        remove_orphans(&mut buffer).unwrap();

        let (color, alpha) = buffer.read(1, 1).unwrap();
        assert_eq!(color, Bgr::new(128, 128, 128));
        assert_eq!(alpha, 255);
    }

    #[test]
    fn test_replacement_copies_up_neighbor_alpha() {
        let mut data = packed(&[
            GRAY, [128, 128, 128, 7], GRAY, //
            GRAY, BLACK, GRAY, //
            GRAY, GRAY, GRAY,
        ]);
        let mut buffer = PixelBuffer::new(&mut data, 3, 3, 12).unwrap();

        remove_orphans(&mut buffer).unwrap();

        let (color, alpha) = buffer.read(1, 1).unwrap();
        assert_eq!(color, Bgr::new(128, 128, 128));
        assert_eq!(alpha, 7);
    }

    #[test]
    fn test_alpha_ignored_when_matching_neighbors() {
        // Center differs from its neighbors only in alpha, so it is not an
        // orphan and must stay untouched.
        let mut data = packed(&[
            GRAY, GRAY, GRAY, //
            GRAY, [128, 128, 128, 0], GRAY, //
            GRAY, GRAY, GRAY,
        ]);
        let mut buffer = PixelBuffer::new(&mut data, 3, 3, 12).unwrap();

        remove_orphans(&mut buffer).unwrap();

        let (color, alpha) = buffer.read(1, 1).unwrap();
        assert_eq!(color, Bgr::new(128, 128, 128));
        assert_eq!(alpha, 0);
    }

    #[test]
    fn test_pass_cascades_through_already_rewritten_pixels() {
        // Two stacked orphans: once (1, 1) has been rewritten to GRAY,
        // (2, 1) reads that new value as its up neighbor and takes GRAY
        // too. A frozen-snapshot variant would hand it BLACK instead.
        let mut data = packed(&[
            GRAY, GRAY, GRAY, //
            GRAY, BLACK, GRAY, //
            GRAY, [0, 0, 255, 255], GRAY, //
            GRAY, GRAY, GRAY,
        ]);
        let mut buffer = PixelBuffer::new(&mut data, 3, 4, 12).unwrap();

        remove_orphans(&mut buffer).unwrap();

        let (upper, _) = buffer.read(1, 1).unwrap();
        let (lower, _) = buffer.read(2, 1).unwrap();
        assert_eq!(upper, Bgr::new(128, 128, 128));
        assert_eq!(lower, Bgr::new(128, 128, 128));
    }

    #[test]
    fn test_images_without_interior_are_untouched() {
        let mut data = packed(&[BLACK, GRAY, [1, 2, 3, 4], GRAY]);
        let expected = data.clone();

        let mut row = PixelBuffer::new(&mut data, 4, 1, 16).unwrap();
        remove_orphans(&mut row).unwrap();
        assert_eq!(data, expected);

        let mut column = PixelBuffer::new(&mut data, 1, 4, 4).unwrap();
        remove_orphans(&mut column).unwrap();
        assert_eq!(data, expected);
    }
}
