/// Flattens (b, g, r, a) pixels into a tightly packed buffer
/// (stride == width * 4).
pub fn packed(pixels: &[[u8; 4]]) -> Vec<u8> {
    pixels.iter().flatten().copied().collect()
}

/// Flattens (b, g, r, a) pixels into a buffer with `pad` garbage bytes
/// appended to every row, the way padded source formats lay rows out.
pub fn padded(pixels: &[[u8; 4]], width: usize, pad: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for row in pixels.chunks(width) {
        for px in row {
            data.extend_from_slice(px);
        }
        data.extend(std::iter::repeat(0xAB).take(pad));
    }
    data
}
