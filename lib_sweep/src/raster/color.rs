/// A color value in stored channel order (blue, green, red), no alpha.
///
/// Comparisons operate on the raw channel bytes exactly as they sit in the
/// buffer; there is no gamma or color-space handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bgr {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr {
    pub fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Euclidean distance between two colors over the stored channel bytes.
    pub fn distance(self, other: Bgr) -> f64 {
        let db = self.b as f64 - other.b as f64;
        let dg = self.g as f64 - other.g as f64;
        let dr = self.r as f64 - other.r as f64;
        (db * db + dg * dg + dr * dr).sqrt()
    }
}
