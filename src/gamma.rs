//! Gamma correction of raw brightness levels

/// Gamma exponent applied to every table entry.
pub const GAMMA: f64 = 2.5;

/// Number of entries in the generated table, one per 8-bit level.
pub const TABLE_SIZE: usize = 256;

const FULL_SCALE: f64 = (TABLE_SIZE - 1) as f64;

/// Gamma correct a single linear level.
///
/// The input is sampled at the center of its bucket, `(index + 0.5) / 255.5`, which keeps
/// both ends of the range as fixed points: `0 -> 0` and `255 -> 255`.
#[inline(always)]
pub fn correct(index: u8) -> u8 {
    let x = (index as f64 + 0.5) / (FULL_SCALE + 0.5);
    // round half away from zero; `as` saturates into 0..=255
    (x.powf(GAMMA) * FULL_SCALE).round() as u8
}

/// Iterator over `(index, corrected)` for every level in ascending order.
pub fn levels() -> impl Iterator<Item = (u8, u8)> {
    (0..=u8::MAX).map(|i| (i, correct(i)))
}
