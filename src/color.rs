//! Random color generation

use rand::Rng;

/// Generate a random `#rrggbb` color using the thread RNG
pub fn random_hex_color() -> String {
    hex_color_from(&mut rand::rng())
}

/// Generate a random `#rrggbb` color from a caller-supplied RNG
///
/// Uniform over the 24-bit RGB space; always seven bytes of lowercase
/// hex. Taking the RNG as a parameter keeps the output reproducible for
/// seeded tests.
///
/// # Examples
///
/// ```rust
/// use content_checks::color::hex_color_from;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let first = hex_color_from(&mut rng);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(first, hex_color_from(&mut rng));
/// ```
pub fn hex_color_from<R: Rng + ?Sized>(rng: &mut R) -> String {
    let rgb: u32 = rng.random_range(0..=0xFF_FFFF);
    format!("#{:06x}", rgb)
}
