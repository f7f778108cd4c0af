//! Pure calculation functions for derivative dimensions and colors.
//!
//! All functions here are pure and testable without any I/O or images.

/// Width/height ratio above which a source is classified near-square and
/// padded onto an extended canvas before cover rendering.
pub const NEAR_SQUARE_THRESHOLD: f64 = 0.85;

/// Target width/height ratio (3:4) enforced on pattern, category, and
/// featured derivatives.
pub const TARGET_RATIO: f64 = 0.75;

/// Width/height aspect ratio of an image.
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    width as f64 / height as f64
}

/// Whether a source needs canvas extension before being forced into the
/// target aspect ratio.
///
/// Near-square or wider images (ratio > 0.85) would lose too much content to
/// a straight center crop; they get padded to 3:4 first.
pub fn needs_extension(width: u32, height: u32) -> bool {
    aspect_ratio(width, height) > NEAR_SQUARE_THRESHOLD
}

/// Canvas height for extending a near-square source to the target ratio.
pub fn extended_height(width: u32) -> u32 {
    (width as f64 / TARGET_RATIO).round() as u32
}

/// Output height for a cover render at the given target width.
///
/// Truncated, not rounded: `350 / 0.75` → 466, matching the on-disk naming
/// contract of existing derivatives.
pub fn cover_height(width: u32) -> u32 {
    (width as f64 / TARGET_RATIO) as u32
}

/// Average a set of RGB samples into a single color.
///
/// Returns `None` for an empty sample set.
pub fn average_color(samples: impl IntoIterator<Item = [u8; 3]>) -> Option<(u8, u8, u8)> {
    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for [r, g, b] in samples {
        sums[0] += r as u64;
        sums[1] += g as u64;
        sums[2] += b as u64;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some((
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Near-square classification tests
    // =========================================================================

    #[test]
    fn portrait_three_four_is_not_near_square() {
        // 600x800 = 0.75, at the target ratio already
        assert!(!needs_extension(600, 800));
    }

    #[test]
    fn ratio_just_above_threshold_needs_extension() {
        // 870x1000 = 0.87
        assert!(needs_extension(870, 1000));
    }

    #[test]
    fn ratio_at_threshold_does_not_need_extension() {
        // 850x1000 = 0.85 exactly — the contract is strictly greater than
        assert!(!needs_extension(850, 1000));
    }

    #[test]
    fn square_needs_extension() {
        assert!(needs_extension(500, 500));
    }

    #[test]
    fn landscape_needs_extension() {
        assert!(needs_extension(800, 600));
    }

    // =========================================================================
    // Height calculation tests
    // =========================================================================

    #[test]
    fn extended_height_rounds() {
        // 1000 / 0.75 = 1333.33 → 1333
        assert_eq!(extended_height(1000), 1333);
        // 500 / 0.75 = 666.67 → 667
        assert_eq!(extended_height(500), 667);
    }

    #[test]
    fn cover_height_truncates() {
        // 350 / 0.75 = 466.67 → 466 (truncated, not rounded)
        assert_eq!(cover_height(350), 466);
        assert_eq!(cover_height(320), 426);
        assert_eq!(cover_height(640), 853);
        // Exact multiples are unaffected
        assert_eq!(cover_height(400), 533);
        assert_eq!(cover_height(300), 400);
    }

    // =========================================================================
    // Color averaging tests
    // =========================================================================

    #[test]
    fn average_of_uniform_samples_is_that_color() {
        let samples = vec![[120, 60, 200]; 10];
        assert_eq!(average_color(samples), Some((120, 60, 200)));
    }

    #[test]
    fn average_of_two_colors() {
        let samples = vec![[0, 0, 0], [200, 100, 50]];
        assert_eq!(average_color(samples), Some((100, 50, 25)));
    }

    #[test]
    fn average_of_empty_set_is_none() {
        assert_eq!(average_color(std::iter::empty()), None);
    }
}
