//! Stop location helpers.
//!
//! - [`default_locations`] spreads `n` stops evenly from 0 to 1 when the caller
//!   did not supply explicit locations.
//! - [`stripes`] builds hard-edged alternating two-color stripes.

/// Evenly distributed stop locations for `count` colors.
///
/// Produces `i / (count - 1)` for each stop, so the first location is 0 and the
/// last is 1. Fewer than two colors cannot form a gradient; for those counts
/// this returns `[]` or `[0.0]` instead of dividing by zero, and callers are
/// expected to reject the configuration before relying on it.
///
/// # Example
/// ```
/// use gradient_core::stops::default_locations;
///
/// assert_eq!(default_locations(3), vec![0.0, 0.5, 1.0]);
/// ```
pub fn default_locations(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count).map(|i| i as f64 / last).collect()
        }
    }
}

/// Build `count` alternating stripes of `first` and `second`.
///
/// Each stripe is a pair of identical stops so the color changes abruptly at
/// the stripe boundary. The returned colors are `[first, first, second, second]`
/// repeated `count` times, and the locations split the gradient into
/// `2 * count` equal bands:
///
/// ```text
/// count = 1: [0.0, 0.5, 0.5, 1.0]
/// count = 2: [0.0, 0.25, 0.25, 0.5, 0.5, 0.75, 0.75, 1.0]
/// ```
pub fn stripes<C: Clone>(first: C, second: C, count: usize) -> (Vec<C>, Vec<f64>) {
    let mut colors = Vec::with_capacity(count * 4);
    for _ in 0..count {
        colors.push(first.clone());
        colors.push(first.clone());
        colors.push(second.clone());
        colors.push(second.clone());
    }

    let bands = (count * 2) as f64;
    let locations = (0..count * 4)
        .map(|n| ((n + 1) / 2) as f64 / bands)
        .collect();

    (colors, locations)
}
