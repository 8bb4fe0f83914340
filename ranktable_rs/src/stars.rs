//! Rating to star sequence conversion.

use ranktable_report::types::StarUnit;
use tracing::error;

use crate::config::RenderConfig;
use crate::validators::is_in_range;

/// Highest valid rating.
pub const MAX_RATING: f64 = 5.0;

// floor(rating + bias): x.6 and above earns the next star
const FILL_BIAS: f64 = 0.4;

/// Star units for `rating` at the given viewport width.
///
/// Narrow viewports get a single filled star as a compact indicator. On wide
/// viewports the sequence always has `config.star_count` units, filled first.
///
/// ```
/// use ranktable::{RenderConfig, stars::render_stars};
/// use ranktable_report::types::StarUnit;
///
/// let stars = render_stars(3.6, 1280, &RenderConfig::default());
/// assert_eq!(stars.iter().filter(|s| **s == StarUnit::Filled).count(), 4);
/// ```
pub fn render_stars(rating: f64, viewport_width: u32, config: &RenderConfig) -> Vec<StarUnit> {
    let rating = if is_in_range(rating, 0.0, MAX_RATING) {
        rating
    } else {
        config.default_rating
    };

    if viewport_width < config.breakpoint_mobile {
        return vec![StarUnit::Filled];
    }

    match star_counts(rating, config.star_count) {
        Some((filled, empty)) => {
            let mut stars = vec![StarUnit::Filled; filled];
            stars.extend(std::iter::repeat_n(StarUnit::Empty, empty));
            stars
        }
        None => {
            error!(rating, star_count = config.star_count, "cannot build star rating");
            vec![StarUnit::Empty; config.star_count]
        }
    }
}

/// `(filled, empty)` counts, or `None` when they don't fit `star_count`.
fn star_counts(rating: f64, star_count: usize) -> Option<(usize, usize)> {
    let filled = (rating + FILL_BIAS).floor();
    if !filled.is_finite() || filled < 0.0 {
        return None;
    }
    let filled = filled as usize;
    let empty = star_count.checked_sub(filled)?;
    Some((filled, empty))
}
