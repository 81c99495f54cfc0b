//! Auto-hiding scrollbar policy.
//!
//! The policy is a plain function of the visible fraction of content: when
//! everything fits the viewport the scrollbar disappears, otherwise it shows.
//! It knows nothing about widgets or layout; the shell re-derives the
//! fraction pair on every edit and resize and re-applies it.

use serde::{Deserialize, Serialize};

/// The `[first, last]` fraction of scrollable content currently visible,
/// each component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub first: f32,
    pub last: f32,
}

impl Viewport {
    /// The whole content is visible.
    pub const FULL: Viewport = Viewport {
        first: 0.0,
        last: 1.0,
    };

    /// Builds a viewport, clamping both components into `[0, 1]`.
    pub fn new(first: f32, last: f32) -> Self {
        Self {
            first: first.clamp(0.0, 1.0),
            last: last.clamp(0.0, 1.0),
        }
    }

    /// Scrollbar visibility: hidden exactly when the entire content is
    /// visible (`first <= 0` and `last >= 1`).
    pub fn shows_scrollbar(&self) -> bool {
        self.first > 0.0 || self.last < 1.0
    }

    /// Fraction of content covered by the viewport; sizes the thumb.
    pub fn span(&self) -> f32 {
        (self.last - self.first).max(0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_viewport_hides_scrollbar() {
        assert!(!Viewport::FULL.shows_scrollbar());
        assert!(!Viewport::new(0.0, 1.0).shows_scrollbar());
    }

    #[test]
    fn test_partial_viewport_shows_scrollbar() {
        assert!(Viewport::new(0.0, 0.5).shows_scrollbar());
        assert!(Viewport::new(0.2, 1.0).shows_scrollbar());
        assert!(Viewport::new(0.3, 0.7).shows_scrollbar());
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let viewport = Viewport::new(-0.5, 1.5);
        assert_eq!(viewport, Viewport::FULL);
        assert!(!viewport.shows_scrollbar());
    }

    #[test]
    fn test_span() {
        assert_eq!(Viewport::new(0.25, 0.75).span(), 0.5);
        assert_eq!(Viewport::FULL.span(), 1.0);
    }

    proptest! {
        #[test]
        fn prop_visible_iff_content_overflows(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (first, last) = if a <= b { (a, b) } else { (b, a) };
            let viewport = Viewport::new(first, last);
            prop_assert_eq!(viewport.shows_scrollbar(), first > 0.0 || last < 1.0);
        }

        #[test]
        fn prop_toggles_as_viewport_changes(b in 0.0f32..1.0) {
            // Content grows past the viewport: visible. Shrinks back: hidden.
            prop_assert!(Viewport::new(0.0, b).shows_scrollbar());
            prop_assert!(!Viewport::new(0.0, 1.0).shows_scrollbar());
        }
    }
}
