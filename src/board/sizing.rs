//! Responsive board sizing
//!
//! The board's pixel width is recomputed whenever the window resizes. It is
//! clamped between a floor (never smaller than `min(320, container)`) and a
//! fixed ceiling of 560 px; narrow viewports use a larger fraction of the
//! container so the board stays playable on small windows. Presentational
//! only; the one contract is "never exceeds the container, never below the
//! floor".

/// Largest board edge in pixels.
pub const BOARD_MAX_PX: f32 = 560.0;

/// Preferred smallest board edge in pixels (capped by the container).
pub const BOARD_FLOOR_PX: f32 = 320.0;

/// Viewport width below which the narrow layout applies.
pub const NARROW_VIEWPORT_PX: f32 = 768.0;

/// Fraction of the container used by the narrow layout.
const NARROW_CONTAINER_FRACTION: f32 = 0.95;

/// Compute the board's pixel width from the viewport and container widths.
pub fn board_width(viewport: f32, container: f32) -> f32 {
    let min_size = BOARD_FLOOR_PX.min(container);
    if viewport < NARROW_VIEWPORT_PX {
        min_size.max((container * NARROW_CONTAINER_FRACTION).min(BOARD_MAX_PX))
    } else {
        container.min(BOARD_MAX_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewport_caps_at_max() {
        assert_eq!(board_width(1366.0, 1024.0), 560.0);
    }

    #[test]
    fn wide_viewport_small_container_fills_container() {
        assert_eq!(board_width(1024.0, 400.0), 400.0);
    }

    #[test]
    fn narrow_viewport_uses_container_fraction_with_floor() {
        // max(min(300, 320), min(300 * 0.95, 560)) = max(300, 285) = 300
        assert_eq!(board_width(600.0, 300.0), 300.0);
        // A roomier narrow container lands on the 95% fraction.
        assert_eq!(board_width(700.0, 400.0), 380.0);
    }

    #[test]
    fn never_exceeds_container_on_wide_viewports() {
        for container in [200.0f32, 320.0, 560.0, 900.0] {
            assert!(board_width(1024.0, container) <= container);
        }
    }
}
