//! Visual parameters derived from the drag offset.
//!
//! These are pure functions of the offset; nothing here holds state, so
//! the rendering layer can recompute them every frame without drift.

use super::config::SwipeConfig;

/// What the rendering layer applies to the outgoing screen (translate,
/// scale, fade) and to the destination-color overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualParams {
    /// Horizontal translation of the screen content, in points.
    pub translate_x: f32,
    /// Uniform scale of the screen content, in `[0.90, 1.0]`.
    pub scale: f32,
    /// Opacity of the screen content, in `[0.5, 1.0]`.
    pub opacity: f32,
    /// Opacity of the destination-background overlay, in `[0.0, 0.7]`.
    pub overlay_opacity: f32,
}

impl VisualParams {
    #[allow(dead_code)]
    pub fn resting() -> Self {
        Self {
            translate_x: 0.0,
            scale: 1.0,
            opacity: 1.0,
            overlay_opacity: 0.0,
        }
    }
}

/// Compute the visual parameters for a given offset.
///
/// Up to the commit threshold the content shrinks to 0.95 and fades to
/// 0.70; past it (the commit settle sweeps the offset out to the full
/// screen width) both deepen towards 0.90 / 0.50. The overlay ramps
/// from a small dead zone up to its cap at full width, so the
/// destination color is fully established by the time the route
/// changes.
pub fn visual_params(offset: f32, config: &SwipeConfig) -> VisualParams {
    let distance = offset.abs();
    let threshold = config.commit_threshold();

    let drag_progress = (distance / threshold).clamp(0.0, 1.0);
    let settle_progress = if config.screen_width > threshold {
        ((distance - threshold) / (config.screen_width - threshold)).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let overlay_range = config.screen_width - config.overlay_dead_zone;
    let overlay_progress = if overlay_range > 0.0 {
        ((distance - config.overlay_dead_zone) / overlay_range).clamp(0.0, 1.0)
    } else {
        0.0
    };

    VisualParams {
        translate_x: offset,
        scale: 1.0 - 0.05 * drag_progress - 0.05 * settle_progress,
        opacity: 1.0 - 0.3 * drag_progress - 0.2 * settle_progress,
        overlay_opacity: 0.7 * overlay_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SwipeConfig {
        SwipeConfig::new(400.0)
    }

    #[test]
    fn test_resting_at_zero_offset() {
        assert_eq!(visual_params(0.0, &config()), VisualParams::resting());
    }

    #[test]
    fn test_drag_interpolation_is_symmetric() {
        let config = config();
        let left = visual_params(-56.0, &config); // half the 112pt threshold
        let right = visual_params(56.0, &config);
        assert_eq!(left.scale, right.scale);
        assert_eq!(left.opacity, right.opacity);
        assert!((left.scale - 0.975).abs() < 1e-4);
        assert!((left.opacity - 0.85).abs() < 1e-4);
    }

    #[test]
    fn test_threshold_reaches_drag_minimums() {
        let config = config();
        let params = visual_params(-config.commit_threshold(), &config);
        assert!((params.scale - 0.95).abs() < 1e-4);
        assert!((params.opacity - 0.7).abs() < 1e-4);
    }

    #[test]
    fn test_full_width_reaches_floor_values() {
        let config = config();
        let params = visual_params(config.screen_width, &config);
        assert!((params.scale - 0.90).abs() < 1e-4);
        assert!((params.opacity - 0.50).abs() < 1e-4);
        assert!((params.overlay_opacity - 0.7).abs() < 1e-4);
    }

    #[test]
    fn test_overlay_dead_zone() {
        let config = config();
        assert_eq!(visual_params(10.0, &config).overlay_opacity, 0.0);
        assert_eq!(visual_params(-19.9, &config).overlay_opacity, 0.0);
        assert!(visual_params(30.0, &config).overlay_opacity > 0.0);
    }

    #[test]
    fn test_values_stay_in_documented_ranges() {
        let config = config();
        for i in -40..=40 {
            let params = visual_params(i as f32 * 10.0, &config);
            assert!((0.90..=1.0).contains(&params.scale));
            assert!((0.50..=1.0).contains(&params.opacity));
            assert!((0.0..=0.7).contains(&params.overlay_opacity));
        }
    }
}
