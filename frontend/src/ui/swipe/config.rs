//! Tunable thresholds and animation constants for swipe navigation.

/// Swipe behavior configuration, expressed relative to the width of the
/// swipeable area where that makes sense.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeConfig {
    /// Width of the swipeable area in points. The drag offset is clamped
    /// to `[-screen_width, screen_width]`.
    pub screen_width: f32,
    /// Minimum horizontal movement before a pointer-down is claimed as a
    /// swipe (also must beat the vertical component).
    pub start_threshold: f32,
    /// Fraction of the screen width the offset must pass for a release
    /// to commit.
    pub commit_fraction: f32,
    /// Release velocity that commits regardless of displacement, in
    /// screen-widths per second.
    pub velocity_threshold: f32,
    /// Response factor applied to drags in the invalid direction, so the
    /// screen gives a little instead of feeling dead.
    pub invalid_damping: f32,
    /// Offset below which the destination-color overlay stays invisible.
    pub overlay_dead_zone: f32,
    /// Duration of the commit completion tween, seconds.
    pub commit_duration: f32,
    /// Spring stiffness for the snap-back animation. The spring is kept
    /// critically damped, so this is the only knob.
    pub spring_stiffness: f32,
}

impl SwipeConfig {
    pub fn new(screen_width: f32) -> Self {
        Self {
            screen_width,
            start_threshold: 16.0,
            commit_fraction: 0.28,
            velocity_threshold: 0.5,
            invalid_damping: 0.3,
            overlay_dead_zone: 20.0,
            commit_duration: 0.22,
            spring_stiffness: 300.0,
        }
    }

    /// Displacement past which a release commits, in points.
    pub fn commit_threshold(&self) -> f32 {
        self.screen_width * self.commit_fraction
    }

    /// Velocity past which a release commits, in points per second.
    pub fn velocity_cutoff(&self) -> f32 {
        self.velocity_threshold * self.screen_width
    }

    /// Critical damping coefficient for the snap-back spring.
    pub fn spring_damping(&self) -> f32 {
        2.0 * self.spring_stiffness.sqrt()
    }
}
