//! The swipe navigation state machine.
//!
//! One controller instance belongs to one mounted screen. It consumes
//! pointer samples and frame ticks and owns the single source of truth
//! for the drag offset and the navigation lock:
//!
//! ```text
//!           pointer-down              |dx| > start && |dx| > |dy|
//!   Idle ───────────────▶ Armed ─────────────────────────────▶ Dragging
//!    ▲                      │ pointer-up                          │ pointer-up
//!    │                      ▼                                     ▼
//!    │◀──────────────────  Idle            commit? ──▶ Committing (locked)
//!    │                                       │ no                 │ tween done:
//!    │◀───────── spring settled ──── SnappingBack                 │ navigate once
//!    │     (pointer-down interrupts the spring)                   ▼
//!    └────────────────────────────────────────────────────────── Idle
//! ```
//!
//! Invariants upheld here: the offset never exceeds the screen width,
//! never carries a stale value into a new gesture (it is zeroed on
//! every grant and on every completed gesture), and a committed gesture
//! navigates exactly once, with new gesture starts rejected while the
//! commit is in flight.

use super::config::SwipeConfig;
use super::velocity::VelocityTracker;
use super::visual::{visual_params, VisualParams};
use crate::ui::app_state::MainTab;
use log::debug;

/// Input to the state machine: pointer samples and frame ticks.
///
/// Times are in seconds on one monotonic clock (the egui frame clock).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    PointerDown { x: f32, y: f32, time: f64 },
    PointerMove { x: f32, y: f32, time: f64 },
    PointerUp { time: f64 },
    /// The gesture was taken away (window lost focus, pointer left).
    PointerLost,
    /// Frame tick; advances any settle animation.
    Tick { time: f64 },
}

/// Output of a transition. `Navigate` is emitted exactly once per
/// committed gesture, when the completion tween finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub enum SwipeEffect {
    None,
    Navigate(MainTab),
}

/// Externally visible phase of the gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    /// Pointer is down but the gesture has not been claimed as a swipe.
    Armed,
    Dragging,
    /// Commit decided; completion tween running, navigation lock held.
    Committing,
    /// Cancelled; spring is returning the offset to zero.
    SnappingBack,
}

/// Private animation state for the settling phases.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Settle {
    Commit {
        target: MainTab,
        from: f32,
        to: f32,
        start_time: f64,
    },
    SnapBack {
        velocity: f32,
        last_time: f64,
    },
}

pub struct SwipeController {
    config: SwipeConfig,
    current_tab: MainTab,
    phase: SwipePhase,
    offset: f32,
    origin_x: f32,
    origin_y: f32,
    tracker: VelocityTracker,
    settle: Option<Settle>,
}

impl SwipeController {
    pub fn new(current_tab: MainTab, config: SwipeConfig) -> Self {
        Self {
            config,
            current_tab,
            phase: SwipePhase::Idle,
            offset: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
            tracker: VelocityTracker::new(),
            settle: None,
        }
    }

    /// The sign a valid offset has on the current tab: Home swipes left
    /// (negative, towards History), History swipes right (positive,
    /// towards Home).
    fn valid_sign(&self) -> f32 {
        match self.current_tab {
            MainTab::Home => -1.0,
            MainTab::History => 1.0,
        }
    }

    pub fn current_tab(&self) -> MainTab {
        self.current_tab
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// True while a commit animation is in flight. New gesture starts
    /// are rejected for the duration; this is the double-navigation
    /// guard.
    pub fn is_navigating(&self) -> bool {
        self.phase == SwipePhase::Committing
    }

    /// True while any animation needs frame ticks to make progress.
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            SwipePhase::Committing | SwipePhase::SnappingBack
        )
    }

    /// Visual parameters for the current offset.
    pub fn visual_params(&self) -> VisualParams {
        visual_params(self.offset, &self.config)
    }

    /// Re-mount the controller on a tab: fresh session, zero offset,
    /// lock released. Called when the tab changes by any means.
    pub fn set_tab(&mut self, tab: MainTab) {
        self.current_tab = tab;
        self.reset();
    }

    /// Drop any in-flight session and animation.
    pub fn reset(&mut self) {
        self.phase = SwipePhase::Idle;
        self.offset = 0.0;
        self.settle = None;
        self.tracker.reset();
    }

    /// Track window resizes; the thresholds scale with the width.
    pub fn set_screen_width(&mut self, width: f32) {
        if width > 0.0 {
            self.config.screen_width = width;
        }
    }

    /// The single transition entry point.
    pub fn handle_event(&mut self, event: SwipeEvent) -> SwipeEffect {
        match event {
            SwipeEvent::PointerDown { x, y, time } => self.on_pointer_down(x, y, time),
            SwipeEvent::PointerMove { x, y, time } => self.on_pointer_move(x, y, time),
            SwipeEvent::PointerUp { time } => self.on_pointer_up(time),
            SwipeEvent::PointerLost => self.on_pointer_lost(),
            SwipeEvent::Tick { time } => return self.on_tick(time),
        }
        SwipeEffect::None
    }

    fn on_pointer_down(&mut self, x: f32, y: f32, time: f64) {
        match self.phase {
            // Navigation lock: no new gesture may race the commit.
            SwipePhase::Committing => return,
            // A pointer is already engaged; ignore extra touches.
            SwipePhase::Armed | SwipePhase::Dragging => return,
            // Starting a gesture interrupts an in-flight spring: the new
            // drag owns the offset now, nothing queues behind it.
            SwipePhase::SnappingBack | SwipePhase::Idle => {}
        }
        self.settle = None;
        self.offset = 0.0;
        self.origin_x = x;
        self.origin_y = y;
        self.phase = SwipePhase::Armed;
        self.tracker.reset();
        self.tracker.push(time, x);
    }

    fn on_pointer_move(&mut self, x: f32, y: f32, time: f64) {
        match self.phase {
            SwipePhase::Armed => {
                self.tracker.push(time, x);
                let dx = x - self.origin_x;
                let dy = y - self.origin_y;
                // Claim only clearly horizontal movement; vertical
                // scrolling must never turn into a navigation swipe.
                if dx.abs() > self.config.start_threshold && dx.abs() > dy.abs() {
                    self.phase = SwipePhase::Dragging;
                    self.offset = self.filtered_offset(dx);
                }
            }
            SwipePhase::Dragging => {
                self.tracker.push(time, x);
                self.offset = self.filtered_offset(x - self.origin_x);
            }
            _ => {}
        }
    }

    /// Map the raw gesture translation to the offset: full response in
    /// the valid direction, damped response in the invalid one, clamped
    /// to the screen width either way.
    fn filtered_offset(&self, raw: f32) -> f32 {
        let width = self.config.screen_width;
        if raw * self.valid_sign() >= 0.0 {
            raw.clamp(-width, width)
        } else {
            (raw * self.config.invalid_damping).clamp(-width, width)
        }
    }

    fn on_pointer_up(&mut self, time: f64) {
        match self.phase {
            SwipePhase::Armed => {
                // Never claimed; nothing moved.
                self.phase = SwipePhase::Idle;
                self.tracker.reset();
            }
            SwipePhase::Dragging => {
                let velocity = self.tracker.velocity();
                self.tracker.reset();
                let sign = self.valid_sign();
                // A release commits on displacement OR on a fast flick in
                // the valid direction; either alone is enough.
                let valid_direction = self.offset * sign >= 0.0;
                let past_threshold = self.offset * sign > self.config.commit_threshold();
                let fast_flick = velocity * sign > self.config.velocity_cutoff();
                if valid_direction && (past_threshold || fast_flick) {
                    let target = self.current_tab.other();
                    debug!(
                        "swipe commit -> {:?} (offset {:.1}, velocity {:.0})",
                        target, self.offset, velocity
                    );
                    self.phase = SwipePhase::Committing;
                    self.settle = Some(Settle::Commit {
                        target,
                        from: self.offset,
                        to: sign * self.config.screen_width,
                        start_time: time,
                    });
                } else {
                    self.phase = SwipePhase::SnappingBack;
                    self.settle = Some(Settle::SnapBack {
                        velocity,
                        last_time: time,
                    });
                }
            }
            _ => {}
        }
    }

    fn on_pointer_lost(&mut self) {
        // Terminated mid-gesture: snap straight back to rest. A running
        // commit keeps going; it no longer depends on the pointer.
        if matches!(self.phase, SwipePhase::Armed | SwipePhase::Dragging) {
            self.reset();
        }
    }

    fn on_tick(&mut self, time: f64) -> SwipeEffect {
        match self.settle {
            Some(Settle::Commit {
                target,
                from,
                to,
                start_time,
            }) => {
                let progress =
                    ((time - start_time) / self.config.commit_duration as f64).clamp(0.0, 1.0);
                if progress >= 1.0 {
                    // Visual completion strictly precedes the route
                    // change; the lock is released on the same tick.
                    self.current_tab = target;
                    self.reset();
                    return SwipeEffect::Navigate(target);
                }
                self.offset = lerp(from, to, ease_out_cubic(progress as f32));
                SwipeEffect::None
            }
            Some(Settle::SnapBack {
                mut velocity,
                last_time,
            }) => {
                // Critically damped spring towards zero, integrated with
                // semi-implicit Euler. The timestep is capped so a long
                // frame cannot blow the integration up.
                let dt = ((time - last_time).max(0.0) as f32).min(1.0 / 30.0);
                let stiffness = self.config.spring_stiffness;
                let damping = self.config.spring_damping();
                velocity += (-stiffness * self.offset - damping * velocity) * dt;
                self.offset += velocity * dt;

                if self.offset.abs() < 0.5 && velocity.abs() < 20.0 {
                    self.reset();
                } else {
                    self.settle = Some(Settle::SnapBack {
                        velocity,
                        last_time: time,
                    });
                }
                SwipeEffect::None
            }
            None => SwipeEffect::None,
        }
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 400.0;

    fn home_controller() -> SwipeController {
        SwipeController::new(MainTab::Home, SwipeConfig::new(WIDTH))
    }

    fn history_controller() -> SwipeController {
        SwipeController::new(MainTab::History, SwipeConfig::new(WIDTH))
    }

    /// Feed a pointer-down followed by evenly spaced horizontal moves.
    /// Returns the time of the last sample.
    fn drag(
        controller: &mut SwipeController,
        start_x: f32,
        total_dx: f32,
        steps: usize,
        step_seconds: f64,
    ) -> f64 {
        let _ = controller.handle_event(SwipeEvent::PointerDown {
            x: start_x,
            y: 100.0,
            time: 0.0,
        });
        let mut time = 0.0;
        for i in 1..=steps {
            time = i as f64 * step_seconds;
            let _ = controller.handle_event(SwipeEvent::PointerMove {
                x: start_x + total_dx * (i as f32 / steps as f32),
                y: 100.0,
                time,
            });
        }
        time
    }

    /// Tick until all animations settle, collecting navigation effects.
    fn run_to_rest(controller: &mut SwipeController, mut time: f64) -> Vec<MainTab> {
        let mut navigations = Vec::new();
        for _ in 0..500 {
            time += 1.0 / 60.0;
            if let SwipeEffect::Navigate(tab) = controller.handle_event(SwipeEvent::Tick { time })
            {
                navigations.push(tab);
            }
            if !controller.is_animating() {
                break;
            }
        }
        navigations
    }

    #[test]
    fn test_offset_is_clamped_to_screen_width() {
        // P1: even a drag far past the edge never exceeds the width.
        let mut controller = home_controller();
        let _ = controller.handle_event(SwipeEvent::PointerDown {
            x: 300.0,
            y: 100.0,
            time: 0.0,
        });
        for i in 1..=50 {
            let _ = controller.handle_event(SwipeEvent::PointerMove {
                x: 300.0 - i as f32 * 40.0,
                y: 100.0,
                time: i as f64 * 0.02,
            });
            assert!(controller.offset().abs() <= WIDTH);
        }
        assert_eq!(controller.offset(), -WIDTH);
    }

    #[test]
    fn test_direction_filter_damps_invalid_drags() {
        // P2: on Home, positive-only deltas never produce a negative
        // offset, and the response is damped.
        let mut controller = home_controller();
        drag(&mut controller, 100.0, 100.0, 10, 0.02);
        assert!(controller.offset() >= 0.0);
        assert!((controller.offset() - 30.0).abs() < 1e-3); // 100 * 0.3

        // Symmetric on History with negative deltas.
        let mut controller = history_controller();
        drag(&mut controller, 300.0, -100.0, 10, 0.02);
        assert!(controller.offset() <= 0.0);
        assert!((controller.offset() + 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_vertical_scroll_is_never_claimed() {
        let mut controller = home_controller();
        let _ = controller.handle_event(SwipeEvent::PointerDown {
            x: 200.0,
            y: 100.0,
            time: 0.0,
        });
        // Mostly vertical movement: large dy, growing dx.
        let _ = controller.handle_event(SwipeEvent::PointerMove {
            x: 170.0,
            y: 250.0,
            time: 0.05,
        });
        assert_eq!(controller.phase(), SwipePhase::Armed);
        assert_eq!(controller.offset(), 0.0);
        let _ = controller.handle_event(SwipeEvent::PointerUp { time: 0.1 });
        assert_eq!(controller.phase(), SwipePhase::Idle);
    }

    #[test]
    fn test_slow_drag_past_threshold_commits() {
        // P3: -0.3 * width with negligible velocity commits to History.
        let mut controller = home_controller();
        let released = drag(&mut controller, 300.0, -120.0, 30, 0.04); // 100 pt/s
        let _ = controller.handle_event(SwipeEvent::PointerUp { time: released });
        assert_eq!(controller.phase(), SwipePhase::Committing);
        assert!(controller.is_navigating());

        let navigations = run_to_rest(&mut controller, released);
        assert_eq!(navigations, vec![MainTab::History]);
        assert_eq!(controller.offset(), 0.0);
        assert!(!controller.is_navigating());
        assert_eq!(controller.current_tab(), MainTab::History);
    }

    #[test]
    fn test_slow_short_drag_snaps_back() {
        // P3: -0.1 * width with negligible velocity cancels.
        let mut controller = home_controller();
        let released = drag(&mut controller, 300.0, -40.0, 20, 0.05);
        let _ = controller.handle_event(SwipeEvent::PointerUp { time: released });
        assert_eq!(controller.phase(), SwipePhase::SnappingBack);
        assert!(!controller.is_navigating());

        let navigations = run_to_rest(&mut controller, released);
        assert!(navigations.is_empty());
        // P6: fully reset after the spring settles.
        assert_eq!(controller.phase(), SwipePhase::Idle);
        assert_eq!(controller.offset(), 0.0);
        assert_eq!(controller.current_tab(), MainTab::Home);
    }

    #[test]
    fn test_fast_flick_commits_despite_small_displacement() {
        // P4: -0.05 * width displacement but a fast flick still commits.
        let mut controller = home_controller();
        let released = drag(&mut controller, 300.0, -20.0, 4, 0.01); // 500 pt/s
        let _ = controller.handle_event(SwipeEvent::PointerUp { time: released });
        assert_eq!(controller.phase(), SwipePhase::Committing);

        let navigations = run_to_rest(&mut controller, released);
        assert_eq!(navigations, vec![MainTab::History]);
    }

    #[test]
    fn test_fast_flick_in_invalid_direction_does_not_commit() {
        let mut controller = home_controller();
        let released = drag(&mut controller, 100.0, 200.0, 4, 0.01);
        let _ = controller.handle_event(SwipeEvent::PointerUp { time: released });
        assert_ne!(controller.phase(), SwipePhase::Committing);
        let navigations = run_to_rest(&mut controller, released);
        assert!(navigations.is_empty());
    }

    #[test]
    fn test_committed_gesture_navigates_exactly_once() {
        // P5: rapid gesture starts during the commit cannot double-fire.
        let mut controller = home_controller();
        let released = drag(&mut controller, 300.0, -150.0, 10, 0.03);
        let _ = controller.handle_event(SwipeEvent::PointerUp { time: released });
        assert!(controller.is_navigating());

        // A second gesture hammers the controller while committing.
        let offset_during_commit = controller.offset();
        let _ = controller.handle_event(SwipeEvent::PointerDown {
            x: 300.0,
            y: 100.0,
            time: released + 0.01,
        });
        let _ = controller.handle_event(SwipeEvent::PointerMove {
            x: 100.0,
            y: 100.0,
            time: released + 0.02,
        });
        let _ = controller.handle_event(SwipeEvent::PointerUp {
            time: released + 0.03,
        });
        assert!(controller.is_navigating());
        assert_eq!(controller.offset(), offset_during_commit);

        let mut navigations = run_to_rest(&mut controller, released);
        // More ticks after settling must not produce another navigation.
        navigations.extend(run_to_rest(&mut controller, released + 10.0));
        assert_eq!(navigations, vec![MainTab::History]);
    }

    #[test]
    fn test_new_gesture_interrupts_snap_back() {
        let mut controller = home_controller();
        let released = drag(&mut controller, 300.0, -60.0, 10, 0.06);
        let _ = controller.handle_event(SwipeEvent::PointerUp { time: released });
        assert_eq!(controller.phase(), SwipePhase::SnappingBack);

        // One tick in: the spring is mid-flight, offset nonzero.
        let _ = controller.handle_event(SwipeEvent::Tick {
            time: released + 1.0 / 60.0,
        });
        assert_ne!(controller.offset(), 0.0);

        // A new pointer-down stops the spring and owns the offset.
        let _ = controller.handle_event(SwipeEvent::PointerDown {
            x: 250.0,
            y: 100.0,
            time: released + 0.05,
        });
        assert_eq!(controller.phase(), SwipePhase::Armed);
        assert_eq!(controller.offset(), 0.0);

        // Ticks no longer move anything; the old animation is gone.
        let _ = controller.handle_event(SwipeEvent::Tick {
            time: released + 0.1,
        });
        assert_eq!(controller.offset(), 0.0);
    }

    #[test]
    fn test_pointer_lost_resets_session() {
        let mut controller = home_controller();
        drag(&mut controller, 300.0, -100.0, 10, 0.02);
        assert_eq!(controller.phase(), SwipePhase::Dragging);
        let _ = controller.handle_event(SwipeEvent::PointerLost);
        assert_eq!(controller.phase(), SwipePhase::Idle);
        assert_eq!(controller.offset(), 0.0);
    }

    #[test]
    fn test_set_tab_remounts_with_fresh_state() {
        let mut controller = home_controller();
        drag(&mut controller, 300.0, -100.0, 10, 0.02);
        assert_ne!(controller.offset(), 0.0);

        controller.set_tab(MainTab::History);
        assert_eq!(controller.phase(), SwipePhase::Idle);
        assert_eq!(controller.offset(), 0.0);
        assert!(!controller.is_navigating());
        assert_eq!(controller.current_tab(), MainTab::History);
    }

    #[test]
    fn test_history_commits_back_to_home() {
        let mut controller = history_controller();
        let released = drag(&mut controller, 100.0, 150.0, 10, 0.03);
        let _ = controller.handle_event(SwipeEvent::PointerUp { time: released });
        let navigations = run_to_rest(&mut controller, released);
        assert_eq!(navigations, vec![MainTab::Home]);
        assert_eq!(controller.current_tab(), MainTab::Home);
    }
}
