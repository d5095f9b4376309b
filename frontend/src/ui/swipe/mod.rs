//! # Swipe Navigation Core
//!
//! The gesture-driven tab navigation controller. This is the densest
//! part of the app: an explicit finite state machine that interprets
//! horizontal drag samples, drives the settle animations, decides
//! commit-vs-cancel at release, and guarantees exactly one navigation
//! per committed gesture.
//!
//! ## Module organization:
//! - `config` - Tunable thresholds and animation constants
//! - `controller` - The state machine ([`SwipeController`])
//! - `velocity` - Impulse-strategy velocity tracker
//! - `visual` - Visual parameters derived from the drag offset
//!
//! The whole module is pure data + math (no egui types), so every
//! property is unit-testable without a window. The egui side feeds it
//! [`SwipeEvent`]s from pointer input and frame ticks and applies the
//! returned [`VisualParams`] when painting; see
//! `ui::components::tab_manager`.

pub mod config;
pub mod controller;
pub mod velocity;
pub mod visual;

pub use config::SwipeConfig;
pub use controller::{SwipeController, SwipeEffect, SwipeEvent, SwipePhase};
pub use velocity::VelocityTracker;
pub use visual::VisualParams;
