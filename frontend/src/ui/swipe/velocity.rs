//! Release-velocity estimation for drag gestures.
//!
//! Impulse-strategy 1-D tracker: velocity is derived from the kinetic
//! energy the recent samples would impart, which is far more robust
//! against jittery pointer input than a two-sample difference.

/// Samples kept in the buffer.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window of the newest one contribute.
const HORIZON_SECONDS: f64 = 0.100;

/// A gap longer than this means the pointer stopped; older samples are
/// discarded.
const ASSUME_STOPPED_SECONDS: f64 = 0.040;

#[derive(Debug, Clone, Copy)]
struct Sample {
    time: f64,
    position: f32,
}

/// Tracks absolute horizontal positions over time and estimates the
/// instantaneous velocity at the newest sample, in points per second.
#[derive(Debug, Default, Clone)]
pub struct VelocityTracker {
    samples: Vec<Sample>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: Vec::with_capacity(HISTORY_SIZE),
        }
    }

    /// Record a position sample. `time` is in seconds on any monotonic
    /// clock shared by all samples.
    pub fn push(&mut self, time: f64, position: f32) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.remove(0);
        }
        self.samples.push(Sample { time, position });
    }

    /// Forget all samples (gesture ended or was interrupted).
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Velocity at the newest sample. Returns 0.0 when there are not
    /// enough recent samples to judge.
    pub fn velocity(&self) -> f32 {
        let newest = match self.samples.last() {
            Some(sample) => *sample,
            None => return 0.0,
        };

        // Walk backwards collecting the usable window: recent enough,
        // and with no stop-length gap between consecutive samples.
        let mut window: Vec<Sample> = Vec::with_capacity(self.samples.len());
        let mut next_time = newest.time;
        for sample in self.samples.iter().rev() {
            if newest.time - sample.time > HORIZON_SECONDS
                || next_time - sample.time > ASSUME_STOPPED_SECONDS
            {
                break;
            }
            next_time = sample.time;
            window.push(*sample);
        }
        window.reverse();

        if window.len() < 2 {
            return 0.0;
        }

        impulse_velocity(&window)
    }
}

/// Impulse velocity over a window ordered oldest to newest: accumulate
/// the work each segment's velocity change performs, then convert the
/// total kinetic energy back to a signed velocity (E = v^2 / 2).
fn impulse_velocity(window: &[Sample]) -> f32 {
    let mut work = 0.0f32;
    let mut first_segment = true;

    for pair in window.windows(2) {
        let dt = (pair[1].time - pair[0].time) as f32;
        if dt <= 0.0 {
            continue;
        }
        let segment_velocity = (pair[1].position - pair[0].position) / dt;
        let velocity_so_far = energy_to_velocity(work);
        work += (segment_velocity - velocity_so_far) * segment_velocity.abs();
        if first_segment {
            work *= 0.5;
            first_segment = false;
        }
    }

    energy_to_velocity(work)
}

#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}
