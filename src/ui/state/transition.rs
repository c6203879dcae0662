// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation of the strip offset.
//!
//! The carousel stores the offset it is heading to and the offset it came
//! from; every animation tick recomputes the on-screen offset with an
//! ease-in-out curve. Navigation never waits for the animation: a new target
//! simply restarts the transition from wherever the strip currently is.

use crate::domain::ui::TransitionDuration;
use std::time::Instant;

/// Cubic Bézier timing curve anchored at (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// The ease-in-out curve used for slide changes.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

impl CubicBezier {
    /// Control point abscissas must lie in `[0, 1]` for the curve to be a function of time.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    #[must_use]
    pub fn ease(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        sample(self.y1, self.y2, t)
    }

    /// Finds the curve parameter whose abscissa is `x` (bisection; x(t) is monotonic).
    fn solve_t(&self, x: f32) -> f32 {
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        let mut t = x;
        for _ in 0..24 {
            let value = sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

fn sample(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// Animated horizontal offset of the slide strip, in slide widths.
#[derive(Debug, Clone)]
pub struct SlideTransition {
    duration: TransitionDuration,
    from: f32,
    to: f32,
    current: f32,
    started_at: Option<Instant>,
}

impl SlideTransition {
    /// Creates a settled transition resting at `offset`.
    #[must_use]
    pub fn new(duration: TransitionDuration, offset: f32) -> Self {
        Self {
            duration,
            from: offset,
            to: offset,
            current: offset,
            started_at: None,
        }
    }

    /// Offset as of the last [`tick`](Self::tick) or [`retarget`](Self::retarget).
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Offset the strip is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn duration(&self) -> TransitionDuration {
        self.duration
    }

    /// Returns true while frames still need to be produced.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts moving towards `target` from the offset currently on screen.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        self.current = self.offset_at(now);

        if self.duration.is_instant() || (self.current - target).abs() < f32::EPSILON {
            self.settle(target);
            return;
        }

        self.from = self.current;
        self.to = target;
        self.started_at = Some(now);
    }

    /// Jumps to `offset` without animating.
    pub fn settle(&mut self, offset: f32) {
        self.from = offset;
        self.to = offset;
        self.current = offset;
        self.started_at = None;
    }

    /// Advances the animation clock. Settles once the duration has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.started_at.is_none() {
            return;
        }
        if self.progress(now) >= 1.0 {
            self.settle(self.to);
        } else {
            self.current = self.offset_at(now);
        }
    }

    /// Offset the strip would have at `now`, without mutating state.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        if self.started_at.is_none() {
            return self.current;
        }
        let eased = EASE_IN_OUT.ease(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    /// Linear progress of the running transition, clamped to `[0, 1]`.
    fn progress(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return 1.0;
        };
        let total = self.duration.as_duration().as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
        (elapsed / total).clamp(0.0, 1.0)
    }
}
