//! Animation adapter
//!
//! Triggers start tweens; rendering samples them with an explicit clock.
//! Tweens never feed back into application state, and a new tween on the
//! same element and property replaces the running one, starting from
//! whatever value was on screen at that instant.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::trace;

mod easing;
mod transitions;

pub use easing::Easing;
pub use transitions::{
    resolve, transitions_for, Property, Selector, Target, Transition, Trigger, HOVER_SCALE,
    PX_PER_ROW,
};

/// One running interpolation
#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    fn sample(&self, now: Instant) -> f32 {
        if now <= self.start {
            return self.from;
        }
        if self.finished(now) {
            return self.to;
        }
        let t = now.duration_since(self.start).as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    fn finished(&self, now: Instant) -> bool {
        now >= self.start + self.duration
    }
}

pub struct Animator {
    tweens: HashMap<(Target, Property), Tween>,
    enabled: bool,
}

impl Animator {
    pub fn new(enabled: bool) -> Self {
        Self {
            tweens: HashMap::new(),
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Start every transition registered for `trigger`
    pub fn trigger(&mut self, trigger: Trigger, now: Instant) {
        if !self.enabled {
            return;
        }
        trace!(?trigger, "animation trigger");

        for transition in transitions_for(&trigger) {
            let targets = resolve(transition.selector, &trigger);
            for (i, target) in targets.into_iter().enumerate() {
                let delay = transition.delay_ms + transition.stagger_ms * i as u64;
                let from = transition
                    .from
                    .unwrap_or_else(|| self.sample(target, transition.property, now));
                self.tweens.insert(
                    (target, transition.property),
                    Tween {
                        from,
                        to: transition.to,
                        start: now + Duration::from_millis(delay),
                        duration: Duration::from_millis(transition.duration_ms),
                        easing: transition.easing,
                    },
                );
            }
        }
    }

    /// Current value of a property, or its resting value when idle
    pub fn sample(&self, target: Target, property: Property, now: Instant) -> f32 {
        self.tweens
            .get(&(target, property))
            .map(|tween| tween.sample(now))
            .unwrap_or_else(|| property.rest())
    }

    /// Whether any tween still changes on screen
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tweens.values().any(|tween| !tween.finished(now))
    }

    /// Drop finished tweens that ended at their resting value
    pub fn prune(&mut self, now: Instant) {
        self.tweens.retain(|(_, property), tween| {
            !tween.finished(now) || (tween.to - property.rest()).abs() > f32::EPSILON
        });
    }

    /// Snap an element back to rest
    pub fn reset(&mut self, target: Target) {
        self.tweens.retain(|(t, _), _| *t != target);
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(true)
    }
}
