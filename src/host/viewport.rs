// Scrollable viewport: owns the scroll offset, the smooth-scroll animation
// and the scroll-position stream the tracker listens to

use std::time::{Duration, Instant};

use crate::tracker::{Listeners, ScrollBehavior, ScrollCommand, ScrollEvent, ScrollPhase, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothScroll {
    pub enabled: bool,
    pub duration: Duration,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: u32,
    to: u32,
    started: Instant,
    duration: Duration,
}

/// Ease-in-out cubic over `t` in `[0, 1]`
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug)]
pub struct Viewport {
    offset: u32,
    height: u32,
    content_height: u32,
    smooth: SmoothScroll,
    animation: Option<Animation>,
    scroll: Listeners<ScrollEvent>,
}

impl Viewport {
    pub fn new(smooth: SmoothScroll) -> Self {
        Self {
            offset: 0,
            height: 0,
            content_height: 0,
            smooth,
            animation: None,
            scroll: Listeners::new(),
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn content_height(&self) -> u32 {
        self.content_height
    }

    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.height)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Offset the running animation will settle on
    pub fn animation_target(&self) -> Option<u32> {
        self.animation.map(|a| a.to)
    }

    pub fn scroll_stream(&self) -> &Listeners<ScrollEvent> {
        &self.scroll
    }

    pub fn on_scroll(&self, listener: impl FnMut(&ScrollEvent) + 'static) -> Subscription {
        self.scroll.subscribe(listener)
    }

    /// User scroll by `delta` rows; cancels any running animation.
    pub fn scroll_by(&mut self, delta: i64) {
        let target = (i64::from(self.offset) + delta).clamp(0, i64::from(self.max_offset()));
        // clamped into u32 range above
        self.scroll_to(target as u32);
    }

    /// User jump to `offset`; cancels any running animation.
    ///
    /// Emits when the offset changes or when an animation was cancelled, so
    /// listeners waiting for the animation to settle are always released.
    pub fn scroll_to(&mut self, offset: u32) {
        let cancelled = self.animation.take().is_some();
        let target = offset.min(self.max_offset());
        if target != self.offset || cancelled {
            self.offset = target;
            self.emit(ScrollPhase::User);
        }
    }

    /// Carry out a scroll command issued by the navigator.
    pub fn apply(&mut self, command: ScrollCommand, now: Instant) {
        let target = command.target_offset.min(self.max_offset());
        let animate = command.behavior == ScrollBehavior::Smooth
            && self.smooth.enabled
            && !self.smooth.duration.is_zero()
            && target != self.offset;

        if animate {
            self.animation = Some(Animation {
                from: self.offset,
                to: target,
                started: now,
                duration: self.smooth.duration,
            });
        } else {
            self.animation = None;
            self.offset = target;
            self.emit(ScrollPhase::Settled);
        }
    }

    /// Advance the animation to `now`. Returns true while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };

        let elapsed = now.saturating_duration_since(animation.started);
        if elapsed >= animation.duration {
            self.animation = None;
            self.offset = animation.to;
            self.emit(ScrollPhase::Settled);
            return false;
        }

        let progress = ease_in_out_cubic(elapsed.as_secs_f64() / animation.duration.as_secs_f64());
        let from = f64::from(animation.from);
        let to = f64::from(animation.to);
        let next = (from + (to - from) * progress).round() as u32;
        if next != self.offset {
            self.offset = next;
            self.emit(ScrollPhase::Animating);
        }
        true
    }

    /// Apply new viewport/content dimensions and re-announce the offset.
    pub fn resize(&mut self, height: u32, content_height: u32) {
        self.height = height;
        self.content_height = content_height;
        let max = self.max_offset();

        if let Some(animation) = self.animation.as_mut() {
            animation.to = animation.to.min(max);
        }
        self.offset = self.offset.min(max);

        if self.animation.is_none() {
            self.emit(ScrollPhase::Settled);
        }
    }

    fn emit(&self, phase: ScrollPhase) {
        self.scroll.emit(&ScrollEvent::new(self.offset, phase));
    }
}
