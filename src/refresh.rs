use std::time::{Duration, Instant};

/// Default settle window for resize-driven recomputation.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// What invalidated the current layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecomputeTrigger {
    /// Track list, titles, or palette changed.
    ContentChanged,
    /// The poster container was resized.
    ContainerResized,
    /// Only the user scale slider moved.
    ScaleChanged,
}

/// How much work the next recomputation needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecomputePlan {
    /// Full pass: fit text, re-run the shrink pass, re-apply the scale.
    Full,
    /// Content and dimensions are unchanged; only re-apply the user scale.
    ScaleOnly,
}

/// Coalesces invalidation events into at most one recomputation per settle
/// window.
///
/// The host integration layer owns the event source (resize observer, slider,
/// data updates) and calls [`observe`](Self::observe) per event; it polls
/// [`due`](Self::due) on its own cadence and runs the returned plan. A burst
/// of events keeps pushing the deadline out, so continuous resizing costs one
/// full pass after settling rather than one per event. Time is injected, so
/// the type stays synchronous and testable.
#[derive(Debug)]
pub struct RefreshCoalescer {
    window: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    deadline: Instant,
    scale_only: bool,
}

impl RefreshCoalescer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn observe(&mut self, trigger: RecomputeTrigger, now: Instant) {
        let scale_only = trigger == RecomputeTrigger::ScaleChanged
            && self.pending.as_ref().is_none_or(|p| p.scale_only);
        self.pending = Some(Pending {
            deadline: now + self.window,
            scale_only,
        });
    }

    /// The merged plan once the window has elapsed with no further events;
    /// `None` while idle or still settling.
    pub fn due(&mut self, now: Instant) -> Option<RecomputePlan> {
        let pending = self.pending.as_ref()?;
        if now < pending.deadline {
            return None;
        }
        let plan = if pending.scale_only {
            RecomputePlan::ScaleOnly
        } else {
            RecomputePlan::Full
        };
        self.pending = None;
        Some(plan)
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

impl Default for RefreshCoalescer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_resizes_fires_once() {
        let mut c = RefreshCoalescer::new(Duration::from_millis(150));
        let t0 = Instant::now();
        for i in 0..10 {
            c.observe(
                RecomputeTrigger::ContainerResized,
                t0 + Duration::from_millis(i * 10),
            );
        }
        // Still settling 100 ms after the last event.
        assert_eq!(c.due(t0 + Duration::from_millis(190)), None);
        assert_eq!(
            c.due(t0 + Duration::from_millis(240)),
            Some(RecomputePlan::Full)
        );
        assert!(c.is_idle());
        assert_eq!(c.due(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn scale_alone_yields_scale_only() {
        let mut c = RefreshCoalescer::default();
        let t0 = Instant::now();
        c.observe(RecomputeTrigger::ScaleChanged, t0);
        assert_eq!(
            c.due(t0 + Duration::from_millis(200)),
            Some(RecomputePlan::ScaleOnly)
        );
    }

    #[test]
    fn mixed_triggers_escalate_to_full() {
        let mut c = RefreshCoalescer::default();
        let t0 = Instant::now();
        c.observe(RecomputeTrigger::ContainerResized, t0);
        c.observe(RecomputeTrigger::ScaleChanged, t0 + Duration::from_millis(10));
        assert_eq!(
            c.due(t0 + Duration::from_millis(400)),
            Some(RecomputePlan::Full)
        );
    }

    #[test]
    fn content_change_is_always_full() {
        let mut c = RefreshCoalescer::default();
        let t0 = Instant::now();
        c.observe(RecomputeTrigger::ScaleChanged, t0);
        c.observe(RecomputeTrigger::ContentChanged, t0 + Duration::from_millis(5));
        assert_eq!(
            c.due(t0 + Duration::from_millis(400)),
            Some(RecomputePlan::Full)
        );
    }
}
