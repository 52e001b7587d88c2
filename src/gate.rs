//! One-shot mount gate for deferred copy duplication.

/// State of a [`ReadyGate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// Nothing scheduled yet
    #[default]
    Idle,
    /// The deferred flip is scheduled and may still be cancelled
    Scheduled,
    /// The flip fired; the full copy count renders from now on
    Ready,
    /// Unmounted before the flip fired
    Cancelled,
}

/// One-shot gate that delays full copy duplication until a scheduling tick
/// after mount.
///
/// Rendering a single copy on the very first pass avoids a visible flash of
/// duplicated, not-yet-animated content before the container has its final
/// measured size. The gate manages state only and owns no timer: the caller
/// schedules the zero-delay callback and must cancel it if the component
/// unmounts first. The `web` feature wires this to `setTimeout` and
/// `clearTimeout`.
///
/// ## Example
///
/// ```rust
/// use marquee_view::ReadyGate;
///
/// let mut gate = ReadyGate::new();
/// assert!(!gate.is_ready());
///
/// // At mount, schedule the deferred flip; when the tick fires, complete it.
/// assert!(gate.schedule());
/// assert!(gate.fire());
/// assert!(gate.is_ready());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadyGate {
    state: GateState,
}

impl ReadyGate {
    /// Create a gate in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current gate state.
    #[inline]
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Whether the full copy count should render.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == GateState::Ready
    }

    /// Mark the deferred flip as scheduled.
    ///
    /// Returns false once the gate has left the idle state; scheduling
    /// happens at most once per mount.
    pub fn schedule(&mut self) -> bool {
        if self.state == GateState::Idle {
            self.state = GateState::Scheduled;
            true
        } else {
            false
        }
    }

    /// Complete the scheduled flip.
    ///
    /// Returns true when the gate transitioned to ready. Firing without a
    /// schedule, after cancellation, or a second time is a no-op.
    pub fn fire(&mut self) -> bool {
        if self.state == GateState::Scheduled {
            self.state = GateState::Ready;
            true
        } else {
            false
        }
    }

    /// Cancel a still-pending flip (unmount before the tick fired).
    pub fn cancel(&mut self) {
        if self.state == GateState::Scheduled {
            self.state = GateState::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut gate = ReadyGate::new();
        assert_eq!(gate.state(), GateState::Idle);
        assert!(!gate.is_ready());

        assert!(gate.schedule());
        assert_eq!(gate.state(), GateState::Scheduled);
        assert!(!gate.is_ready());

        assert!(gate.fire());
        assert_eq!(gate.state(), GateState::Ready);
        assert!(gate.is_ready());
    }

    #[test]
    fn test_schedule_is_one_shot() {
        let mut gate = ReadyGate::new();
        assert!(gate.schedule());
        assert!(!gate.schedule());

        gate.fire();
        assert!(!gate.schedule());
    }

    #[test]
    fn test_fire_requires_schedule() {
        let mut gate = ReadyGate::new();
        assert!(!gate.fire());
        assert_eq!(gate.state(), GateState::Idle);
    }

    #[test]
    fn test_cancel_blocks_fire() {
        let mut gate = ReadyGate::new();
        gate.schedule();
        gate.cancel();
        assert_eq!(gate.state(), GateState::Cancelled);

        // A late tick after teardown must not mutate state.
        assert!(!gate.fire());
        assert!(!gate.is_ready());
    }

    #[test]
    fn test_cancel_after_ready_is_noop() {
        let mut gate = ReadyGate::new();
        gate.schedule();
        gate.fire();
        gate.cancel();
        assert_eq!(gate.state(), GateState::Ready);
    }

    #[test]
    fn test_fire_is_one_shot() {
        let mut gate = ReadyGate::new();
        gate.schedule();
        assert!(gate.fire());
        assert!(!gate.fire());
        assert!(gate.is_ready());
    }
}
