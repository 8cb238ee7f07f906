use crate::screen::{route, NavAction, Screen};
use tracing::debug;

/// Holds the current screen. Never refuses a transition; ordering rules live
/// with the callers.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Unconditionally switch to `target`, returning the screen we left.
    pub fn transition(&mut self, target: Screen) -> Screen {
        let from = self.current;
        self.current = target;
        debug!(%from, to = %target, "screen transition");
        from
    }

    /// Follow an affordance of the current screen. Returns the new screen, or
    /// `None` (state untouched) if the screen does not expose `action`.
    pub fn apply(&mut self, action: NavAction) -> Option<Screen> {
        let target = route(self.current, action)?;
        self.transition(target);
        Some(target)
    }
}
