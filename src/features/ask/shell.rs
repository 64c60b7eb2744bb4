//! Expand/collapse state machine for the Ask widget
//!
//! Collapsed → Expanding → Expanded → Collapsing → Collapsed
//!
//! Each chain runs two timed steps driven by one owned [`DelayedAction`]:
//!
//! | Chain     | +fade_out                         | +settle                          |
//! |-----------|-----------------------------------|----------------------------------|
//! | Expand    | grow container, show panel        | state = Expanded                 |
//! | Collapse  | shrink container                  | show pill, state = Collapsed     |
//!
//! The first view is hidden synchronously when the chain starts. Triggers
//! that arrive in a state that cannot accept them are dropped, never queued.

use std::time::Duration;

use iced::time::Instant;

use super::timer::DelayedAction;

/// Fade-out window before the container starts changing shape
pub const FADE_OUT: Duration = Duration::from_millis(100);
/// Time the container gets to settle before the chain finishes
pub const SETTLE: Duration = Duration::from_millis(400);

/// Visible state of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

impl WidgetState {
    /// Stable states accept user triggers; transitional ones do not
    pub fn is_transitional(self) -> bool {
        matches!(self, WidgetState::Expanding | WidgetState::Collapsing)
    }
}

/// Inputs to the transition function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The collapsed pill was activated
    Activate,
    /// Explicit collapse (keyboard, host request)
    Collapse,
    /// Pointer pressed outside the widget bounds
    OutsideClick,
}

/// Timed step of an in-flight chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    RevealPanel,
    FinishExpand,
    ShrinkContainer,
    RevealPill,
}

/// Durations of the two timed steps of each chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellTimings {
    pub fade_out: Duration,
    pub settle: Duration,
}

impl Default for ShellTimings {
    fn default() -> Self {
        Self {
            fade_out: FADE_OUT,
            settle: SETTLE,
        }
    }
}

/// A state change reported back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: WidgetState,
    pub to: WidgetState,
}

/// The widget shell: one state, three view flags, one timer
#[derive(Debug, Clone)]
pub struct WidgetShell {
    state: WidgetState,
    show_collapsed: bool,
    show_expanded: bool,
    geometry_expanded: bool,
    timer: DelayedAction<Step>,
    timings: ShellTimings,
}

impl Default for WidgetShell {
    fn default() -> Self {
        Self::new(ShellTimings::default())
    }
}

impl WidgetShell {
    pub fn new(timings: ShellTimings) -> Self {
        Self {
            state: WidgetState::Collapsed,
            show_collapsed: true,
            show_expanded: false,
            geometry_expanded: false,
            timer: DelayedAction::new(),
            timings,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// True for the whole duration of either chain
    pub fn is_animating(&self) -> bool {
        self.state.is_transitional()
    }

    pub fn show_collapsed(&self) -> bool {
        self.show_collapsed
    }

    pub fn show_expanded(&self) -> bool {
        self.show_expanded
    }

    /// Whether the container geometry currently targets the expanded size
    pub fn geometry_expanded(&self) -> bool {
        self.geometry_expanded
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// The transition function. Returns `None` when the event is ignored.
    pub fn handle(&mut self, event: ShellEvent, now: Instant) -> Option<Transition> {
        let from = self.state;
        match (self.state, event) {
            (WidgetState::Collapsed, ShellEvent::Activate) => {
                self.state = WidgetState::Expanding;
                self.show_collapsed = false;
                self.timer
                    .schedule(Step::RevealPanel, self.timings.fade_out, now);
            }
            (WidgetState::Expanded, ShellEvent::Collapse | ShellEvent::OutsideClick) => {
                self.state = WidgetState::Collapsing;
                self.show_expanded = false;
                self.timer
                    .schedule(Step::ShrinkContainer, self.timings.fade_out, now);
            }
            (state, event) => {
                tracing::trace!("Ignoring {:?} while {:?}", event, state);
                return None;
            }
        }
        Some(Transition {
            from,
            to: self.state,
        })
    }

    /// Fire every step that is due at `now`, in scheduling order.
    ///
    /// Follow-up steps are scheduled from the deadline of the step that
    /// produced them, so a late tick catches up instead of stretching the
    /// chain. Returns the last state change, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        let mut last = None;
        while let Some(fired) = self.timer.poll(now) {
            if let Some(t) = self.apply(fired.action, fired.due) {
                last = Some(t);
            }
        }
        last
    }

    fn apply(&mut self, step: Step, at: Instant) -> Option<Transition> {
        let from = self.state;
        match step {
            Step::RevealPanel => {
                self.geometry_expanded = true;
                self.show_expanded = true;
                self.timer.schedule(Step::FinishExpand, self.timings.settle, at);
                None
            }
            Step::FinishExpand => {
                self.state = WidgetState::Expanded;
                Some(Transition {
                    from,
                    to: self.state,
                })
            }
            Step::ShrinkContainer => {
                self.geometry_expanded = false;
                self.timer.schedule(Step::RevealPill, self.timings.settle, at);
                None
            }
            Step::RevealPill => {
                self.show_collapsed = true;
                self.state = WidgetState::Collapsed;
                Some(Transition {
                    from,
                    to: self.state,
                })
            }
        }
    }

    /// Abandon any chain and return to the initial collapsed state
    pub fn reset(&mut self) {
        if self.timer.cancel() {
            tracing::debug!("Cancelled pending step while {:?}", self.state);
        }
        *self = Self::new(self.timings);
    }
}
