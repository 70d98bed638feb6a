//! Height transition state machine for the collapse content region.
//!
//! Expansion runs through four phases:
//!
//! ```text
//! Collapsed --open--> Entering --(complete)--> Expanded
//! Expanded --close--> Exiting --(complete)--> Collapsed
//! ```
//!
//! Opening forces the height to zero, then animates to the measured
//! natural height, then releases it to auto. Closing captures the
//! current rendered height and animates down to zero; once the exit
//! completes the region is hidden entirely. Interrupting an animation
//! reverses from the current interpolated height rather than jumping.

use std::time::{Duration, Instant};

use paneldom::animation::lerp_u16;
use paneldom::transitions::{Easing, TransitionConfig};

/// Phase of the content region's expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldPhase {
    #[default]
    Collapsed,
    Entering,
    Expanded,
    Exiting,
}

/// Edge event emitted when the machine changes phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldEdge {
    /// An expand animation started (height forced to its start value).
    Enter,
    /// The expand animation completed (height released to auto).
    Entered,
    /// A collapse animation started (height captured from the current
    /// rendered height).
    Exit,
    /// The collapse animation completed (region hidden).
    Exited,
}

#[derive(Debug, Clone)]
pub struct FoldTransition {
    phase: FoldPhase,
    from: u16,
    to: u16,
    start: Instant,
    config: TransitionConfig,
    reduced_motion: bool,
}

impl FoldTransition {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

    /// A collapsed transition with the default timing.
    pub fn new() -> Self {
        Self::with_config(TransitionConfig::new(
            Self::DEFAULT_DURATION,
            Easing::EaseInOut,
        ))
    }

    pub fn with_config(config: TransitionConfig) -> Self {
        Self {
            phase: FoldPhase::Collapsed,
            from: 0,
            to: 0,
            start: Instant::now(),
            config,
            reduced_motion: false,
        }
    }

    /// A transition that starts already expanded (no enter animation).
    pub fn expanded() -> Self {
        Self {
            phase: FoldPhase::Expanded,
            ..Self::new()
        }
    }

    pub fn expanded_with(config: TransitionConfig) -> Self {
        Self {
            phase: FoldPhase::Expanded,
            ..Self::with_config(config)
        }
    }

    /// When enabled, open/close complete on the next tick.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn phase(&self) -> FoldPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, FoldPhase::Entering | FoldPhase::Exiting)
    }

    /// Whether the content region is fully hidden (display none).
    pub fn hidden(&self) -> bool {
        self.phase == FoldPhase::Collapsed
    }

    /// Begin expanding toward `target` rows.
    ///
    /// From `Collapsed` the height starts at zero; interrupting an exit
    /// resumes from the current interpolated height.
    pub fn open(&mut self, target: u16, now: Instant) -> Option<FoldEdge> {
        match self.phase {
            FoldPhase::Collapsed => {
                self.from = 0;
            }
            FoldPhase::Exiting => {
                self.from = self.interpolated(now);
            }
            FoldPhase::Entering => {
                // Already opening; retarget without restarting.
                self.to = target;
                return None;
            }
            FoldPhase::Expanded => return None,
        }
        self.to = target;
        self.start = now;
        self.phase = FoldPhase::Entering;
        log::trace!("fold enter: 0 -> {target}");
        Some(FoldEdge::Enter)
    }

    /// Begin collapsing toward zero.
    ///
    /// `natural` is the region's current rendered height (the offset
    /// height analog); an interrupted enter resumes from its
    /// interpolated height instead.
    pub fn close(&mut self, natural: u16, now: Instant) -> Option<FoldEdge> {
        match self.phase {
            FoldPhase::Expanded => {
                self.from = natural;
            }
            FoldPhase::Entering => {
                self.from = self.interpolated(now);
            }
            FoldPhase::Collapsed | FoldPhase::Exiting => return None,
        }
        self.to = 0;
        self.start = now;
        self.phase = FoldPhase::Exiting;
        log::trace!("fold exit: {} -> 0", self.from);
        Some(FoldEdge::Exit)
    }

    /// Advance the machine; emits the completion edge when an
    /// animation finishes.
    pub fn tick(&mut self, now: Instant) -> Option<FoldEdge> {
        if !self.is_animating() || self.progress(now) < 1.0 {
            return None;
        }
        match self.phase {
            FoldPhase::Entering => {
                self.phase = FoldPhase::Expanded;
                log::trace!("fold entered");
                Some(FoldEdge::Entered)
            }
            FoldPhase::Exiting => {
                self.phase = FoldPhase::Collapsed;
                log::trace!("fold exited");
                Some(FoldEdge::Exited)
            }
            _ => None,
        }
    }

    /// Height to render the content region at.
    ///
    /// `None` means natural height (auto); `Some` pins the height
    /// during animation and while collapsed.
    pub fn height(&self, now: Instant) -> Option<u16> {
        match self.phase {
            FoldPhase::Collapsed => Some(0),
            FoldPhase::Expanded => None,
            FoldPhase::Entering | FoldPhase::Exiting => Some(self.interpolated(now)),
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.reduced_motion || self.config.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
    }

    fn interpolated(&self, now: Instant) -> u16 {
        let eased = self.config.easing.apply(self.progress(now));
        lerp_u16(self.from, self.to, eased)
    }
}

impl Default for FoldTransition {
    fn default() -> Self {
        Self::new()
    }
}
