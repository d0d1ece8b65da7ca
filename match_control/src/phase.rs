//! Match Phase State Machine
//!
//! An explicit phase enum plus an orthogonal pause overlay. Pausing never
//! discards the phase it interrupts; resuming restores it unchanged.

/// Match lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Menu,
    Playing,
    /// Regulation time expired with equal scores; simulation frozen while
    /// the sudden-death transition delay runs
    Tied,
    GoldenGoal,
    Finished,
}

/// Phase plus pause overlay, with illegal combinations rejected at the
/// boundary: only the running phases can carry the pause flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseState {
    phase: MatchPhase,
    paused: bool,
}

impl PhaseState {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Menu,
            paused: false,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Playing or GoldenGoal, paused or not
    pub fn is_running(&self) -> bool {
        matches!(self.phase, MatchPhase::Playing | MatchPhase::GoldenGoal)
    }

    /// Running and not paused: per-tick logic may proceed
    pub fn is_simulating(&self) -> bool {
        self.is_running() && !self.paused
    }

    /// Enter a new phase. Leaving the running phases clears the pause
    /// overlay so no illegal (phase, paused) pair can be observed.
    pub fn set_phase(&mut self, next: MatchPhase) {
        self.phase = next;
        if !self.is_running() {
            self.paused = false;
        }
    }

    /// Drop the pause overlay without touching the phase
    pub fn clear_pause(&mut self) {
        self.paused = false;
    }

    /// Attempt to pause. Legal only while running and not already paused.
    pub fn try_pause(&mut self) -> bool {
        if !self.is_running() || self.paused {
            return false;
        }
        self.paused = true;
        true
    }

    /// Attempt to resume. Legal only while paused.
    pub fn try_resume(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        true
    }
}

impl Default for PhaseState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PhaseState::new();
        assert_eq!(state.phase(), MatchPhase::Menu);
        assert!(!state.is_paused());
        assert!(!state.is_running());
    }

    #[test]
    fn test_pause_rejected_outside_running_phases() {
        for phase in [MatchPhase::Menu, MatchPhase::Tied, MatchPhase::Finished] {
            let mut state = PhaseState::new();
            state.set_phase(phase);
            assert!(!state.try_pause(), "pause must be rejected in {phase:?}");
            assert!(!state.is_paused());
        }
    }

    #[test]
    fn test_pause_preserves_underlying_phase() {
        for phase in [MatchPhase::Playing, MatchPhase::GoldenGoal] {
            let mut state = PhaseState::new();
            state.set_phase(phase);
            assert!(state.try_pause());
            assert_eq!(state.phase(), phase);
            assert!(!state.is_simulating());
            assert!(state.try_resume());
            assert_eq!(state.phase(), phase);
            assert!(state.is_simulating());
        }
    }

    #[test]
    fn test_double_pause_and_double_resume_rejected() {
        let mut state = PhaseState::new();
        state.set_phase(MatchPhase::Playing);
        assert!(state.try_pause());
        assert!(!state.try_pause());
        assert!(state.try_resume());
        assert!(!state.try_resume());
    }

    #[test]
    fn test_clear_pause_keeps_phase() {
        let mut state = PhaseState::new();
        state.set_phase(MatchPhase::Playing);
        state.try_pause();
        state.clear_pause();
        assert!(!state.is_paused());
        assert_eq!(state.phase(), MatchPhase::Playing);
        assert!(state.is_simulating());
    }

    #[test]
    fn test_leaving_running_phase_clears_pause() {
        let mut state = PhaseState::new();
        state.set_phase(MatchPhase::Playing);
        state.try_pause();
        state.set_phase(MatchPhase::Menu);
        assert!(!state.is_paused(), "no (Menu, paused) combination");
    }
}
