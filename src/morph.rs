//! The card's single binary state and its toggle.

/// Which arrangement the scene is converging toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Dispersed through the scatter sphere.
    #[default]
    Scattered,
    /// Gathered into the mushroom tree.
    Tree,
}

/// Two-state machine behind the toggle input.
///
/// The visible morph is continuous, but from here the state is binary and
/// flips instantly; the fields own their own progress trackers and chase
/// whatever this currently reads.
#[derive(Debug, Default)]
pub struct MorphController {
    state: AppState,
}

impl MorphController {
    /// Start scattered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, read-only.
    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn is_tree(&self) -> bool {
        self.state == AppState::Tree
    }

    /// Flip the state unconditionally. The sole mutator.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            AppState::Scattered => AppState::Tree,
            AppState::Tree => AppState::Scattered,
        };
    }

    /// Progress value the particle field should converge toward.
    pub fn target_progress(&self) -> f32 {
        match self.state {
            AppState::Scattered => 0.0,
            AppState::Tree => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_scattered() {
        let morph = MorphController::new();
        assert_eq!(morph.state(), AppState::Scattered);
        assert!(!morph.is_tree());
        assert_eq!(morph.target_progress(), 0.0);
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut morph = MorphController::new();
        morph.toggle();
        assert_eq!(morph.state(), AppState::Tree);
        assert_eq!(morph.target_progress(), 1.0);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let mut morph = MorphController::new();
        let initial = morph.state();
        morph.toggle();
        morph.toggle();
        assert_eq!(morph.state(), initial);
    }
}
