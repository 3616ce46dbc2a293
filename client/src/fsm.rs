//! Application State Machine
//!
//! Menu, match and leaderboard screens with keyboard-driven transitions.

/// Application states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Playing,
    Leaderboard,
    Exited,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    PlayVsAi,
    PlayVsPlayer,
    ShowLeaderboard,
    Back,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: AppState,
    pub to_state: AppState,
    pub action: AppAction,
}

/// Next state for `action` taken in `state`, if the move is allowed
pub fn next_state(state: AppState, action: AppAction) -> Option<AppState> {
    match (state, action) {
        // From Menu
        (AppState::Menu, AppAction::PlayVsAi) => Some(AppState::Playing),
        (AppState::Menu, AppAction::PlayVsPlayer) => Some(AppState::Playing),
        (AppState::Menu, AppAction::ShowLeaderboard) => Some(AppState::Leaderboard),

        // Back to the menu
        (AppState::Playing, AppAction::Back) => Some(AppState::Menu),
        (AppState::Leaderboard, AppAction::Back) => Some(AppState::Menu),

        // Window close works everywhere
        (AppState::Exited, _) => None,
        (_, AppAction::Quit) => Some(AppState::Exited),

        // Invalid transition
        _ => None,
    }
}

/// Application Finite State Machine
#[derive(Debug)]
pub struct AppFsm {
    state: AppState,
}

impl AppFsm {
    pub fn new() -> Self {
        Self {
            state: AppState::Menu,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn can_transition(&self, action: AppAction) -> bool {
        next_state(self.state, action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: AppAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next) = next_state(from_state, action) {
            self.state = next;
            log::debug!("{from_state:?} --{action:?}--> {next:?}");
            TransitionResult {
                success: true,
                from_state,
                to_state: next,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == AppState::Playing
    }

    pub fn is_running(&self) -> bool {
        self.state != AppState::Exited
    }
}

impl Default for AppFsm {
    fn default() -> Self {
        Self::new()
    }
}
