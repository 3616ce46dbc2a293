//! The running application: screens, the current match and the leaderboard

use game_core::{GameRng, Match, MatchSetup, Snapshot};
use leaderboard::Leaderboard;
use rand::Rng;

use crate::env::{Environment, FixedRate};
use crate::fsm::{AppAction, AppFsm, AppState};
use crate::input::{menu_action, InputEvent, KeyState};
use crate::render::{Renderer, View};
use crate::settings::Settings;
use crate::source::InputSource;

/// Owns everything one program run needs.
///
/// Events are applied between ticks; `tick` advances the match (if one is
/// running) by exactly one step.
pub struct Session {
    settings: Settings,
    fsm: AppFsm,
    keys: KeyState,
    leaderboard: Leaderboard,
    game: Option<Match>,
    rng: GameRng,
    tick: u64,
}

impl Session {
    /// `rng` seeds every match this session starts
    pub fn new(settings: Settings, leaderboard: Leaderboard, rng: GameRng) -> Self {
        Self {
            settings,
            fsm: AppFsm::new(),
            keys: KeyState::new(),
            leaderboard,
            game: None,
            rng,
            tick: 0,
        }
    }

    pub fn state(&self) -> AppState {
        self.fsm.state()
    }

    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    /// Ticks run so far, menu time included
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn game(&self) -> Option<&Match> {
        self.game.as_ref()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.game.as_ref().map(Match::snapshot)
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.keys.press(key);
                if let Some(action) = menu_action(self.fsm.state(), key) {
                    self.apply(action);
                }
            }
            InputEvent::KeyUp(key) => self.keys.release(key),
            InputEvent::Quit => self.apply(AppAction::Quit),
        }
    }

    /// Advance one tick
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.tick += 1;

        if let Some(game) = self.game.as_mut() {
            game.step(&self.keys.paddle_input());
        }
    }

    /// What the renderer should show now
    pub fn view(&self) -> View {
        match (self.fsm.state(), &self.game) {
            (AppState::Playing, Some(game)) => View::Match {
                snapshot: game.snapshot(),
                field_width: game.map().width,
                field_height: game.map().height,
            },
            (AppState::Leaderboard, _) => View::Leaderboard(self.leaderboard.get().to_vec()),
            (AppState::Exited, _) => View::Exited,
            _ => View::Menu,
        }
    }

    fn apply(&mut self, action: AppAction) {
        let result = self.fsm.transition(action);
        if !result.success {
            return;
        }

        if result.from_state == AppState::Playing {
            self.finish_match();
        }

        if result.to_state == AppState::Playing {
            let setup = match action {
                AppAction::PlayVsPlayer => MatchSetup::versus()
                    .with_names(&self.settings.player_one, &self.settings.player_two),
                _ => MatchSetup::versus_ai(self.settings.ai_difficulty)
                    .with_names(&self.settings.player_one, &self.settings.ai_name),
            };
            self.start_match(&setup);
        }
    }

    fn start_match(&mut self, setup: &MatchSetup) {
        self.keys.release_all();
        let rng = GameRng::new(self.rng.0.gen());

        match Match::new(setup, self.settings.game.clone(), rng) {
            Ok(game) => self.game = Some(game),
            Err(err) => {
                log::error!("Cannot start match: {err}");
                self.fsm.transition(AppAction::Back);
            }
        }
    }

    /// Record every human player's score. A failed save keeps the session
    /// alive; the entry is still shown until the program exits.
    fn finish_match(&mut self) {
        let Some(game) = self.game.take() else {
            return;
        };
        self.keys.release_all();

        let (left, right) = game.scores();
        log::info!("Match over after {} ticks: {left} - {right}", game.tick());

        for (name, score) in game.human_results() {
            if self.leaderboard.qualifies(score) {
                log::info!("{name} made the leaderboard with {score}");
            }
            if let Err(err) = self.leaderboard.update(&name, score) {
                log::warn!("Leaderboard not saved: {err}");
            }
        }
    }
}

/// Loop options
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Stop (as if the window closed) after this many ticks
    pub max_ticks: Option<u64>,
    /// Draw every n-th tick; 0 disables drawing
    pub render_every: u64,
    /// Sleep to hold the tick rate
    pub paced: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_ticks: None,
            render_every: 1,
            paced: true,
        }
    }
}

/// Drive `session` until it exits: input, one tick, render, wait.
pub fn run(
    session: &mut Session,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    env: &dyn Environment,
    options: RunOptions,
) -> std::io::Result<()> {
    let tick_rate = session.settings.tick_rate;
    let mut scheduler = FixedRate::new(tick_rate);

    while session.is_running() {
        let tick = session.tick_count();
        if options.max_ticks.is_some_and(|max| tick >= max) {
            log::info!("Tick limit {tick} reached");
            session.handle_event(InputEvent::Quit);
            break;
        }

        let snapshot = session.snapshot();
        for event in input.poll(tick, snapshot.as_ref()) {
            session.handle_event(event);
        }
        if !session.is_running() {
            break;
        }

        session.tick();

        if options.render_every > 0 && session.tick_count() % options.render_every == 0 {
            renderer.draw(&session.view())?;
        }

        if session.tick_count() % u64::from(tick_rate) == 0 {
            match session.game() {
                Some(game) => {
                    let (left, right) = game.scores();
                    log::debug!("tick={} score={left}-{right}", session.tick_count());
                }
                None => log::debug!("tick={} state={:?}", session.tick_count(), session.state()),
            }
        }

        if options.paced {
            scheduler.wait(env);
        }
    }

    renderer.draw(&session.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use leaderboard::{LeaderboardEntry, MemoryStorage};

    fn new_session(storage: MemoryStorage) -> Session {
        let leaderboard = Leaderboard::load(Box::new(storage));
        Session::new(Settings::default(), leaderboard, GameRng::new(12345))
    }

    fn press(session: &mut Session, key: Key) {
        session.handle_event(InputEvent::KeyDown(key));
        session.handle_event(InputEvent::KeyUp(key));
    }

    #[test]
    fn test_menu_starts_ai_match() {
        let mut session = new_session(MemoryStorage::new());
        press(&mut session, Key::Digit1);

        assert_eq!(session.state(), AppState::Playing);
        let game = session.game().unwrap();
        assert!(game.is_ai(game_core::Side::Right));
    }

    #[test]
    fn test_menu_starts_versus_match() {
        let mut session = new_session(MemoryStorage::new());
        press(&mut session, Key::Digit2);

        let game = session.game().unwrap();
        assert!(!game.is_ai(game_core::Side::Right));
        assert_eq!(game.player(game_core::Side::Right).unwrap().name, "Player 2");
    }

    #[test]
    fn test_held_key_moves_paddle() {
        let mut session = new_session(MemoryStorage::new());
        press(&mut session, Key::Digit2);
        session.handle_event(InputEvent::KeyDown(Key::ArrowUp));
        session.tick();
        session.tick();

        let top = session.game().unwrap().paddle_rect(game_core::Side::Right).top();
        assert_eq!(top, 245.0);
    }

    #[test]
    fn test_escape_records_human_only() {
        let storage = MemoryStorage::new();
        let mut session = new_session(storage.clone());
        press(&mut session, Key::Digit1);
        press(&mut session, Key::Escape);

        assert_eq!(session.state(), AppState::Menu);
        assert!(session.game().is_none());
        assert_eq!(session.leaderboard().get(), &[LeaderboardEntry::new("Player 1", 0)]);
        assert!(storage.contents().is_some());
    }

    #[test]
    fn test_versus_records_both_players() {
        let mut session = new_session(MemoryStorage::new());
        press(&mut session, Key::Digit2);
        session.handle_event(InputEvent::Quit);

        assert!(!session.is_running());
        assert_eq!(session.leaderboard().get().len(), 2);
    }

    #[test]
    fn test_failed_save_keeps_session_running() {
        let mut session = new_session(MemoryStorage::new().read_only());
        press(&mut session, Key::Digit1);
        press(&mut session, Key::Escape);

        assert!(session.is_running());
        assert_eq!(session.leaderboard().get().len(), 1);
    }

    #[test]
    fn test_leaderboard_screen() {
        let storage = MemoryStorage::with_contents(r#"[{"name":"Bob","score":10}]"#);
        let mut session = new_session(storage);
        press(&mut session, Key::Digit3);

        assert_eq!(
            session.view(),
            View::Leaderboard(vec![LeaderboardEntry::new("Bob", 10)])
        );
        press(&mut session, Key::Escape);
        assert_eq!(session.view(), View::Menu);
    }

    #[test]
    fn test_menu_quit_key() {
        let mut session = new_session(MemoryStorage::new());
        press(&mut session, Key::Digit4);
        assert!(!session.is_running());
        assert_eq!(session.view(), View::Exited);
    }

    #[test]
    fn test_no_ticks_after_exit() {
        let mut session = new_session(MemoryStorage::new());
        session.handle_event(InputEvent::Quit);
        session.tick();
        assert_eq!(session.tick_count(), 0);
    }
}
