use hecs::World;

use crate::{
    create_ball, create_player, step, AiController, Ball, Config, ConfigError, Controller,
    Difficulty, Events, GameMap, GameRng, InputState, Paddle, Player, Rect, Side, Snapshot,
};

/// Who plays on the right-hand side
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchMode {
    /// Human on the left, AI on the right
    VersusAi { difficulty: Difficulty },
    /// Two humans on one keyboard
    Versus,
}

/// Everything needed to start a match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSetup {
    pub mode: MatchMode,
    pub left_name: String,
    pub right_name: String,
}

impl MatchSetup {
    pub fn versus_ai(difficulty: Difficulty) -> Self {
        Self {
            mode: MatchMode::VersusAi { difficulty },
            left_name: "Player 1".to_string(),
            right_name: "AI".to_string(),
        }
    }

    pub fn versus() -> Self {
        Self {
            mode: MatchMode::Versus,
            left_name: "Player 1".to_string(),
            right_name: "Player 2".to_string(),
        }
    }

    pub fn with_names(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_name = left.into();
        self.right_name = right.into();
        self
    }

    fn right_controller(&self) -> Controller {
        match self.mode {
            MatchMode::VersusAi { difficulty } => Controller::Ai(AiController::new(difficulty)),
            MatchMode::Versus => Controller::Human,
        }
    }
}

/// One running match: the ball, both players and the dice.
///
/// The match has no end condition of its own; the caller decides when to
/// stop stepping it.
pub struct Match {
    world: World,
    map: GameMap,
    config: Config,
    events: Events,
    rng: GameRng,
    mode: MatchMode,
    tick: u64,
}

impl Match {
    pub fn new(setup: &MatchSetup, config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let map = GameMap::from_config(&config);
        let mut world = World::new();

        create_player(
            &mut world,
            &setup.left_name,
            Side::Left,
            Controller::Human,
            &map,
            &config,
        );
        create_player(
            &mut world,
            &setup.right_name,
            Side::Right,
            setup.right_controller(),
            &map,
            &config,
        );

        let ball = Ball::spawn(&map, &config, &mut rng);
        create_ball(&mut world, ball.rect, ball.vel);

        log::info!(
            "Match started: {} vs {} ({:?})",
            setup.left_name,
            setup.right_name,
            setup.mode
        );

        Ok(Self {
            world,
            map,
            config,
            events: Events::new(),
            rng,
            mode: setup.mode,
            tick: 0,
        })
    }

    /// Advance one tick and return what happened during it
    pub fn step(&mut self, input: &InputState) -> &Events {
        self.tick += 1;

        step(
            &mut self.world,
            &self.map,
            &self.config,
            input,
            &mut self.events,
            &mut self.rng,
        );

        if let Some(side) = self.events.scorer() {
            let (left, right) = self.scores();
            log::info!("{side:?} scored at tick {}: {left} - {right}", self.tick);
        }

        &self.events
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.map.ball_spawn(self.config.ball_size), glam::Vec2::ZERO))
    }

    /// Replace the ball's position and velocity (scripted serves, tests)
    pub fn set_ball(&mut self, rect: Rect, vel: glam::Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.rect = rect;
            ball.vel = vel;
        }
    }

    pub fn paddle_rect(&self, side: Side) -> Rect {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.rect)
            .unwrap_or_else(|| self.map.paddle_spawn(side, &self.config))
    }

    pub fn player(&self, side: Side) -> Option<Player> {
        self.world
            .query::<&Player>()
            .iter()
            .find(|(_e, player)| player.side == side)
            .map(|(_e, player)| player.clone())
    }

    pub fn is_ai(&self, side: Side) -> bool {
        self.world
            .query::<(&Player, &Controller)>()
            .iter()
            .any(|(_e, (player, controller))| player.side == side && controller.is_ai())
    }

    /// (left, right)
    pub fn scores(&self) -> (u32, u32) {
        let mut left = 0;
        let mut right = 0;
        for (_e, player) in self.world.query::<&Player>().iter() {
            match player.side {
                Side::Left => left = player.score,
                Side::Right => right = player.score,
            }
        }
        (left, right)
    }

    /// Name and score of every human player, left first
    pub fn human_results(&self) -> Vec<(String, u32)> {
        let mut results: Vec<(Side, String, u32)> = self
            .world
            .query::<(&Player, &Controller)>()
            .iter()
            .filter(|(_e, (_player, controller))| !controller.is_ai())
            .map(|(_e, (player, _controller))| (player.side, player.name.clone(), player.score))
            .collect();
        results.sort_by_key(|(side, _, _)| *side == Side::Right);
        results
            .into_iter()
            .map(|(_side, name, score)| (name, score))
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball();
        let (score_left, score_right) = self.scores();
        Snapshot {
            tick: self.tick,
            ball: ball.rect,
            ball_vel: ball.vel,
            paddle_left: self.paddle_rect(Side::Left),
            paddle_right: self.paddle_rect(Side::Right),
            score_left,
            score_right,
        }
    }
}
