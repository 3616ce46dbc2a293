pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by exactly one fixed tick
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    input: &InputState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Human paddles follow held keys
    ingest_inputs(world, input);
    move_paddles(world, map, config);

    // 2. AI paddles chase the ball
    drive_ai(world, map, config, rng);

    // 3. Move ball (walls bounce here)
    move_ball(world, map, events);

    // 4. Ball vs paddles
    check_collisions(world, events);

    // 5. Ball reached a side wall
    check_scoring(world, map, config, events, rng);
}

/// Helper to create a player entity with its paddle at the spawn position
pub fn create_player(
    world: &mut World,
    name: &str,
    side: Side,
    controller: Controller,
    map: &GameMap,
    config: &Config,
) -> hecs::Entity {
    let player = Player::new(name, side);
    let paddle = Paddle::new(side, map.paddle_spawn(side, config));
    match controller {
        Controller::Human => world.spawn((player, paddle, controller, PaddleIntent::new())),
        Controller::Ai(_) => world.spawn((player, paddle, controller)),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(rect, vel),))
}
