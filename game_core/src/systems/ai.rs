use hecs::World;
use rand::Rng;

use crate::{AiController, Ball, Config, Controller, GameMap, GameRng, Paddle, Rect};

impl AiController {
    /// Where the AI aims this tick: the ball's top edge plus a fresh random
    /// error of at most `prediction_error` either way. Re-rolled every call.
    pub fn target_y(&self, ball: &Rect, rng: &mut GameRng) -> f32 {
        let error = self.difficulty.prediction_error();
        let jitter = rng.0.gen_range(-error..=error);
        ball.top() + jitter as f32
    }

    /// Step the paddle towards the target and keep it inside the field
    pub fn move_paddle(
        &self,
        paddle: &mut Rect,
        ball: &Rect,
        map: &GameMap,
        config: &Config,
        rng: &mut GameRng,
    ) {
        let target_y = self.target_y(ball, rng);
        let speed = config.paddle_speed * self.difficulty.speed_factor();

        let center_y = paddle.center_y();
        if center_y < target_y {
            paddle.min.y += speed;
        } else if center_y > target_y {
            paddle.min.y -= speed;
        }

        paddle.clamp_within(&map.bounds());
    }
}

/// Move every AI-controlled paddle
pub fn drive_ai(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    let ball_rect = match world.query::<&Ball>().iter().next().map(|(_e, ball)| ball.rect) {
        Some(rect) => rect,
        None => return, // No ball in world
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if let Controller::Ai(ai) = controller {
            ai.move_paddle(&mut paddle.rect, &ball_rect, map, config, rng);
        }
    }
}
