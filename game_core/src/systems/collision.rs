use hecs::World;

use crate::{Ball, Events, Paddle, Rect};

/// Bounce the ball horizontally off any paddle it overlaps.
///
/// Which paddle was struck does not matter and vertical velocity is left
/// alone. A ball still overlapping a paddle on the next tick flips again.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Rect> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.rect)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if paddles.iter().any(|paddle| ball.rect.intersects(paddle)) {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_paddle = true;
            log::trace!("ball hit paddle at {:?}", ball.rect.min);
        }
    }
}
