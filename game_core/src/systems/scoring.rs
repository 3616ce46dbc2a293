use hecs::World;

use crate::{Ball, Config, Events, GameMap, GameRng, Player, Side};

/// Award a point when the ball reaches a side wall, then re-serve it.
///
/// Left edge at or past 0 scores for the right player; right edge at or past
/// the field width scores for the left player.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.left() <= 0.0 {
            scorer = Some(Side::Right);
        } else if ball.rect.right() >= map.width {
            scorer = Some(Side::Left);
        } else {
            continue;
        }

        ball.reset(map, config, rng);
        log::debug!("ball reset, serving vel={:?}", ball.vel);
    }

    let Some(side) = scorer else {
        return;
    };

    match side {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    for (_entity, player) in world.query_mut::<&mut Player>() {
        if player.side == side {
            player.score += 1;
            log::debug!("{} scores, now {}", player.name, player.score);
        }
    }
}
