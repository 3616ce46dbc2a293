use hecs::World;

use crate::{Ball, Config, Events, GameMap, Paddle, PaddleIntent};

/// Apply held keys to human paddles.
///
/// Up moves only while the top edge is below 0, down only while the bottom
/// edge is above the field height. Holding both keys mid-field cancels out.
pub fn move_paddles(world: &mut World, map: &GameMap, config: &Config) {
    let bounds = map.bounds();
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up && paddle.rect.top() > 0.0 {
            paddle.rect.min.y -= config.paddle_speed;
        }
        if intent.down && paddle.rect.bottom() < map.height {
            paddle.rect.min.y += config.paddle_speed;
        }

        // Keep inside the field when the speed does not divide the travel
        paddle.rect.clamp_within(&bounds);
    }
}

/// Move ball by its velocity, bouncing off top/bottom walls
pub fn move_ball(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(map) {
            events.ball_hit_wall = true;
            log::trace!("ball bounced off wall, vel={:?}", ball.vel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_player, Controller, PaddleInput, Rect, Side};
    use glam::Vec2;

    fn setup_world() -> (World, GameMap, Config, hecs::Entity) {
        let mut world = World::new();
        let map = GameMap::new();
        let config = Config::new();
        let entity = create_player(&mut world, "Player 1", Side::Left, Controller::Human, &map, &config);
        (world, map, config, entity)
    }

    fn set_intent(world: &mut World, entity: hecs::Entity, keys: PaddleInput) {
        let mut intent = world.get::<&mut PaddleIntent>(entity).unwrap();
        intent.up = keys.up;
        intent.down = keys.down;
    }

    fn paddle_rect(world: &World, entity: hecs::Entity) -> Rect {
        world.get::<&Paddle>(entity).unwrap().rect
    }

    #[test]
    fn test_paddle_moves_up_and_down() {
        let (mut world, map, config, entity) = setup_world();
        let start = paddle_rect(&world, entity).top();

        set_intent(&mut world, entity, PaddleInput::new(true, false));
        move_paddles(&mut world, &map, &config);
        assert_eq!(paddle_rect(&world, entity).top(), start - 5.0);

        set_intent(&mut world, entity, PaddleInput::new(false, true));
        move_paddles(&mut world, &map, &config);
        move_paddles(&mut world, &map, &config);
        assert_eq!(paddle_rect(&world, entity).top(), start + 5.0);
    }

    #[test]
    fn test_both_keys_held_cancel_out() {
        let (mut world, map, config, entity) = setup_world();
        let start = paddle_rect(&world, entity);

        set_intent(&mut world, entity, PaddleInput::new(true, true));
        for _ in 0..10 {
            move_paddles(&mut world, &map, &config);
        }

        assert_eq!(paddle_rect(&world, entity), start);
    }

    #[test]
    fn test_both_keys_held_at_top_moves_down() {
        let (mut world, map, config, entity) = setup_world();
        world.get::<&mut Paddle>(entity).unwrap().rect.min.y = 0.0;

        set_intent(&mut world, entity, PaddleInput::new(true, true));
        move_paddles(&mut world, &map, &config);

        // Up is blocked at the wall, down still applies
        assert_eq!(paddle_rect(&world, entity).top(), 5.0);
    }

    #[test]
    fn test_paddle_stays_in_field() {
        let (mut world, map, config, entity) = setup_world();

        set_intent(&mut world, entity, PaddleInput::new(true, false));
        for _ in 0..200 {
            move_paddles(&mut world, &map, &config);
            assert!(paddle_rect(&world, entity).top() >= 0.0);
        }
        assert_eq!(paddle_rect(&world, entity).top(), 0.0);

        set_intent(&mut world, entity, PaddleInput::new(false, true));
        for _ in 0..200 {
            move_paddles(&mut world, &map, &config);
            assert!(paddle_rect(&world, entity).bottom() <= map.height);
        }
        assert_eq!(paddle_rect(&world, entity).bottom(), map.height);
    }

    #[test]
    fn test_uneven_speed_is_clamped() {
        let (mut world, map, _, entity) = setup_world();
        let config = Config {
            paddle_speed: 7.0,
            ..Config::default()
        };

        set_intent(&mut world, entity, PaddleInput::new(true, false));
        for _ in 0..100 {
            move_paddles(&mut world, &map, &config);
            assert!(paddle_rect(&world, entity).top() >= 0.0);
        }
        assert_eq!(paddle_rect(&world, entity).top(), 0.0);
    }

    #[test]
    fn test_move_ball_flags_wall_hit() {
        let mut world = World::new();
        let map = GameMap::new();
        let mut events = Events::new();
        create_ball(&mut world, Rect::new(300.0, 3.0, 15.0, 15.0), Vec2::new(7.0, -5.0));

        move_ball(&mut world, &map, &mut events);

        assert!(events.ball_hit_wall);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, Vec2::new(7.0, 5.0));
        }
    }
}
