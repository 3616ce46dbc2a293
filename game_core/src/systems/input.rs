use hecs::World;

use crate::{InputState, Paddle, PaddleIntent};

/// Copy this tick's key state onto the human paddles' intents
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        let keys = input.for_side(paddle.side);
        intent.up = keys.up;
        intent.down = keys.down;
    }
}
