use crate::components::{ControlMode, Paddle, PaddleIntent};
use crate::resources::InputQueue;
use hecs::World;

/// Drain queued directional intents onto human-controlled paddles.
/// Intents for AI paddles are dropped; the AI drives itself.
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for &(side, dir) in &queue.inputs {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.side == side && paddle.mode == ControlMode::Human {
                intent.dir = dir;
            }
        }
    }

    queue.clear();
}
