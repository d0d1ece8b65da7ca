pub mod components;
pub mod config;
pub mod field;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use params::*;
pub use resources::*;
pub use systems::*;

use hecs::World;

/// Advance the deterministic match simulation by one frame.
///
/// Per-frame dt is clamped and consumed in fixed micro-steps for stable
/// physics. Events accumulate across the whole frame for the caller to
/// drain. Power-up spawning and serve timing live with the caller; this
/// only moves what is already in flight.
pub fn step(
    world: &mut World,
    time: &mut Time,
    field: &Field,
    config: &Config,
    events: &mut Events,
    input_queue: &mut InputQueue,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    events.clear();
    ingest_inputs(world, input_queue);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Move paddles (human intents, AI tracking)
        move_paddles(world, &step_time, config);

        // 2. Move ball and keep its speed at the designed magnitude
        move_ball(world, &step_time);
        renormalize_ball_speed(world);
        update_heading(world, &step_time, config);

        // 3. Collisions (ball vs walls, paddles)
        check_collisions(world, field, config, events);

        // 4. Goal edges and power-up triggers
        check_goals(world, field, events);
        collect_power_ups(world, config, events);
    }

    time.now += clamped_dt;
}

/// Helper to create the ball entity at the serve point
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(glam::Vec2::ZERO, config.ball_speed_initial),))
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, side: PlayerSide) -> hecs::Entity {
    world.spawn((Paddle::new(side, 0.0), PaddleIntent::new()))
}

/// Helper to create the configured power-up slot pool (all inactive)
pub fn create_power_up_slots(world: &mut World, kinds: &[PowerUpKind]) -> Vec<hecs::Entity> {
    kinds
        .iter()
        .map(|&kind| world.spawn((PowerUpSlot::new(kind),)))
        .collect()
}
