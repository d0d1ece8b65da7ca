use crate::{Ball, Config, Events, GameRng, PowerUpSlot};
use glam::Vec2;
use hecs::World;

/// Attempt one power-up spawn: pick an inactive slot uniformly at random
/// and activate it at a random position within the spawn bounds.
/// Returns false when the pool is exhausted (retried on the next timer tick).
pub fn spawn_power_up(world: &mut World, config: &Config, rng: &mut GameRng) -> bool {
    let mut inactive: Vec<hecs::Entity> = world
        .query::<&PowerUpSlot>()
        .iter()
        .filter(|(_e, slot)| !slot.active)
        .map(|(e, _slot)| e)
        .collect();
    inactive.sort_by_key(|e| e.id());

    if inactive.is_empty() {
        log::warn!("all power-up slots active, skipping spawn");
        return false;
    }

    let chosen = inactive[rng.gen_index(inactive.len())];
    let pos = Vec2::new(
        rng.gen_range(-config.spawn_x_bound, config.spawn_x_bound),
        rng.gen_range(-config.spawn_y_bound, config.spawn_y_bound),
    );

    for (entity, slot) in world.query_mut::<&mut PowerUpSlot>() {
        if entity == chosen {
            slot.activate_at(pos);
            log::debug!("spawned {:?} at ({:.1}, {:.1})", slot.kind, pos.x, pos.y);
            break;
        }
    }

    true
}

/// Deactivate every slot (match start, golden-goal entry, return to menu)
pub fn hide_all_power_ups(world: &mut World) {
    for (_entity, slot) in world.query_mut::<&mut PowerUpSlot>() {
        slot.deactivate();
    }
}

/// Collect power-ups whose trigger region the ball has entered.
/// Each activation is one-shot: the slot deactivates immediately and the
/// kind is reported through `Events` for the controller to apply.
pub fn collect_power_ups(world: &mut World, config: &Config, events: &mut Events) {
    let ball_pos = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos)
    };

    let Some(ball_pos) = ball_pos else { return };

    let trigger_dist = config.power_up_radius + config.ball_radius;

    for (_entity, slot) in world.query_mut::<&mut PowerUpSlot>() {
        if slot.active && (slot.pos - ball_pos).length() < trigger_dist {
            slot.deactivate();
            events.power_ups.push(slot.kind);
        }
    }
}
