use crate::{Ball, Events, Field};
use hecs::World;

/// Detect the ball leaving the field through a goal edge. The scorer is
/// reported through `Events`; the controller owns scores and the re-serve.
pub fn check_goals(world: &mut World, field: &Field, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(scorer) = field.goal_scorer(ball.pos.x) {
            events.scored = Some(scorer);
            ball.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config, PlayerSide};
    use glam::Vec2;

    fn setup() -> (World, Config, Field, Events) {
        let world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let events = Events::new();
        (world, config, field, events)
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, field, mut events) = setup();
        let entity = create_ball(&mut world, &config);
        {
            let mut ball = world.get::<&mut Ball>(entity).unwrap();
            ball.pos = Vec2::new(-field.half_width - 0.1, 0.0);
            ball.vel = Vec2::new(-10.0, 0.0);
            ball.trail = true;
        }

        check_goals(&mut world, &field, &mut events);

        assert_eq!(events.scored, Some(PlayerSide::Right));
        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.vel, Vec2::ZERO, "ball stops after a goal");
        assert!(!ball.trail);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, field, mut events) = setup();
        let entity = create_ball(&mut world, &config);
        {
            let mut ball = world.get::<&mut Ball>(entity).unwrap();
            ball.pos = Vec2::new(field.half_width + 0.1, 0.0);
            ball.vel = Vec2::new(10.0, 0.0);
        }

        check_goals(&mut world, &field, &mut events);

        assert_eq!(events.scored, Some(PlayerSide::Left));
    }

    #[test]
    fn test_no_goal_while_ball_in_bounds() {
        let (mut world, config, field, mut events) = setup();
        let entity = create_ball(&mut world, &config);
        {
            let mut ball = world.get::<&mut Ball>(entity).unwrap();
            ball.pos = Vec2::new(3.0, 1.0);
            ball.vel = Vec2::new(10.0, 0.0);
        }

        check_goals(&mut world, &field, &mut events);

        assert!(events.scored.is_none());
        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.vel, Vec2::new(10.0, 0.0));
    }
}
