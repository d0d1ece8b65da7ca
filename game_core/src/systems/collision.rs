use crate::{Ball, Config, Events, Field, Paddle, PlayerSide};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, field: &Field, config: &Config, events: &mut Events) {
    // Collect ball data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    // Top/bottom wall bounces
    let radius = config.ball_radius;
    if ball_pos.y - radius <= -field.half_height || ball_pos.y + radius >= field.half_height {
        ball_vel.y = -ball_vel.y;
        // Clamp position to prevent sticking
        if ball_pos.y - radius <= -field.half_height {
            ball_pos.y = -field.half_height + radius;
        }
        if ball_pos.y + radius >= field.half_height {
            ball_pos.y = field.half_height - radius;
        }
        events.ball_hit_wall = true;

        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = ball_pos;
            ball.vel = ball_vel;
        }
    }

    // Collect paddle data
    let paddles: Vec<(PlayerSide, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    for (side, paddle_y) in paddles {
        let paddle_x = config.paddle_x(side);
        let paddle_half_width = config.paddle_width / 2.0;
        let paddle_half_height = config.paddle_height / 2.0;

        // Simple AABB overlap check
        let dx = (ball_pos.x - paddle_x).abs();
        let dy = (ball_pos.y - paddle_y).abs();

        if dx < paddle_half_width + radius && dy < paddle_half_height + radius {
            // Only respond when the ball is moving toward the paddle, so a
            // paddle can never trap the ball on its own side
            let should_bounce = match side {
                PlayerSide::Left => ball_vel.x < 0.0,
                PlayerSide::Right => ball_vel.x > 0.0,
            };

            if should_bounce {
                // Vertical deflection: contact offset relative to the paddle
                // center, normalized by half paddle height, scaled by the
                // configured hit factor
                let offset = (ball_pos.y - paddle_y) / paddle_half_height;
                let y_factor = offset.clamp(-1.0, 1.0) * config.hit_factor;

                // Horizontal direction is fixed outward per side
                let x_dir = match side {
                    PlayerSide::Left => 1.0,
                    PlayerSide::Right => -1.0,
                };

                // Each hit nudges speed up, capped
                let new_speed =
                    (ball_vel.length() * config.ball_speed_increase).min(config.ball_speed_max);

                let new_dir = glam::Vec2::new(x_dir, y_factor).normalize();
                ball_vel = new_dir * new_speed;

                // Push ball out of the paddle
                ball_pos.x = match side {
                    PlayerSide::Left => paddle_x + paddle_half_width + radius,
                    PlayerSide::Right => paddle_x - paddle_half_width - radius,
                };

                events.ball_hit_paddle = true;

                for (_entity, ball) in world.query_mut::<&mut Ball>() {
                    ball.pos = ball_pos;
                    ball.vel = ball_vel;
                    ball.last_toucher = Some(side);
                }
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball};
    use glam::Vec2;

    fn setup() -> (World, Config, Field, Events) {
        let world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let events = Events::new();
        (world, config, field, events)
    }

    fn place_ball(world: &mut World, config: &Config, pos: Vec2, vel: Vec2) -> hecs::Entity {
        let entity = create_ball(world, config);
        {
            let mut ball = world.get::<&mut Ball>(entity).unwrap();
            ball.pos = pos;
            ball.vel = vel;
        }
        entity
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, field, mut events) = setup();
        let entity = place_ball(
            &mut world,
            &config,
            Vec2::new(0.0, field.half_height),
            Vec2::new(4.0, 6.0),
        );

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert!(ball.vel.y < 0.0, "ball should bounce down");
        assert_eq!(ball.vel.x, 4.0, "x velocity unchanged");
        assert!(ball.pos.y <= field.half_height - config.ball_radius);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, field, mut events) = setup();
        let entity = place_ball(
            &mut world,
            &config,
            Vec2::new(0.0, -field.half_height),
            Vec2::new(4.0, -6.0),
        );

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert!(ball.vel.y > 0.0, "ball should bounce up");
        assert!(ball.pos.y >= -field.half_height + config.ball_radius);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_left_paddle_deflects_ball_rightward() {
        let (mut world, config, field, mut events) = setup();
        create_paddle(&mut world, PlayerSide::Left);
        let paddle_x = config.paddle_x(PlayerSide::Left);
        let entity = place_ball(
            &mut world,
            &config,
            Vec2::new(paddle_x + config.paddle_width / 2.0, 0.0),
            Vec2::new(-10.0, 0.0),
        );

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert!(ball.vel.x > 0.0, "left paddle always deflects rightward");
        assert_eq!(ball.last_toucher, Some(PlayerSide::Left));
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_hit_at_half_height_with_default_factor() {
        // Contact at +half paddle height, hit factor 0.5: vertical factor
        // maxes out at 0.5, direction away from the left paddle.
        let (mut world, config, field, mut events) = setup();
        create_paddle(&mut world, PlayerSide::Left);
        let paddle_x = config.paddle_x(PlayerSide::Left);
        let half_height = config.paddle_height / 2.0;
        let entity = place_ball(
            &mut world,
            &config,
            Vec2::new(paddle_x + config.paddle_width / 2.0, half_height),
            Vec2::new(-10.0, 0.0),
        );

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        let dir = ball.vel.normalize();
        let expected = Vec2::new(1.0, 0.5).normalize();
        assert!(dir.x > 0.0);
        assert!((dir.x - expected.x).abs() < 1e-3);
        assert!((dir.y - expected.y).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_hit_increases_speed_up_to_cap() {
        let (mut world, config, field, mut events) = setup();
        create_paddle(&mut world, PlayerSide::Right);
        let paddle_x = config.paddle_x(PlayerSide::Right);
        let entity = place_ball(
            &mut world,
            &config,
            Vec2::new(paddle_x - config.paddle_width / 2.0, 0.0),
            Vec2::new(10.0, 0.0),
        );

        check_collisions(&mut world, &field, &config, &mut events);

        {
            let ball = world.get::<&Ball>(entity).unwrap();
            let expected = (10.0 * config.ball_speed_increase).min(config.ball_speed_max);
            assert!((ball.vel.length() - expected).abs() < 0.01);
        }

        // Near the cap, speed must not exceed it
        {
            let mut ball = world.get::<&mut Ball>(entity).unwrap();
            ball.pos = Vec2::new(paddle_x - config.paddle_width / 2.0, 0.0);
            ball.vel = Vec2::new(config.ball_speed_max - 0.1, 0.0);
        }
        check_collisions(&mut world, &field, &config, &mut events);
        let ball = world.get::<&Ball>(entity).unwrap();
        assert!(ball.vel.length() <= config.ball_speed_max + 1e-3);
    }

    #[test]
    fn test_no_bounce_when_moving_away() {
        let (mut world, config, field, mut events) = setup();
        create_paddle(&mut world, PlayerSide::Left);
        let paddle_x = config.paddle_x(PlayerSide::Left);
        let entity = place_ball(
            &mut world,
            &config,
            Vec2::new(paddle_x, 0.0),
            Vec2::new(10.0, 0.0),
        );

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.vel.x, 10.0);
        assert!(ball.last_toucher.is_none());
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, field, mut events) = setup();
        create_paddle(&mut world, PlayerSide::Left);

        check_collisions(&mut world, &field, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
