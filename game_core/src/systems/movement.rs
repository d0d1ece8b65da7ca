use crate::{Ball, Config, ControlMode, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement: human paddles follow their intent, AI paddles
/// track the ball's vertical position with a lag factor.
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    // Ball position first, without holding a borrow across the paddle loop
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        match paddle.mode {
            ControlMode::Human => {
                if intent.dir != 0 {
                    paddle.y += intent.dir as f32 * config.paddle_speed * time.dt;
                    paddle.y = config.clamp_paddle_y(paddle.y);
                }
            }
            ControlMode::Ai => {
                let Some(target_y) = ball_y else { continue };
                // Lagged tracking: larger reaction time = slower AI
                let rate = (time.dt * config.paddle_speed / config.ai_reaction_time).min(1.0);
                paddle.y += (target_y - paddle.y) * rate;
                paddle.y = config.clamp_paddle_y(paddle.y);
            }
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

/// Renormalize ball speed when deflection math has eroded it below the
/// designed magnitude. Never damps a faster ball.
pub fn renormalize_ball_speed(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let speed = ball.vel.length();
        if speed > 0.01 && speed < ball.current_speed {
            ball.vel = ball.vel.normalize() * ball.current_speed;
        }
    }
}

/// Smooth the ball's visual heading toward its velocity angle.
/// Presentation data only; the simulation never reads it back.
pub fn update_heading(world: &mut World, time: &Time, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.vel.length() > 0.1 {
            let target = ball.vel.y.atan2(ball.vel.x);
            let mut delta = target - ball.heading;
            // Shortest arc
            while delta > std::f32::consts::PI {
                delta -= std::f32::consts::TAU;
            }
            while delta < -std::f32::consts::PI {
                delta += std::f32::consts::TAU;
            }
            let t = (time.dt * config.ball_rotation_rate).min(1.0);
            ball.heading += delta * t;
        }
    }
}
