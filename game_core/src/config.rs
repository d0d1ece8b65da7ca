use crate::components::{PlayerSide, PowerUpKind};
use crate::params::Params;

/// Runtime game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_half_width: f32,
    pub field_half_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ai_reaction_time: f32,
    pub hit_factor: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub ball_rotation_rate: f32,
    pub power_up_radius: f32,
    pub power_up_interval: f32,
    pub power_up_duration: f32,
    pub speed_up_multiplier: f32,
    pub spawn_x_bound: f32,
    pub spawn_y_bound: f32,
    pub serve_delay: f32,
    pub golden_goal_delay: f32,
    /// Slot kinds created at match setup; fixed for the whole session.
    pub power_up_kinds: Vec<PowerUpKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_half_width: Params::FIELD_HALF_WIDTH,
            field_half_height: Params::FIELD_HALF_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_reaction_time: Params::AI_REACTION_TIME,
            hit_factor: Params::HIT_FACTOR,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_rotation_rate: Params::BALL_ROTATION_RATE,
            power_up_radius: Params::POWER_UP_RADIUS,
            power_up_interval: Params::POWER_UP_INTERVAL,
            power_up_duration: Params::POWER_UP_DURATION,
            speed_up_multiplier: Params::SPEED_UP_MULTIPLIER,
            spawn_x_bound: Params::SPAWN_X_BOUND,
            spawn_y_bound: Params::SPAWN_Y_BOUND,
            serve_delay: Params::SERVE_DELAY,
            golden_goal_delay: Params::GOLDEN_GOAL_DELAY,
            power_up_kinds: vec![
                PowerUpKind::DoublePoint,
                PowerUpKind::ChangeDirection,
                PowerUpKind::SpeedUp,
            ],
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle based on its side
    pub fn paddle_x(&self, side: PlayerSide) -> f32 {
        match side {
            PlayerSide::Left => -self.field_half_width + self.paddle_margin,
            PlayerSide::Right => self.field_half_width - self.paddle_margin,
        }
    }

    /// Vertical travel limit: half field height minus half paddle height
    pub fn paddle_move_limit(&self) -> f32 {
        self.field_half_height - self.paddle_height / 2.0
    }

    /// Clamp paddle Y to the play-field bound
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let limit = self.paddle_move_limit();
        y.clamp(-limit, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(PlayerSide::Left), -7.0, "Left paddle X");
        assert_eq!(config.paddle_x(PlayerSide::Right), 7.0, "Right paddle X");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let limit = config.field_half_height - config.paddle_height / 2.0;
        assert_eq!(config.clamp_paddle_y(100.0), limit);
        assert_eq!(config.clamp_paddle_y(-100.0), -limit);
        assert_eq!(config.clamp_paddle_y(1.0), 1.0);
    }
}
