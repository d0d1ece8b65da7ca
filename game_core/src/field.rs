use crate::components::PlayerSide;
use crate::config::Config;
use glam::Vec2;

/// Play-field geometry. Coordinates are centered: the origin is the serve
/// point, goals are the left/right edges, walls the top/bottom edges.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub half_width: f32,
    pub half_height: f32,
}

impl Field {
    pub fn new(config: &Config) -> Self {
        Self {
            half_width: config.field_half_width,
            half_height: config.field_half_height,
        }
    }

    pub fn serve_point(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Which player scores if the ball sits at `ball_x`, if any.
    /// Crossing the left edge is a goal for the right player and vice versa.
    pub fn goal_scorer(&self, ball_x: f32) -> Option<PlayerSide> {
        if ball_x < -self.half_width {
            Some(PlayerSide::Right)
        } else if ball_x > self.half_width {
            Some(PlayerSide::Left)
        } else {
            None
        }
    }
}
