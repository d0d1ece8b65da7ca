/// Tuning parameters for the arcade match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (centered: x spans [-HALF_WIDTH, HALF_WIDTH])
    pub const FIELD_HALF_WIDTH: f32 = 8.0;
    pub const FIELD_HALF_HEIGHT: f32 = 5.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 0.4;
    pub const PADDLE_HEIGHT: f32 = 1.6;
    pub const PADDLE_MARGIN: f32 = 1.0; // Distance from the goal edge
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const AI_REACTION_TIME: f32 = 0.6; // Larger = easier to beat
    pub const HIT_FACTOR: f32 = 0.5; // Vertical deflection strength (0.1 - 1.0)

    // Ball
    pub const BALL_RADIUS: f32 = 0.25;
    pub const BALL_SPEED_INITIAL: f32 = 10.0;
    pub const BALL_SPEED_MAX: f32 = 15.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const BALL_ROTATION_RATE: f32 = 10.0; // Heading smoothing rate

    // Power-ups
    pub const POWER_UP_RADIUS: f32 = 0.4;
    pub const POWER_UP_INTERVAL: f32 = 15.0; // Seconds between spawn attempts
    pub const POWER_UP_DURATION: f32 = 6.0; // Timed effect duration
    pub const SPEED_UP_MULTIPLIER: f32 = 3.0;
    pub const SPAWN_X_BOUND: f32 = 4.0;
    pub const SPAWN_Y_BOUND: f32 = 2.5;

    // Match flow
    pub const MATCH_DURATION: f32 = 180.0;
    pub const SERVE_DELAY: f32 = 1.0; // Real-time delay before re-serve
    pub const GOLDEN_GOAL_DELAY: f32 = 2.0; // Real-time delay before sudden death

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
