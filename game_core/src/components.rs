use glam::Vec2;

/// Which half of the field a paddle (and its player) owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSide {
    Left,
    Right,
}

impl PlayerSide {
    pub fn opponent(&self) -> Self {
        match self {
            PlayerSide::Left => PlayerSide::Right,
            PlayerSide::Right => PlayerSide::Left,
        }
    }
}

/// How a paddle is driven each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Human,
    Ai,
}

/// Power-up kinds, assigned to slots at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    DoublePoint,
    ChangeDirection,
    SpeedUp,
}

/// Ball component - owns velocity and speed state
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Visual rotation, smoothed toward the velocity angle each tick
    pub heading: f32,
    pub base_speed: f32,
    pub current_speed: f32,
    /// Paddle that most recently contacted the ball; cleared on every serve
    pub last_toucher: Option<PlayerSide>,
    /// Trail effect flag, on while the ball is in flight
    pub trail: bool,
}

impl Ball {
    pub fn new(pos: Vec2, base_speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            heading: 0.0,
            base_speed,
            current_speed: base_speed,
            last_toucher: None,
            trail: false,
        }
    }

    /// Serve toward a random side with a random vertical component
    pub fn launch(&mut self, rng: &mut crate::GameRng) {
        use rand::Rng;
        let x: f32 = if rng.0.gen_bool(0.5) { -1.0 } else { 1.0 };
        let y: f32 = rng.0.gen_range(-1.0..=1.0);

        let direction = Vec2::new(x, y).normalize();
        self.vel = direction * self.current_speed;
        self.trail = true;
    }

    /// Zero velocity and clear the trail effect
    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
        self.trail = false;
    }

    /// Set speed to a multiple of base and rescale any in-flight velocity
    pub fn increase_speed(&mut self, multiplier: f32) {
        self.current_speed = self.base_speed * multiplier;

        if self.vel.length() > 0.01 {
            self.vel = self.vel.normalize() * self.current_speed;
        }
    }

    /// Restore base speed; exact no-op when already there
    pub fn reset_speed(&mut self) {
        if self.current_speed == self.base_speed {
            return;
        }

        self.current_speed = self.base_speed;

        if self.vel.length() > 0.01 {
            self.vel = self.vel.normalize() * self.current_speed;
        }
    }

    /// Invert the velocity vector
    pub fn reverse_direction(&mut self) {
        self.vel = -self.vel;
    }
}

/// Paddle component - moves on the y axis only
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: PlayerSide,
    pub y: f32,
    /// Spawn position captured at creation, restored on reset
    pub spawn_y: f32,
    pub mode: ControlMode,
}

impl Paddle {
    pub fn new(side: PlayerSide, y: f32) -> Self {
        Self {
            side,
            y,
            spawn_y: y,
            mode: ControlMode::Human,
        }
    }

    pub fn reset_position(&mut self) {
        self.y = self.spawn_y;
    }
}

/// Movement intent for a human-controlled paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = down, 0 = stop, 1 = up
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One power-up slot: inactive off-field, or active at a sampled position
#[derive(Debug, Clone, Copy)]
pub struct PowerUpSlot {
    pub kind: PowerUpKind,
    pub active: bool,
    pub pos: Vec2,
}

impl PowerUpSlot {
    pub fn new(kind: PowerUpKind) -> Self {
        Self {
            kind,
            active: false,
            pos: Vec2::ZERO,
        }
    }

    pub fn activate_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
