use crate::components::{PlayerSide, PowerUpKind};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// Match score. Owned and mutated by the match controller only; the
/// simulation reports goals through `Events` and never touches this.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: PlayerSide) -> u32 {
        match side {
            PlayerSide::Left => self.left,
            PlayerSide::Right => self.right,
        }
    }

    pub fn add(&mut self, side: PlayerSide) {
        match side {
            PlayerSide::Left => self.left += 1,
            PlayerSide::Right => self.right += 1,
        }
    }

    /// Instant redeem of the double-point power-up
    pub fn double(&mut self, side: PlayerSide) {
        match side {
            PlayerSide::Left => self.left *= 2,
            PlayerSide::Right => self.right *= 2,
        }
    }

    pub fn is_tied(&self) -> bool {
        self.left == self.right
    }

    /// Side with the higher score, None when tied
    pub fn leader(&self) -> Option<PlayerSide> {
        if self.left > self.right {
            Some(PlayerSide::Left)
        } else if self.right > self.left {
            Some(PlayerSide::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        use rand::Rng;
        self.0.gen_range(min..max)
    }

    pub fn gen_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.0.gen_range(0..len)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    /// Scorer of a goal detected this frame
    pub scored: Option<PlayerSide>,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    /// Power-ups the ball collected this frame
    pub power_ups: Vec<PowerUpKind>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scored = None;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.power_ups.clear();
    }
}

/// Queued directional intents for human paddles, drained each frame
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(PlayerSide, i8)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, side: PlayerSide, dir: i8) {
        self.inputs.push((side, dir.clamp(-1, 1)));
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }
}
