//! Narrow seams the match core calls out through. The real shell wires
//! sprite/text rendering and audio mixing behind these; tests wire
//! recording mocks. Absent collaborators are documented no-ops.

use game_core::PlayerSide;

/// Screen panels the controller can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    MainMenu,
    GameHud,
    Pause,
    GoldenGoal,
    WinLose,
}

/// Sound effects, fire-and-forget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    Goal,
    PaddleHit,
    WallHit,
    GoldenGoal,
    PowerUp,
    WinLose,
}

/// Background music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bgm {
    Menu,
}

/// Score/timer/panel surface of the presentation layer
pub trait Presentation {
    fn update_score(&mut self, left: u32, right: u32);
    fn update_timer(&mut self, seconds_remaining: f32);
    fn show_panel(&mut self, panel: Panel);
    fn show_win_screen(&mut self, winner: PlayerSide, single_player: bool, golden_goal: bool);
}

/// Audio surface. `play_bgm` is expected to be idempotent: requesting a
/// track that is already playing must not restart it.
pub trait AudioSink {
    fn play_sfx(&mut self, sfx: Sfx);
    fn play_bgm(&mut self, bgm: Bgm);
    fn stop_bgm(&mut self);
}
