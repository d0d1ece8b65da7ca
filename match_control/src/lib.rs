//! Match orchestration on top of the `game_core` simulation: the phase
//! state machine, scores and the match clock, scheduled delays (serve,
//! sudden-death transition, speed-boost expiry, power-up spawning), and
//! the presentation/audio seams the shell plugs into.

pub mod controller;
pub mod interfaces;
pub mod phase;
pub mod schedule;


pub use controller::MatchController;
pub use interfaces::{AudioSink, Bgm, Panel, Presentation, Sfx};
pub use phase::{MatchPhase, PhaseState};
pub use schedule::{DelaySlot, SpawnTimer};
