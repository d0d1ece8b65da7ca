use glam::Vec2;
use hecs::World;

use game_core::{
    create_ball, create_paddle, create_power_up_slots, hide_all_power_ups, spawn_power_up, Ball,
    Config, ControlMode, Events, Field, GameRng, InputQueue, Paddle, PaddleIntent, Params,
    PlayerSide, PowerUpKind, Score, Time,
};

use crate::interfaces::{AudioSink, Bgm, Panel, Presentation, Sfx};
use crate::phase::{MatchPhase, PhaseState};
use crate::schedule::{DelaySlot, SpawnTimer};

/// Root coordinator for a match: owns the simulation world, the phase
/// state machine, scores, the match timer, and every scheduled delay.
///
/// Drive it with `update(frame_dt)` once per frame and the command
/// methods from the shell. All state mutation happens synchronously in
/// those calls; there is a single writer by construction.
pub struct MatchController {
    world: World,
    config: Config,
    field: Field,
    time: Time,
    events: Events,
    input_queue: InputQueue,
    rng: GameRng,

    state: PhaseState,
    score: Score,
    single_player: bool,
    match_duration: f32,
    time_remaining: f32,
    muted: bool,
    velocity_before_pause: Vec2,

    // Real-time delays: keep running through pause and the frozen Tied
    // phase so the flow can never soft-lock
    serve_delay: DelaySlot,
    golden_goal_delay: DelaySlot,
    // Simulation-time timers: freeze with the simulation
    speed_up: DelaySlot,
    spawn_timer: SpawnTimer,

    presentation: Option<Box<dyn Presentation>>,
    audio: Option<Box<dyn AudioSink>>,
}

impl MatchController {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let field = Field::new(&config);

        create_ball(&mut world, &config);
        create_paddle(&mut world, PlayerSide::Left);
        create_paddle(&mut world, PlayerSide::Right);
        create_power_up_slots(&mut world, &config.power_up_kinds);

        Self {
            world,
            field,
            time: Time::default(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng: GameRng::new(seed),
            state: PhaseState::new(),
            score: Score::new(),
            single_player: false,
            match_duration: Params::MATCH_DURATION,
            time_remaining: 0.0,
            muted: false,
            velocity_before_pause: Vec2::ZERO,
            serve_delay: DelaySlot::new(),
            golden_goal_delay: DelaySlot::new(),
            speed_up: DelaySlot::new(),
            spawn_timer: SpawnTimer::new(),
            presentation: None,
            audio: None,
            config,
        }
    }

    pub fn set_presentation(&mut self, presentation: Box<dyn Presentation>) {
        self.presentation = Some(presentation);
    }

    pub fn set_audio(&mut self, audio: Box<dyn AudioSink>) {
        self.audio = Some(audio);
    }

    // --- Commands ---

    /// Start a fresh match: scores and timer reset, paddles and ball
    /// re-served, power-up spawning armed.
    pub fn start_match(&mut self, duration_secs: f32, single_player: bool) {
        log::info!("starting match: {duration_secs}s, single_player={single_player}");

        self.match_duration = duration_secs;
        self.time_remaining = duration_secs;
        self.score = Score::new();
        self.single_player = single_player;
        self.velocity_before_pause = Vec2::ZERO;
        self.speed_up.cancel();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset_speed();
        }
        self.golden_goal_delay.cancel();
        // Starting from the pause menu must not carry the frozen state
        // into the fresh match
        self.state.clear_pause();
        self.state.set_phase(MatchPhase::Playing);

        self.set_paddle_mode(PlayerSide::Left, ControlMode::Human);
        let right_mode = if single_player {
            ControlMode::Ai
        } else {
            ControlMode::Human
        };
        self.set_paddle_mode(PlayerSide::Right, right_mode);
        self.reset_paddles();

        self.start_spawning();
        self.push_score();
        self.push_timer();

        if let Some(audio) = self.audio.as_deref_mut() {
            audio.stop_bgm();
        }
        self.show_panel(Panel::GameHud);
        self.reset_ball_and_serve();
    }

    /// Restart with the same duration and mode
    pub fn restart(&mut self) {
        if self.state.is_paused() {
            self.resume();
        }
        self.start_match(self.match_duration, self.single_player);
    }

    pub fn toggle_pause(&mut self) {
        if self.state.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Freeze the simulation, capturing the ball's velocity for resume.
    /// Ignored outside the running phases.
    pub fn pause(&mut self) {
        if !self.state.try_pause() {
            return;
        }

        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            self.velocity_before_pause = ball.vel;
            ball.vel = Vec2::ZERO;
        }

        self.show_panel(Panel::Pause);
    }

    /// Restore the captured velocity and resume the interrupted phase.
    /// A zero capture (paused right after a serve was scheduled) falls
    /// back to a fresh launch unless a serve is already pending.
    pub fn resume(&mut self) {
        if !self.state.try_resume() {
            return;
        }

        self.show_panel(Panel::GameHud);

        if self.velocity_before_pause != Vec2::ZERO {
            for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                ball.vel = self.velocity_before_pause;
            }
            self.velocity_before_pause = Vec2::ZERO;
        } else if !self.serve_delay.is_pending() {
            self.launch_ball();
        }
    }

    /// Abandon the match and go back to the menu: every pending delay is
    /// canceled and the field reset; match state is discarded.
    pub fn return_to_menu(&mut self) {
        log::info!("returning to menu");

        self.state.set_phase(MatchPhase::Menu);
        self.serve_delay.cancel();
        self.golden_goal_delay.cancel();
        self.speed_up.cancel();
        self.stop_spawning_and_clear();
        self.velocity_before_pause = Vec2::ZERO;

        let serve_point = self.field.serve_point();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset_speed();
            ball.stop();
            ball.pos = serve_point;
            ball.last_toucher = None;
        }
        self.reset_paddles();

        self.show_panel(Panel::MainMenu);
        if let Some(audio) = self.audio.as_deref_mut() {
            audio.play_bgm(Bgm::Menu);
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Queue a directional intent for a human paddle (-1, 0, 1)
    pub fn set_paddle_input(&mut self, side: PlayerSide, dir: i8) {
        self.input_queue.push_input(side, dir);
    }

    // --- Frame update ---

    /// Advance the match by one frame. `frame_dt` is real elapsed time;
    /// the simulation clock derives from it but freezes under pause and
    /// outside the running phases.
    pub fn update(&mut self, frame_dt: f32) {
        // Real-time delays run unconditionally so the tie transition and
        // the serve can never be stranded by a pause
        if self.golden_goal_delay.tick(frame_dt) {
            self.enter_golden_goal();
        }
        if self.serve_delay.tick(frame_dt) && self.state.is_simulating() {
            // If paused at fire time the launch is skipped; the resume
            // fallback relaunches from the zero captured velocity
            self.launch_ball();
        }

        if !self.state.is_simulating() {
            return;
        }

        let sim_dt = frame_dt.min(Params::MAX_DT);

        if self.speed_up.tick(sim_dt) {
            for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                ball.reset_speed();
            }
        }
        if self.spawn_timer.tick(sim_dt) {
            spawn_power_up(&mut self.world, &self.config, &mut self.rng);
        }

        self.time.dt = frame_dt;
        game_core::step(
            &mut self.world,
            &mut self.time,
            &self.field,
            &self.config,
            &mut self.events,
            &mut self.input_queue,
        );

        // Goals land before the clock check so a goal on the expiring
        // frame still decides the match
        self.drain_events();
        self.update_match_timer(sim_dt);
    }

    // --- Accessors ---

    pub fn phase(&self) -> MatchPhase {
        self.state.phase()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn score(&self) -> (u32, u32) {
        (self.score.left, self.score.right)
    }

    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    pub fn is_single_player(&self) -> bool {
        self.single_player
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: PlayerSide) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn active_power_up_count(&self) -> usize {
        self.world
            .query::<&game_core::PowerUpSlot>()
            .iter()
            .filter(|(_e, slot)| slot.active)
            .count()
    }

    // --- Internals ---

    fn update_match_timer(&mut self, dt: f32) {
        // No countdown in golden goal: sudden death has no clock
        if self.state.phase() != MatchPhase::Playing {
            return;
        }

        self.time_remaining = (self.time_remaining - dt).max(0.0);
        self.push_timer();

        if self.time_remaining <= 0.0 {
            self.check_win_condition();
        }
    }

    fn check_win_condition(&mut self) {
        if self.score.is_tied() {
            log::info!("regulation ended {}:{}, golden goal", self.score.left, self.score.right);
            self.state.set_phase(MatchPhase::Tied);
            self.stop_spawning_and_clear();
            self.serve_delay.cancel();
            self.speed_up.cancel();
            for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                ball.reset_speed();
                ball.stop();
            }
            self.show_panel(Panel::GoldenGoal);
            self.sfx(Sfx::GoldenGoal);
            self.golden_goal_delay.start(self.config.golden_goal_delay);
        } else if let Some(winner) = self.score.leader() {
            self.finish(winner, false);
        }
    }

    /// Tied -> GoldenGoal, after the real-time transition delay.
    /// Scores and the expired clock carry over; the field is re-served
    /// and power-up spawning re-armed.
    fn enter_golden_goal(&mut self) {
        log::info!("entering golden goal");
        self.state.set_phase(MatchPhase::GoldenGoal);
        self.reset_paddles();
        self.start_spawning();
        self.show_panel(Panel::GameHud);
        self.reset_ball_and_serve();
    }

    fn finish(&mut self, winner: PlayerSide, golden_goal: bool) {
        log::info!("match finished, winner: {winner:?} (golden_goal={golden_goal})");
        self.state.set_phase(MatchPhase::Finished);
        self.stop_spawning_and_clear();
        self.serve_delay.cancel();
        self.speed_up.cancel();
        self.sfx(Sfx::WinLose);
        self.show_panel(Panel::WinLose);

        let single_player = self.single_player;
        if let Some(p) = self.presentation.as_deref_mut() {
            p.show_win_screen(winner, single_player, golden_goal);
        }
    }

    fn goal_scored(&mut self, scorer: PlayerSide) {
        // Ignore goals outside the running phases
        if !self.state.is_running() {
            return;
        }

        // Always exactly one point; double-point is an instant redeem at
        // pickup, never a per-goal multiplier
        self.score.add(scorer);
        self.push_score();
        self.sfx(Sfx::Goal);

        if self.state.phase() == MatchPhase::GoldenGoal {
            // The goal that ends golden goal also ends the match
            self.finish(scorer, true);
            return;
        }

        // Cancel any in-flight speed boost before the next round
        self.speed_up.cancel();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset_speed();
        }
        self.reset_ball_and_serve();
    }

    fn activate_power_up(&mut self, kind: PowerUpKind, duration: f32) {
        let toucher = self.ball().and_then(|ball| ball.last_toucher);

        match kind {
            PowerUpKind::DoublePoint => {
                // An untouched ball rewards nobody
                let Some(side) = toucher else {
                    log::debug!("double point picked up with no toucher, ignored");
                    return;
                };
                self.score.double(side);
                log::info!("double point for {side:?}: {}:{}", self.score.left, self.score.right);
                self.push_score();
            }
            PowerUpKind::ChangeDirection => {
                for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                    ball.reverse_direction();
                }
            }
            PowerUpKind::SpeedUp => {
                let multiplier = self.config.speed_up_multiplier;
                for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                    ball.increase_speed(multiplier);
                }
                // Replaces any in-flight boost; durations never stack
                self.speed_up.start(duration);
            }
        }
    }

    fn drain_events(&mut self) {
        let scored = self.events.scored.take();
        let hit_paddle = self.events.ball_hit_paddle;
        let hit_wall = self.events.ball_hit_wall;
        let picked_up: Vec<PowerUpKind> = self.events.power_ups.drain(..).collect();

        if hit_wall {
            self.sfx(Sfx::WallHit);
        }
        if hit_paddle {
            self.sfx(Sfx::PaddleHit);
        }
        for kind in picked_up {
            self.sfx(Sfx::PowerUp);
            self.activate_power_up(kind, self.config.power_up_duration);
        }
        if let Some(scorer) = scored {
            self.goal_scored(scorer);
        }
    }

    /// Park the ball at the serve point with a cleared toucher and start
    /// the real-time serve delay
    fn reset_ball_and_serve(&mut self) {
        let serve_point = self.field.serve_point();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.stop();
            ball.pos = serve_point;
            ball.last_toucher = None;
        }
        self.serve_delay.start(self.config.serve_delay);
    }

    fn launch_ball(&mut self) {
        let rng = &mut self.rng;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.launch(rng);
        }
    }

    fn start_spawning(&mut self) {
        hide_all_power_ups(&mut self.world);
        self.spawn_timer.start(self.config.power_up_interval);
    }

    fn stop_spawning_and_clear(&mut self) {
        self.spawn_timer.stop();
        hide_all_power_ups(&mut self.world);
    }

    fn set_paddle_mode(&mut self, side: PlayerSide, mode: ControlMode) {
        for (_entity, (paddle, intent)) in self.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>()
        {
            if paddle.side == side {
                paddle.mode = mode;
                // Clear residual drift from the previous mode
                intent.dir = 0;
            }
        }
    }

    fn reset_paddles(&mut self) {
        for (_entity, (paddle, intent)) in self.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>()
        {
            paddle.reset_position();
            intent.dir = 0;
        }
    }

    fn push_score(&mut self) {
        let (left, right) = (self.score.left, self.score.right);
        if let Some(p) = self.presentation.as_deref_mut() {
            p.update_score(left, right);
        }
    }

    fn push_timer(&mut self) {
        let remaining = self.time_remaining;
        if let Some(p) = self.presentation.as_deref_mut() {
            p.update_timer(remaining);
        }
    }

    fn show_panel(&mut self, panel: Panel) {
        if let Some(p) = self.presentation.as_deref_mut() {
            p.show_panel(panel);
        }
    }

    /// Fire-and-forget, muted centrally
    fn sfx(&mut self, sfx: Sfx) {
        if self.muted {
            return;
        }
        if let Some(audio) = self.audio.as_deref_mut() {
            audio.play_sfx(sfx);
        }
    }
}

#[cfg(test)]
impl MatchController {
    /// Test hook: direct mutable access to the ball
    pub(crate) fn ball_mut(&mut self) -> hecs::QueryMut<'_, &mut Ball> {
        self.world.query_mut::<&mut Ball>()
    }

    pub(crate) fn force_score(&mut self, left: u32, right: u32) {
        self.score.left = left;
        self.score.right = right;
    }

    pub(crate) fn force_time_remaining(&mut self, seconds: f32) {
        self.time_remaining = seconds;
    }

    pub(crate) fn score_goal_for(&mut self, side: PlayerSide) {
        self.goal_scored(side);
    }

    pub(crate) fn pick_up(&mut self, kind: PowerUpKind, duration: f32) {
        self.activate_power_up(kind, duration);
    }
}
