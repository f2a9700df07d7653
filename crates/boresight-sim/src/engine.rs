//! Scene engine: the per-frame driver.
//!
//! `SceneEngine` owns the scene, processes player commands, integrates held
//! controls, and produces `FrameSnapshot`s. Completely headless, so it can be
//! driven from tests exactly as from the frame loop.

use std::collections::VecDeque;

use boresight_core::commands::PlayerCommand;
use boresight_core::config::{SceneConfig, SolverConfig};
use boresight_core::state::FrameSnapshot;
use boresight_core::types::{FrameTime, Orientation, Position3};

use crate::scene::Scene;
use crate::systems;

/// The frame engine. Owns the scene and all per-frame state.
pub struct SceneEngine {
    config: SceneConfig,
    scene: Scene,
    solver: SolverConfig,
    time: FrameTime,
    paused: bool,
    command_queue: VecDeque<PlayerCommand>,
}

impl SceneEngine {
    /// Create an engine at the configured initial scene.
    pub fn new(config: SceneConfig) -> Self {
        Self {
            scene: Scene::from_config(&config),
            solver: config.solver,
            config,
            time: FrameTime::default(),
            paused: false,
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by `dt` seconds and return the resulting snapshot.
    ///
    /// Negative or non-finite `dt` counts as zero. While paused, controls do
    /// not integrate and time does not advance.
    pub fn frame(&mut self, dt: f64) -> FrameSnapshot {
        self.process_commands();

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if !self.paused {
            systems::controls::run(&mut self.scene, &self.config.controls, dt);
            self.time.advance(dt);
        }

        systems::snapshot::build_snapshot(
            &self.scene,
            &self.time,
            self.paused,
            &self.config.hud,
            &self.solver,
        )
    }

    /// Advance by one frame at the configured rate.
    pub fn step(&mut self) -> FrameSnapshot {
        let dt = self.config.frame_dt();
        self.frame(dt)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn observer(&self) -> Position3 {
        self.scene.observer
    }

    pub fn target(&self) -> Position3 {
        self.scene.target
    }

    pub fn orientation(&self) -> Orientation {
        self.scene.orientation
    }

    pub fn solver(&self) -> SolverConfig {
        self.solver
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        log::debug!("command: {command:?}");
        match command {
            PlayerCommand::SetControl { control, held } => {
                self.scene.set_held(control, held);
            }
            PlayerCommand::SetObserver { position } => {
                self.scene.observer = position;
            }
            PlayerCommand::SetTarget { position } => {
                self.scene.target = position;
            }
            PlayerCommand::SetOrientation { orientation } => {
                self.scene.orientation = orientation;
            }
            PlayerCommand::Reset => {
                self.scene = Scene::from_config(&self.config);
                self.solver = self.config.solver;
            }
            PlayerCommand::SetPoleAngle { pole_angle } => {
                self.solver.pole_angle = pole_angle;
            }
            PlayerCommand::Pause => {
                self.paused = true;
            }
            PlayerCommand::Resume => {
                self.paused = false;
            }
        }
    }
}
