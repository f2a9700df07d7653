//! Frame loop thread: runs the scene engine at the configured rate and emits snapshots.
//!
//! The engine is created inside the thread. Commands arrive via an `mpsc`
//! channel. Snapshots go to a `SnapshotSink` and are stored in shared state
//! for synchronous polling.

use std::io::{self, Write};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use boresight_core::config::SceneConfig;
use boresight_core::state::FrameSnapshot;
use boresight_sim::SceneEngine;

use crate::state::LoopCommand;

/// Receives every snapshot the loop produces.
pub trait SnapshotSink: Send + 'static {
    fn emit(&mut self, snapshot: &FrameSnapshot) -> io::Result<()>;
}

/// Writes one JSON object per line.
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write + Send + 'static> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + 'static> SnapshotSink for JsonLinesSink<W> {
    fn emit(&mut self, snapshot: &FrameSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Pacing and termination for the loop.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
    /// Sleep between frames to hold the frame rate. Off for batch runs.
    pub realtime: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_frames: None,
            realtime: true,
        }
    }
}

/// Spawns the frame loop in a new thread.
///
/// Returns the command sender for the bridge and the thread handle.
pub fn spawn_frame_loop(
    config: SceneConfig,
    sink: impl SnapshotSink,
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("boresight-frame-loop".into())
        .spawn(move || {
            run_frame_loop(config, sink, options, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The frame loop. Runs until Shutdown, channel disconnect, the frame limit,
/// or a sink error.
fn run_frame_loop(
    config: SceneConfig,
    mut sink: impl SnapshotSink,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let frame_duration = Duration::from_secs_f64(config.frame_dt());
    let mut engine = SceneEngine::new(config);
    let mut next_frame_time = Instant::now();
    let mut frames: u64 = 0;

    log::info!("frame loop started ({:?} per frame)", frame_duration);

    loop {
        if options.max_frames.is_some_and(|max| frames >= max) {
            log::info!("frame limit reached after {frames} frames");
            return;
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => {
                    log::info!("frame loop shutting down after {frames} frames");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("command channel closed after {frames} frames");
                    return;
                }
            }
        }

        // 2. Advance one frame
        let snapshot = engine.step();
        frames += 1;

        // 3. Hand the snapshot to the renderer
        if let Err(e) = sink.emit(&snapshot) {
            log::warn!("snapshot sink failed, stopping: {e}");
            return;
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        if options.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind: reset instead of catching up
                next_frame_time = now;
            }
        }
    }
}
