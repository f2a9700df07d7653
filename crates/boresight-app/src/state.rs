//! Application state shared between the command bridge and the frame loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use boresight_core::commands::PlayerCommand;
use boresight_core::state::FrameSnapshot;

/// Commands sent from the bridge to the frame loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A player command to forward to the scene engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the frame loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state is `Sync`
/// - `Mutex<Option<...>>` holds what does not exist before `start_simulation`
/// - the latest snapshot is `Arc<Mutex<...>>`, shared with the loop thread
pub struct AppState {
    /// Channel sender to forward commands to the frame loop.
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    /// Frame loop thread, taken when waiting for it to finish.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    /// Whether the frame loop has been started.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
