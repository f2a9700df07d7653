//! Command bridge between the front end and the frame loop thread.
//!
//! The front end speaks JSON lines: one `PlayerCommand` per line in, one
//! `FrameSnapshot` per line out. These handlers mirror that protocol and
//! return `Result<_, String>` for display.

use std::io;

use boresight_core::commands::PlayerCommand;
use boresight_core::config::SceneConfig;
use boresight_core::state::FrameSnapshot;

use crate::frame_loop::{self, LoopOptions, SnapshotSink};
use crate::state::{AppState, LoopCommand};

/// Start the frame loop. Fails if it is already running.
pub fn start_simulation(
    state: &AppState,
    config: SceneConfig,
    sink: impl SnapshotSink,
    options: LoopOptions,
) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Simulation already running".into());
    }

    let (cmd_tx, handle) =
        frame_loop::spawn_frame_loop(config, sink, options, state.latest_snapshot.clone())
            .map_err(|e| format!("Failed to spawn frame loop: {e}"))?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    let mut handle_lock = state.loop_handle.lock().map_err(|e| e.to_string())?;
    *handle_lock = Some(handle);
    *running = true;

    Ok(())
}

/// Send a player command to the frame loop.
pub fn send_command(command: PlayerCommand, state: &AppState) -> Result<(), String> {
    forward(LoopCommand::PlayerCommand(command), state)
}

/// Ask the frame loop to stop.
pub fn shutdown(state: &AppState) -> Result<(), String> {
    forward(LoopCommand::Shutdown, state)
}

fn forward(command: LoopCommand, state: &AppState) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(command)
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Block until the frame loop thread exits.
pub fn wait(state: &AppState) -> Result<(), String> {
    let handle = state
        .loop_handle
        .lock()
        .map_err(|e| e.to_string())?
        .take();
    if let Some(handle) = handle {
        handle
            .join()
            .map_err(|_| "Frame loop thread panicked".to_string())?;
    }
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    *running = false;
    Ok(())
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<FrameSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Parse one line of the command stream.
///
/// Blank lines and lines starting with `#` are skipped (`Ok(None)`).
pub fn parse_command_line(line: &str) -> io::Result<Option<PlayerCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid command: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use boresight_core::enums::Control;

    #[derive(Clone, Default)]
    struct CollectSink(Arc<Mutex<Vec<FrameSnapshot>>>);

    impl SnapshotSink for CollectSink {
        fn emit(&mut self, snapshot: &FrameSnapshot) -> io::Result<()> {
            self.0.lock().unwrap().push(snapshot.clone());
            Ok(())
        }
    }

    #[test]
    fn test_parse_command_line() {
        assert!(parse_command_line("").unwrap().is_none());
        assert!(parse_command_line("   # comment").unwrap().is_none());

        let cmd = parse_command_line(r#" {"type":"Pause"} "#).unwrap();
        assert!(matches!(cmd, Some(PlayerCommand::Pause)));

        let cmd = parse_command_line(r#"{"type":"SetControl","control":"TargetPosX","held":true}"#)
            .unwrap();
        assert!(matches!(
            cmd,
            Some(PlayerCommand::SetControl {
                control: Control::TargetPosX,
                held: true
            })
        ));
    }

    #[test]
    fn test_parse_command_line_rejects_garbage() {
        let err = parse_command_line(r#"{"type":"Explode"}"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(send_command(PlayerCommand::Pause, &state).is_err());
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_send_shutdown() {
        let state = AppState::new();
        let options = LoopOptions {
            max_frames: None,
            realtime: true,
        };
        start_simulation(&state, SceneConfig::default(), CollectSink::default(), options)
            .unwrap();
        assert!(
            start_simulation(&state, SceneConfig::default(), CollectSink::default(), options)
                .is_err(),
            "second start must fail"
        );

        send_command(PlayerCommand::Pause, &state).unwrap();

        // Wait for the loop to publish a paused snapshot.
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(snap) = get_snapshot(&state).unwrap() {
                if snap.paused {
                    break;
                }
            }
            assert!(Instant::now() < deadline, "no paused snapshot within 5s");
            std::thread::sleep(Duration::from_millis(5));
        }

        shutdown(&state).unwrap();
        wait(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
    }
}
