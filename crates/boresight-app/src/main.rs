//! boresight: headless frame loop speaking JSON lines.
//!
//! Usage:
//!   boresight [--config scene.json] [--frames N] [--batch]
//!
//! Reads `PlayerCommand`s from stdin, one JSON object per line, and writes one
//! `FrameSnapshot` per frame to stdout. Logging goes to stderr (`RUST_LOG`).

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use boresight_app::config::load_config;
use boresight_app::frame_loop::{JsonLinesSink, LoopOptions};
use boresight_app::ipc;
use boresight_app::state::AppState;

struct Args {
    config: Option<PathBuf>,
    options: LoopOptions,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let args = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            log::error!("{e}");
            print_usage();
            process::exit(1);
        }
    };

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Error loading config: {e}");
            process::exit(1);
        }
    };

    let state = Arc::new(AppState::new());
    let sink = JsonLinesSink::new(io::stdout());
    if let Err(e) = ipc::start_simulation(&state, config, sink, args.options) {
        log::error!("{e}");
        process::exit(1);
    }

    // The reader may stay blocked on stdin after the loop ends; returning
    // from main ends the process regardless.
    let reader_state = Arc::clone(&state);
    std::thread::spawn(move || forward_stdin(&reader_state));

    if let Err(e) = ipc::wait(&state) {
        log::error!("{e}");
        process::exit(1);
    }
    log::info!("frame loop finished");
}

fn forward_stdin(state: &AppState) {
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("stdin read failed: {e}");
                break;
            }
        };
        match ipc::parse_command_line(&line) {
            Ok(Some(command)) => {
                if let Err(e) = ipc::send_command(command, state) {
                    log::info!("{e}");
                    return;
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("{e}"),
        }
    }
    log::info!("stdin closed, shutting down");
    let _ = ipc::shutdown(state);
}

fn print_usage() {
    eprintln!(
        "boresight: bearing/HUD frame loop (JSON lines on stdin/stdout)\n\
         \n\
         Options:\n\
         \n\
           --config <path>  Scene config JSON (default: built-in scene)\n\
           --frames <N>     Stop after N frames\n\
           --batch          Do not pace frames to the frame rate\n\
         \n\
         Example:\n\
         \n\
           echo '{{\"type\":\"SetControl\",\"control\":\"RollIncrease\",\"held\":true}}' \\\n\
             | boresight --frames 120 --batch\n"
    );
}

/// `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let mut parsed = Args {
        config: None,
        options: LoopOptions::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "help" | "--help" | "-h" => return Ok(None),
            "--config" => {
                let value = args.get(i + 1).ok_or("--config needs a path")?;
                parsed.config = Some(PathBuf::from(value));
                i += 1;
            }
            "--frames" => {
                let value = args.get(i + 1).ok_or("--frames needs a count")?;
                let frames = value
                    .parse()
                    .map_err(|_| format!("Invalid frame count: {value}"))?;
                parsed.options.max_frames = Some(frames);
                i += 1;
            }
            "--batch" => parsed.options.realtime = false,
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(Some(parsed))
}
