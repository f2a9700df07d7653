//! bearing-probe: one-shot evaluation of the bearing/HUD pipeline.
//!
//! Usage:
//!   bearing-probe --observer 0,0,2 --target 8,6,4 --attitude 20,-5,15
//!   bearing-probe --target 1,1,0 --pole included --json

use std::process;

use boresight_core::config::{HudConfig, SceneConfig, SolverConfig};
use boresight_core::enums::PoleAngle;
use boresight_core::types::{Orientation, Position3};
use boresight_geometry::evaluate;
use boresight_sim::readout::{angle_lines, attitude_line};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }

    let defaults = SceneConfig::default();
    let observer = match parse_triple(&args, "--observer") {
        Ok(Some([x, y, z])) => Position3::new(x, y, z),
        Ok(None) => defaults.observer,
        Err(e) => fail(&e),
    };
    let target = match parse_triple(&args, "--target") {
        Ok(Some([x, y, z])) => Position3::new(x, y, z),
        Ok(None) => defaults.target,
        Err(e) => fail(&e),
    };
    let orientation = match parse_triple(&args, "--attitude") {
        Ok(Some([yaw, pitch, roll])) => Orientation::from_degrees(yaw, pitch, roll),
        Ok(None) => defaults.orientation,
        Err(e) => fail(&e),
    };
    let solver = match parse_pole(&args) {
        Ok(pole_angle) => SolverConfig { pole_angle },
        Err(e) => fail(&e),
    };
    let json = args.iter().any(|a| a == "--json");

    log::debug!("observer={observer:?} target={target:?} attitude={orientation:?}");
    let hud = HudConfig::default();
    let output = evaluate(&observer, &target, &orientation, &hud, &solver);

    if json {
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(&format!("Error encoding output: {e}")),
        }
        return;
    }

    for line in angle_lines(&output) {
        println!("{line}");
    }
    println!("{}", attitude_line(&orientation, &output));
    println!(
        "HUD=({:.1}, {:.1}) px  center=({:.0}, {:.0})  radius={:.1} px{}",
        output.hud.x,
        output.hud.y,
        hud.center.x,
        hud.center.y,
        output.hud.distance_to(&hud.center),
        if output.sine_rule_guarded {
            "  [F guard]"
        } else {
            ""
        }
    );
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    print_usage();
    process::exit(1);
}

fn print_usage() {
    eprintln!(
        "bearing-probe: evaluate target bearing and HUD position\n\
         \n\
           --observer <x,y,z>          Observer position (default: 0,0,2)\n\
           --target <x,y,z>            Target position (default: 8,6,4)\n\
           --attitude <yaw,pitch,roll> Observer attitude in degrees (default: 20,-5,15)\n\
           --pole <reference|included> Pole-angle closure (default: reference)\n\
           --json                      Print the full output as JSON\n\
         \n\
         Example:\n\
         \n\
           bearing-probe --observer 0,0,2 --target 8,6,4 --attitude 20,-5,15\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, String> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| format!("{flag} needs a value")),
    }
}

fn parse_triple(args: &[String], flag: &str) -> Result<Option<[f64; 3]>, String> {
    let Some(value) = flag_value(args, flag)? else {
        return Ok(None);
    };
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("{flag} expects three comma-separated numbers, got {value}"));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        let v: f64 = part
            .trim()
            .parse()
            .map_err(|_| format!("{flag}: invalid number {part}"))?;
        if !v.is_finite() {
            return Err(format!("{flag}: {part} is not finite"));
        }
        *slot = v;
    }
    Ok(Some(out))
}

fn parse_pole(args: &[String]) -> Result<PoleAngle, String> {
    match flag_value(args, "--pole")? {
        None | Some("reference") => Ok(PoleAngle::Reference),
        Some("included") => Ok(PoleAngle::Included),
        Some(other) => Err(format!("Unknown pole closure: {other}")),
    }
}
