//! Scene configuration loading.
//!
//! Configs are JSON. Missing fields take their defaults, so `{}` is a valid
//! file. Malformed or out-of-range content is reported as `InvalidData`.

use std::fs;
use std::io;
use std::path::Path;

use boresight_core::config::SceneConfig;

/// Load a config from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> io::Result<SceneConfig> {
    let Some(path) = path else {
        log::info!("using default scene config");
        return Ok(SceneConfig::default());
    };

    let text = fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    log::info!("loaded scene config from {}", path.display());
    Ok(config)
}

/// Parse and validate config JSON.
pub fn parse_config(text: &str) -> io::Result<SceneConfig> {
    let config: SceneConfig = serde_json::from_str(text).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("Invalid scene config: {e}"))
    })?;
    validate(&config)?;
    Ok(config)
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

/// Reject values the frame loop or HUD cannot use.
pub fn validate(config: &SceneConfig) -> io::Result<()> {
    if config.frame_rate == 0 {
        return Err(invalid("frame_rate must be positive".into()));
    }

    let hud = &config.hud;
    if !(hud.pixels_per_radian.is_finite() && hud.pixels_per_radian > 0.0) {
        return Err(invalid(format!(
            "hud.pixels_per_radian must be positive, got {}",
            hud.pixels_per_radian
        )));
    }
    if !(hud.max_radius_fraction.is_finite() && hud.max_radius_fraction >= 0.0) {
        return Err(invalid(format!(
            "hud.max_radius_fraction must be non-negative, got {}",
            hud.max_radius_fraction
        )));
    }
    if !(hud.screen_height.is_finite() && hud.screen_height > 0.0) {
        return Err(invalid(format!(
            "hud.screen_height must be positive, got {}",
            hud.screen_height
        )));
    }

    let rates = &config.controls;
    if !(rates.move_speed.is_finite() && rates.rotate_speed.is_finite()) {
        return Err(invalid("control rates must be finite".into()));
    }

    let p = [config.observer, config.target];
    let o = config.orientation;
    let all_finite = p.iter().all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite())
        && o.yaw.is_finite()
        && o.pitch.is_finite()
        && o.roll.is_finite();
    if !all_finite {
        return Err(invalid("initial scene must be finite".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boresight_core::enums::PoleAngle;

    #[test]
    fn test_empty_object_is_default() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(
            r#"{"solver":{"pole_angle":"Included"},"target":{"x":1.0,"y":2.0,"z":3.0}}"#,
        )
        .unwrap();
        assert_eq!(config.solver.pole_angle, PoleAngle::Included);
        assert_eq!(config.target.z, 3.0);
        assert_eq!(config.observer, SceneConfig::default().observer);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = parse_config("{not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_rejects_bad_values() {
        for text in [
            r#"{"frame_rate":0}"#,
            r#"{"hud":{"pixels_per_radian":0.0}}"#,
            r#"{"hud":{"max_radius_fraction":-0.1}}"#,
            r#"{"hud":{"screen_height":-720.0}}"#,
        ] {
            let err = parse_config(text).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidData, "{text}");
        }
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_config(Some(Path::new("/nonexistent/boresight.json"))).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_no_path_gives_default() {
        assert_eq!(load_config(None).unwrap(), SceneConfig::default());
    }
}
