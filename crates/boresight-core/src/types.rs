//! Fundamental geometric value types.
//!
//! World space is right-handed with Z up. The observer's body forward axis is
//! +Y before rotation, so azimuth is measured from +Y toward +X.

use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A point in world space (arbitrary length units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A direction or displacement in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A point on the screen in pixels. Y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// Observer attitude in radians. Unbounded; the engine never wraps these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation about world Z. Positive turns the nose from +Y toward −X.
    pub yaw: f64,
    /// Nose up/down relative to the horizontal.
    pub pitch: f64,
    /// Rotation about the body's own forward axis.
    pub roll: f64,
}

/// Azimuth/elevation of a direction, radians.
///
/// `az` comes from `atan2(x, y)` and lies in (−π, π]; `el` comes from
/// `atan2(z, horizontal)` and lies in [−π/2, π/2].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BearingPair {
    pub az: f64,
    pub el: f64,
}

/// Angles derived from the spherical triangle between target and boresight.
///
/// `j` is non-negative. The others are not normalized and can leave (−π, π].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct SphericalAngles {
    /// Angular separation of the target from the nose.
    pub j: f64,
    /// HUD bearing angle before roll is applied.
    pub G: f64,
    pub E: f64,
    pub F: f64,
    /// Angle at the shared pole.
    pub J: f64,
}

/// HUD marker position in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HudPoint {
    pub x: f64,
    pub y: f64,
}

/// Unit body axes of the observer, for drawing its body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyAxes {
    pub forward: Vector3,
    pub right: Vector3,
    pub up: Vector3,
}

/// Frame counter and elapsed (unpaused) time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTime {
    /// Number of frames that advanced time.
    pub frame: u64,
    /// Elapsed time in seconds.
    pub elapsed_secs: f64,
}

impl Position3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Displacement from `self` to `other`.
    pub fn displacement_to(&self, other: &Position3) -> Vector3 {
        Vector3::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    /// Straight-line distance to another position.
    pub fn range_to(&self, other: &Position3) -> f64 {
        self.displacement_to(other).length()
    }

    /// Position offset by `v`.
    pub fn offset(&self, v: Vector3) -> Position3 {
        Position3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Length of the projection onto the X–Y plane.
    pub fn horizontal_length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or zero if the length is zero or
    /// not finite.
    pub fn normalize_or_zero(&self) -> Vector3 {
        let n = self.length();
        if n.is_finite() && n > 0.0 {
            Vector3::new(self.x / n, self.y / n, self.z / n)
        } else {
            Vector3::ZERO
        }
    }

    pub fn scale(&self, k: f64) -> Vector3 {
        Vector3::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, k: f64) -> Vector3 {
        self.scale(k)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Position3> for DVec3 {
    fn from(p: Position3) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Orientation {
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Build from degrees.
    pub fn from_degrees(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self::new(yaw.to_radians(), pitch.to_radians(), roll.to_radians())
    }
}

impl BearingPair {
    pub fn new(az: f64, el: f64) -> Self {
        Self { az, el }
    }
}

impl HudPoint {
    /// Distance from a screen point, typically the HUD center.
    pub fn distance_to(&self, center: &Point2) -> f64 {
        (self.x - center.x).hypot(self.y - center.y)
    }
}

impl FrameTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}
