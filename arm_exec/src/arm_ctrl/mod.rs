//! Arm control module
//!
//! Converts Cartesian waypoints into joint angles for the two-link plotter
//! arm and moves the joints smoothly between them. Submodules:
//!
//! - `kinematics`: the inverse kinematics solver
//! - `trajectory`: the linear angle-ramp motion primitive
//! - `shape_player`: shape playback sequencing
//! - `params`: the arm control parameter set

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod kinematics;
mod params;
mod shape_player;
mod trajectory;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use kinematics::*;
pub use params::*;
pub use shape_player::*;
pub use trajectory::*;

use crate::servo_ctrl::{ServoError, SERVO_TRAVEL_MAX_DEG, SERVO_TRAVEL_MIN_DEG};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Mounting offset of the top servo relative to the elbow angle.
///
/// The top servo is mounted rotated 90 degrees from the base joint, so the
/// solver's elbow angle maps to a servo angle 90 degrees lower.
///
/// Units: degrees
pub const TOP_SERVO_MOUNT_OFFSET_DEG: f64 = 90.0;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during arm control.
#[derive(Debug, thiserror::Error)]
pub enum ArmCtrlError {
    #[error("Target point ({x_cm:.2}, {y_cm:.2}) cm is out of reach")]
    TargetUnreachable { x_cm: f64, y_cm: f64 },

    #[error("Servo driver error: {0}")]
    Servo(#[from] ServoError),
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Clamp a raw angle into the servo travel range.
///
/// Near-boundary solver outputs are common, so out-of-range angles degrade to
/// the nearest valid pose rather than rejecting the point.
pub fn clamp_to_travel(angle_deg: f64) -> f64 {
    util::maths::clamp(&angle_deg, &SERVO_TRAVEL_MIN_DEG, &SERVO_TRAVEL_MAX_DEG)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp_to_travel() {
        // Identity inside the travel range, including the edges
        assert_eq!(clamp_to_travel(0.0), 0.0);
        assert_eq!(clamp_to_travel(90.0), 90.0);
        assert_eq!(clamp_to_travel(180.0), 180.0);

        assert_eq!(clamp_to_travel(-28.95), 0.0);
        assert_eq!(clamp_to_travel(240.0), 180.0);

        // Idempotent
        assert_eq!(clamp_to_travel(clamp_to_travel(-1000.0)), clamp_to_travel(-1000.0));
        assert_eq!(clamp_to_travel(clamp_to_travel(93.2)), 93.2);
    }
}
