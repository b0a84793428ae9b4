//! # Plotter Arm Library
//!
//! Library half of the arm control executable. Contains all module code so
//! that both the binary and the tests can use it:
//!
//! - `arm_ctrl`: inverse kinematics, trajectory interpolation and shape
//!   playback
//! - `servo_ctrl`: the servo driver abstraction and the simulated driver
//! - `shapes`: shape point-list data structures

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod arm_ctrl;
pub mod params;
pub mod servo_ctrl;
pub mod shapes;
