//! Parameters structure for arm control

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ArmGeometry, JointAngles};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for arm control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    // ---- GEOMETRY ----
    /// The length of the shoulder link.
    ///
    /// Units: centimeters
    pub shoulder_length_cm: f64,

    /// The length of the elbow link.
    ///
    /// Units: centimeters
    pub elbow_length_cm: f64,

    // ---- HOME POSE ----
    /// Base servo angle of the home (rest) pose.
    ///
    /// Units: degrees
    pub home_base_deg: f64,

    /// Top servo angle of the home (rest) pose.
    ///
    /// Units: degrees
    pub home_top_deg: f64,

    // ---- MOTION TUNING ----
    /// Number of interpolation steps in a shape-tracing move.
    pub trace_steps: u32,

    /// Delay between interpolation steps when tracing.
    ///
    /// Units: seconds
    pub trace_step_delay_s: f64,

    /// Number of interpolation steps in a homing move.
    pub home_steps: u32,

    /// Delay between interpolation steps when homing. Homing is deliberately
    /// slower than tracing.
    ///
    /// Units: seconds
    pub home_step_delay_s: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Params {
    /// The arm geometry described by these parameters.
    pub fn geometry(&self) -> ArmGeometry {
        ArmGeometry {
            shoulder_length_cm: self.shoulder_length_cm,
            elbow_length_cm: self.elbow_length_cm,
        }
    }

    /// The home (rest) pose described by these parameters.
    pub fn home_angles(&self) -> JointAngles {
        JointAngles {
            base_deg: self.home_base_deg,
            top_deg: self.home_top_deg,
        }
    }

    pub fn trace_step_delay(&self) -> Duration {
        Duration::from_secs_f64(self.trace_step_delay_s)
    }

    pub fn home_step_delay(&self) -> Duration {
        Duration::from_secs_f64(self.home_step_delay_s)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            shoulder_length_cm: 8.0,
            elbow_length_cm: 4.0,
            home_base_deg: 90.0,
            home_top_deg: 90.0,
            trace_steps: 30,
            trace_step_delay_s: 0.03,
            home_steps: 30,
            home_step_delay_s: 0.05,
        }
    }
}
