//! # Arm Executable Parameters

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// STRUCTS
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct ArmExecParams {

    /// Name of the shapes file to trace, relative to the params directory.
    pub shapes_file: String,

    /// Pause between consecutive shapes.
    ///
    /// Units: seconds
    pub inter_shape_pause_s: f64,
}
