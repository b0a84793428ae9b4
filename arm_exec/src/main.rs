//! # Plotter Arm Control Executable
//!
//! Drives the two-joint planar plotter arm through a sequence of shapes:
//!
//!     - Initialise session, logging and parameters
//!     - Reset the arm to the home pose from wherever it powered on
//!     - Trace each shape from the shapes file in order, pausing between
//!       shapes
//!
//! All motion goes through `arm_lib::arm_ctrl`; the servo backend is the
//! simulated driver, real hardware being outside the scope of this
//! executable.

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

use arm_lib::{
    arm_ctrl::{Params, ShapePlayer},
    params::ArmExecParams,
    servo_ctrl::SimServoDriver,
    shapes::ShapeSet,
};

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Result};
use log::info;
use std::thread;
use std::time::Duration;

// Internal
use util::{
    logger::{logger_init, LevelFilter},
    session::Session,
};

// ---------------------------------------------------------------------------
// MAIN
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("arm_exec", "sessions")
        .wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Plotter Arm Control Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    info!("Initialising...");

    // ---- LOAD PARAMETERS ----

    let exec_params: ArmExecParams = util::params::load("arm_exec.toml")
        .wrap_err("Could not load exec params")?;

    let arm_params: Params = util::params::load("arm_ctrl.toml")
        .wrap_err("Could not load arm control params")?;

    let shape_set: ShapeSet = util::params::load(&exec_params.shapes_file)
        .wrap_err("Could not load the shapes file")?;

    info!("Parameters loaded, {} shapes to trace", shape_set.shapes.len());

    // ---- PLAYER INITIALISATION ----

    let inter_shape_pause = Duration::from_secs_f64(exec_params.inter_shape_pause_s);

    let mut player = ShapePlayer::new(arm_params, SimServoDriver::new());

    // Anchor on whatever pose the servos are actually in at cold start
    player
        .reset_to_home()
        .wrap_err("Failed to reset the arm to home")?;

    info!("Initialisation complete");

    // ---- SHAPE PLAYBACK ----

    for (i, shape) in shape_set.shapes.iter().enumerate() {
        if i > 0 {
            thread::sleep(inter_shape_pause);
        }

        let report = player
            .play(shape)
            .wrap_err_with(|| format!("Failed to trace shape \"{}\"", shape.name))?;

        session
            .save(format!("{}_report.json", shape.name), &report)
            .wrap_err("Failed to save the playback report")?;
    }

    info!("All shapes traced");

    Ok(())
}
