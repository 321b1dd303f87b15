// This file is part of quadruped_controller.
//
// Developed for the quadruped robot control system.
// See the COPYRIGHT file at the top-level directory of this distribution
// for details of code ownership.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use log::{debug, info};
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    flag::register,
};
use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::sync_channel,
    Arc,
};
use std::thread::spawn;
use std::time::Duration;

use crate::config::Config;
use crate::constants::{BOUND_SYNC_CHANNEL, NUM_DIGIT_TELEMETRY, NUM_LEG};
use crate::control::control_loop::ControlLoop;
use crate::control::control_loop_process::ControlLoopProcess;
use crate::enums::ControlStrategy;
use crate::interface::motor_controller::MotorController;
use crate::mock::mock_motor_controller::MockMotorController;

/// Run the application.
///
/// # Arguments
/// * `strategy` - The control strategy.
/// * `is_simulation_mode` - Is the simulation mode or not.
pub fn run(strategy: ControlStrategy, is_simulation_mode: bool) {
    // Log the running mode
    let mode = if is_simulation_mode {
        "simulation mode"
    } else {
        "hardware mode"
    };
    info!(
        "Run the quadruped control system in {mode} with the {} strategy.",
        strategy.as_ref()
    );

    let config = Config::new(Path::new("config/parameters_control.yaml"));

    // Create the motor controllers
    let controllers = create_motor_controllers(is_simulation_mode);

    // Register the signals that stop the application
    let stop = Arc::new(AtomicBool::new(false));
    for signal in [SIGTERM, SIGINT].iter() {
        let _ = register(*signal, stop.clone());
    }

    // Run the control loop
    let (sender_to_application, receiver_from_control_loop) = sync_channel(BOUND_SYNC_CHANNEL);

    let mut control_loop_process = ControlLoopProcess::new(
        ControlLoop::new(&config, strategy, controllers),
        &sender_to_application,
        &stop,
    );
    let handle = spawn(move || {
        control_loop_process.run();
    });

    // Drain the telemetry until the stop signal
    while !stop.load(Ordering::Relaxed) {
        if let Ok(telemetry) = receiver_from_control_loop.recv_timeout(Duration::from_millis(100)) {
            for message in telemetry.get_messages(NUM_DIGIT_TELEMETRY) {
                debug!("{message}");
            }
        }
    }

    info!("Stopping the quadruped control system...");

    // Wait for the control loop to stop and log the messages
    let _ = handle.join();
    info!("Quadruped control system should be stopped.");
}

/// Create the motor controllers.
///
/// # Arguments
/// * `is_simulation_mode` - Is the simulation mode or not.
///
/// # Returns
/// The motor controllers, one per leg.
///
/// # Panics
/// If the simulation mode is disabled. The hardware transport belongs to
/// the surrounding system.
fn create_motor_controllers(is_simulation_mode: bool) -> Vec<Box<dyn MotorController>> {
    if !is_simulation_mode {
        panic!("Not implemented yet.");
    }

    (0..NUM_LEG)
        .map(|_| Box::new(MockMotorController::new()) as Box<dyn MotorController>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_motor_controllers() {
        let controllers = create_motor_controllers(true);

        assert_eq!(controllers.len(), NUM_LEG);
    }

    #[test]
    #[should_panic]
    fn test_create_motor_controllers_panic() {
        let _ = create_motor_controllers(false);
    }
}
