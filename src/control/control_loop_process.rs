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

use log::info;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::SyncSender,
    Arc,
};
use std::thread::sleep;
use std::time::Instant;

use crate::control::control_loop::ControlLoop;
use crate::interface::motor_controller::MotorController;
use crate::telemetry::telemetry_control_loop::TelemetryControlLoop;

pub struct ControlLoopProcess<T: MotorController> {
    // Control loop
    pub control_loop: ControlLoop<T>,
    // Sender of the telemetry to the application.
    _sender_to_application: SyncSender<TelemetryControlLoop>,
    // Stop the loop.
    _stop: Arc<AtomicBool>,
}

impl<T: MotorController> ControlLoopProcess<T> {
    /// Create a new instance of the control loop process.
    ///
    /// # Arguments
    /// * `control_loop` - The control loop.
    /// * `sender_to_application` - The sender of the telemetry to the
    /// application.
    /// * `stop` - An Arc instance that holds the AtomicBool instance to stop
    /// the loop.
    ///
    /// # Returns
    /// New instance of the control loop process.
    pub fn new(
        control_loop: ControlLoop<T>,
        sender_to_application: &SyncSender<TelemetryControlLoop>,
        stop: &Arc<AtomicBool>,
    ) -> Self {
        Self {
            control_loop: control_loop,

            _sender_to_application: sender_to_application.clone(),

            _stop: stop.clone(),
        }
    }

    /// Run the control loop until the stop flag is raised. Each iteration
    /// runs one full cycle to completion and then sleeps for the cycle
    /// period; the sleep adds to the computation time and suspends only
    /// this task.
    pub fn run(&mut self) {
        info!(
            "Control loop is running with the {} strategy.",
            self.control_loop.strategy.as_ref()
        );

        let period = self.control_loop.cycle_period();
        while !self._stop.load(Ordering::Relaxed) {
            // Time the control loop
            let now = Instant::now();

            self.control_loop.step();

            // Send the telemetry to the application and ignore the error.
            let mut telemetry = self.control_loop.telemetry.clone();
            telemetry.cycle_time = now.elapsed().as_secs_f64();

            let _ = self._sender_to_application.try_send(telemetry);

            sleep(period);
        }

        info!("Control loop is stopped.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::mpsc::{sync_channel, Receiver};
    use std::thread::spawn;
    use std::time::Duration;

    use crate::config::Config;
    use crate::constants::{BOUND_SYNC_CHANNEL, NUM_LEG};
    use crate::enums::ControlStrategy;
    use crate::mock::mock_motor_controller::MockMotorController;

    fn create_control_loop_process() -> (
        ControlLoopProcess<MockMotorController>,
        Receiver<TelemetryControlLoop>,
    ) {
        let config = Config::new(Path::new("config/parameters_control.yaml"));

        let stop = Arc::new(AtomicBool::new(false));

        let (sender_to_application, receiver_from_control_loop) = sync_channel(BOUND_SYNC_CHANNEL);

        (
            ControlLoopProcess::new(
                ControlLoop::new(
                    &config,
                    ControlStrategy::OpenLoopGait,
                    vec![MockMotorController::new(); NUM_LEG],
                ),
                &sender_to_application,
                &stop,
            ),
            receiver_from_control_loop,
        )
    }

    #[test]
    fn test_run() {
        let (mut control_loop_process, receiver_from_control_loop) = create_control_loop_process();
        let stop = control_loop_process._stop.clone();

        let handle = spawn(move || {
            control_loop_process.run();
        });

        sleep(Duration::from_millis(100));

        // The loop keeps cycling until the stop flag is raised.
        stop.store(true, Ordering::Relaxed);

        assert!(handle.join().is_ok());

        let mut telemetries = Vec::new();
        while let Ok(telemetry) = receiver_from_control_loop.try_recv() {
            telemetries.push(telemetry);
        }

        // Multiple cycles ran within the waiting time.
        assert!(telemetries.len() > 1);

        let latest_telemetry = telemetries.last().unwrap();
        assert_eq!(latest_telemetry.strategy, "OpenLoopGait");
        assert!(latest_telemetry.cycle_time >= 0.0);
        assert!(latest_telemetry.timestamp_command > 0.0);
    }
}
