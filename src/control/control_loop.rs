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

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::{COUPLED_CONTROL_LEG, NUM_LEG};
use crate::control::actuator::dispatch_positions;
use crate::control::coupling::{allocate_currents, decouple};
use crate::control::gait::Gait;
use crate::control::math_tool::clip;
use crate::control::pid::LegGains;
use crate::enums::ControlStrategy;
use crate::interface::motor_controller::MotorController;
use crate::telemetry::telemetry_control_loop::TelemetryControlLoop;

pub struct ControlLoop<T: MotorController> {
    // Control strategy. Fixed at construction.
    pub strategy: ControlStrategy,
    // Configuration.
    pub config: Config,
    // Telemetry of the latest cycle.
    pub telemetry: TelemetryControlLoop,
    // Motor controllers, one per leg. This loop is the single writer.
    pub controllers: Vec<T>,
    _gait: Gait,
    _gains: Vec<LegGains>,
    // Epoch of the elapsed monotonic time used for the gait phase and the
    // command timestamps.
    _start: Instant,
}

impl<T: MotorController> ControlLoop<T> {
    /// Create a new control loop.
    ///
    /// # Arguments
    /// * `config` - The configuration.
    /// * `strategy` - The control strategy.
    /// * `controllers` - The motor controllers, one per leg.
    ///
    /// # Returns
    /// A new control loop.
    ///
    /// # Panics
    /// If the controllers do not cover all the legs.
    pub fn new(config: &Config, strategy: ControlStrategy, controllers: Vec<T>) -> Self {
        assert!(controllers.len() == NUM_LEG);

        let mut telemetry = TelemetryControlLoop::new();
        telemetry.strategy = String::from(strategy.as_ref());

        Self {
            strategy: strategy,

            config: config.clone(),

            telemetry: telemetry,

            controllers: controllers,

            _gait: Gait::from_config(config),
            _gains: LegGains::from_config(config),

            _start: Instant::now(),
        }
    }

    /// Run one control cycle of the selected strategy.
    pub fn step(&mut self) {
        match self.strategy {
            ControlStrategy::OpenLoopGait => self.step_open_loop_gait(),
            ControlStrategy::CoupledPid => self.step_coupled_pid(),
        }
    }

    /// Get the delay after each cycle.
    ///
    /// # Notes
    /// The delay adds to the cycle computation time. The loop does not
    /// compensate for a long cycle, so jitter accumulates under a variable
    /// computation cost.
    ///
    /// # Returns
    /// The delay.
    pub fn cycle_period(&self) -> Duration {
        match self.strategy {
            ControlStrategy::OpenLoopGait => {
                Duration::from_millis(self.config.open_loop_period_ms as u64)
            }
            ControlStrategy::CoupledPid => {
                Duration::from_micros((1_000_000.0 / self.config.position_control_frequency) as u64)
            }
        }
    }

    /// Run one open-loop cycle: calculate the gait setpoints from the
    /// elapsed time and dispatch them as position commands.
    fn step_open_loop_gait(&mut self) {
        let time = self._start.elapsed().as_secs_f64();
        let setpoints = self._gait.setpoints(time);

        dispatch_positions(&mut self.controllers, &setpoints);

        self.telemetry.setpoints = setpoints.to_vec();
        self.telemetry.timestamp_command = time;
    }

    /// Run one closed-loop cycle of the coupled leg: decouple the measured
    /// joint angles, correct each decoupled axis independently, and
    /// recombine the corrections into one dual-current command.
    fn step_coupled_pid(&mut self) {
        let alpha = self.controllers[COUPLED_CONTROL_LEG].position_estimate(0);
        let beta = self.controllers[COUPLED_CONTROL_LEG].position_estimate(1);

        let (theta, gamma) = decouple(alpha, beta);

        // TODO: Use the velocity estimates once the position feedback of
        // the motor controllers carries them.
        let gains = &self._gains[COUPLED_CONTROL_LEG];
        let tau_theta = gains
            .theta
            .correction(self.config.theta_setpoint, theta, 0.0);
        let tau_gamma = gains
            .gamma
            .correction(self.config.gamma_setpoint, gamma, 0.0);

        // Saturate the corrections before the allocation.
        let limit = self.config.limit_current;
        let (tau_alpha, tau_beta) = allocate_currents(
            clip(tau_theta, -limit, limit),
            clip(tau_gamma, -limit, limit),
        );

        self.controllers[COUPLED_CONTROL_LEG].set_dual_current(tau_alpha, tau_beta);

        self.telemetry
            .decoupled_state
            .insert(String::from("theta"), theta);
        self.telemetry
            .decoupled_state
            .insert(String::from("gamma"), gamma);
        self.telemetry
            .allocated_currents
            .insert(String::from("alpha"), tau_alpha);
        self.telemetry
            .allocated_currents
            .insert(String::from("beta"), tau_beta);
        self.telemetry.timestamp_command = self._start.elapsed().as_secs_f64();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::path::Path;

    use crate::constants::NUM_ACTUATOR;
    use crate::mock::mock_motor_controller::MockMotorController;

    const EPSILON: f64 = 1e-7;

    fn create_control_loop(strategy: ControlStrategy) -> ControlLoop<MockMotorController> {
        let config = Config::new(Path::new("config/parameters_control.yaml"));

        ControlLoop::new(&config, strategy, vec![MockMotorController::new(); NUM_LEG])
    }

    #[test]
    fn test_new() {
        let control_loop = create_control_loop(ControlStrategy::OpenLoopGait);

        assert_eq!(control_loop.telemetry.strategy, "OpenLoopGait");
        assert_eq!(control_loop.controllers.len(), NUM_LEG);
    }

    #[test]
    #[should_panic]
    fn test_new_panic() {
        let config = Config::new(Path::new("config/parameters_control.yaml"));

        let _: ControlLoop<MockMotorController> = ControlLoop::new(
            &config,
            ControlStrategy::OpenLoopGait,
            vec![MockMotorController::new(); NUM_LEG - 1],
        );
    }

    #[test]
    fn test_cycle_period() {
        assert_eq!(
            create_control_loop(ControlStrategy::OpenLoopGait).cycle_period(),
            Duration::from_millis(5)
        );
        assert_eq!(
            create_control_loop(ControlStrategy::CoupledPid).cycle_period(),
            Duration::from_micros(10000)
        );
    }

    #[test]
    fn test_step_open_loop_gait() {
        let mut control_loop = create_control_loop(ControlStrategy::OpenLoopGait);

        control_loop.step();

        // One position command per actuator per cycle.
        control_loop.controllers.iter().for_each(|controller| {
            assert_eq!(controller.position_commands.len(), 2);
            assert_eq!(controller.position_commands[0].0, 0);
            assert_eq!(controller.position_commands[1].0, 1);
        });

        // The dispatched setpoints are in the telemetry.
        assert_eq!(control_loop.telemetry.setpoints.len(), NUM_ACTUATOR);
        assert_eq!(
            control_loop.controllers[0].position_commands[0].1,
            control_loop.telemetry.setpoints[0]
        );

        assert!(control_loop.telemetry.timestamp_command > 0.0);

        // The recorded timestamp is the time the setpoints were calculated
        // for: evaluating the gait at it reproduces them.
        let gait = Gait::from_config(&control_loop.config);
        assert_eq!(
            gait.setpoints(control_loop.telemetry.timestamp_command)
                .to_vec(),
            control_loop.telemetry.setpoints
        );
    }

    #[test]
    fn test_step_coupled_pid() {
        let config = Config::new(Path::new("config/parameters_control.yaml"));

        let mut controllers = vec![MockMotorController::new(); NUM_LEG];
        controllers[COUPLED_CONTROL_LEG].position_estimates = [10.0, 4.0];

        let mut control_loop = ControlLoop::new(&config, ControlStrategy::CoupledPid, controllers);

        control_loop.step();

        // theta = 7, gamma = -3. With kp = 0.5 and the zero setpoints, the
        // corrections saturate at the current limit of 1.0 and recombine to
        // (-1.0, 0.0).
        let commands = &control_loop.controllers[COUPLED_CONTROL_LEG].dual_current_commands;
        assert_eq!(commands.len(), 1);
        assert_relative_eq!(commands[0].0, -1.0, epsilon = EPSILON);
        assert_relative_eq!(commands[0].1, 0.0, epsilon = EPSILON);

        // The other legs receive no command.
        for leg in 1..NUM_LEG {
            assert!(control_loop.controllers[leg].dual_current_commands.is_empty());
        }

        assert_relative_eq!(
            control_loop.telemetry.decoupled_state["theta"],
            7.0,
            epsilon = EPSILON
        );
        assert_relative_eq!(
            control_loop.telemetry.decoupled_state["gamma"],
            -3.0,
            epsilon = EPSILON
        );
        assert_relative_eq!(
            control_loop.telemetry.allocated_currents["alpha"],
            -1.0,
            epsilon = EPSILON
        );
        assert_relative_eq!(
            control_loop.telemetry.allocated_currents["beta"],
            0.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_step_coupled_pid_at_setpoint() {
        // Zero feedback with the zero setpoints commands zero currents.
        let mut control_loop = create_control_loop(ControlStrategy::CoupledPid);

        control_loop.step();

        assert_eq!(
            control_loop.controllers[COUPLED_CONTROL_LEG].dual_current_commands,
            vec![(0.0, 0.0)]
        );
    }
}
