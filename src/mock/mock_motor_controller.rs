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

use crate::constants::NUM_JOINT_PER_LEG;
use crate::interface::motor_controller::MotorController;

#[derive(Clone)]
pub struct MockMotorController {
    // Position estimates of the two axes in the device-native unit.
    pub position_estimates: [f64; NUM_JOINT_PER_LEG],
    // Received position commands as (axis, setpoint).
    pub position_commands: Vec<(usize, f64)>,
    // Received dual-current commands as (current_axis_0, current_axis_1).
    pub dual_current_commands: Vec<(f64, f64)>,
}

impl MockMotorController {
    /// Mock motor controller to record the received commands and to feed
    /// back the settable position estimates.
    ///
    /// # Returns
    /// A new mock motor controller.
    pub fn new() -> Self {
        Self {
            position_estimates: [0.0; NUM_JOINT_PER_LEG],
            position_commands: Vec::new(),
            dual_current_commands: Vec::new(),
        }
    }
}

impl MotorController for MockMotorController {
    fn set_position(&mut self, axis: usize, setpoint: f64) {
        self.position_commands.push((axis, setpoint));
    }

    fn set_dual_current(&mut self, current_axis_0: f64, current_axis_1: f64) {
        self.dual_current_commands
            .push((current_axis_0, current_axis_1));
    }

    fn position_estimate(&self, axis: usize) -> f64 {
        self.position_estimates[axis]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_position() {
        let mut mock_motor_controller = MockMotorController::new();

        mock_motor_controller.set_position(0, 100.0);
        mock_motor_controller.set_position(1, -200.0);

        assert_eq!(
            mock_motor_controller.position_commands,
            vec![(0, 100.0), (1, -200.0)]
        );
    }

    #[test]
    fn test_set_dual_current() {
        let mut mock_motor_controller = MockMotorController::new();

        mock_motor_controller.set_dual_current(0.5, -0.5);

        assert_eq!(mock_motor_controller.dual_current_commands, vec![(0.5, -0.5)]);
    }

    #[test]
    fn test_position_estimate() {
        let mut mock_motor_controller = MockMotorController::new();
        mock_motor_controller.position_estimates = [1.2, -3.4];

        assert_eq!(mock_motor_controller.position_estimate(0), 1.2);
        assert_eq!(mock_motor_controller.position_estimate(1), -3.4);
    }
}
