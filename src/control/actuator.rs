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

use crate::constants::{NUM_ACTUATOR, NUM_JOINT_PER_LEG, NUM_LEG};
use crate::interface::motor_controller::MotorController;

/// Reference of one actuator: a motor controller and an axis within it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ActuatorRef {
    // 0-based motor controller.
    pub controller: usize,
    // 0-based axis within the controller.
    pub axis: usize,
}

/// Get the static mapping from the (leg, joint) pairs to the actuators, in
/// the (leg, joint) row-major order. The mapping is bijective and fixed for
/// the process lifetime: leg `i` is wired to controller `i` and joint `j`
/// to axis `j`.
///
/// # Returns
/// Actuator references.
pub fn actuator_references() -> [ActuatorRef; NUM_ACTUATOR] {
    let mut references = [ActuatorRef {
        controller: 0,
        axis: 0,
    }; NUM_ACTUATOR];

    for leg in 0..NUM_LEG {
        for joint in 0..NUM_JOINT_PER_LEG {
            references[leg * NUM_JOINT_PER_LEG + joint] = ActuatorRef {
                controller: leg,
                axis: joint,
            };
        }
    }

    references
}

/// Dispatch the position setpoints with exactly one command per actuator.
///
/// # Notes
/// The commands are fire-and-forget and are not retried. There is no
/// atomicity across the actuators: a failed command is the transport's
/// concern and does not abort the others. The dispatch order within one
/// cycle is not part of the contract.
///
/// # Arguments
/// * `controllers` - The motor controllers, one per leg.
/// * `setpoints` - Setpoints in the (leg, joint) row-major order.
pub fn dispatch_positions<T: MotorController>(
    controllers: &mut [T],
    setpoints: &[f64; NUM_ACTUATOR],
) {
    actuator_references()
        .iter()
        .zip(setpoints.iter())
        .for_each(|(reference, setpoint)| {
            controllers[reference.controller].set_position(reference.axis, *setpoint);
        });
}
