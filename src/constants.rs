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

// Legs and actuators. Each leg has a proximal and a distal actuator on the
// two axes of one motor controller.
pub const NUM_LEG: usize = 4;
pub const NUM_JOINT_PER_LEG: usize = 2;
pub const NUM_ACTUATOR: usize = NUM_LEG * NUM_JOINT_PER_LEG;

// The leg under the coupled closed-loop control. Only a single leg is
// supported at the moment.
pub const COUPLED_CONTROL_LEG: usize = 0;

// Digits after the decimal point in the telemetry messages.
pub const NUM_DIGIT_TELEMETRY: i32 = 4;

pub const BOUND_SYNC_CHANNEL: usize = 100;
