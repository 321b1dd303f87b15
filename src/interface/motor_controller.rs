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

/// Command surface of one physical motor controller with two axes.
///
/// The commands are fire-and-forget: the transport owns the delivery and the
/// failure surfacing, and no return value is consumed here. The control loop
/// is the single writer of a controller; the surrounding system needs to
/// enforce that no other task commands the same controller concurrently.
pub trait MotorController: Send {
    /// Command the position setpoint of one axis.
    ///
    /// # Arguments
    /// * `axis` - 0-based axis.
    /// * `setpoint` - Position setpoint in the device-native unit.
    fn set_position(&mut self, axis: usize, setpoint: f64);

    /// Command the currents of the two axes at once.
    ///
    /// # Arguments
    /// * `current_axis_0` - Current of the axis 0 in Ampere.
    /// * `current_axis_1` - Current of the axis 1 in Ampere.
    fn set_dual_current(&mut self, current_axis_0: f64, current_axis_1: f64);

    /// Get the absolute position estimate of one axis.
    ///
    /// # Notes
    /// The controllers do not report a velocity estimate yet.
    ///
    /// # Arguments
    /// * `axis` - 0-based axis.
    ///
    /// # Returns
    /// Position estimate in the device-native unit.
    fn position_estimate(&self, axis: usize) -> f64;
}

/// Pass the calls through the box so that the generic control code accepts
/// both the concrete controllers and the boxed trait objects.
impl MotorController for Box<dyn MotorController> {
    fn set_position(&mut self, axis: usize, setpoint: f64) {
        (**self).set_position(axis, setpoint);
    }

    fn set_dual_current(&mut self, current_axis_0: f64, current_axis_1: f64) {
        (**self).set_dual_current(current_axis_0, current_axis_1);
    }

    fn position_estimate(&self, axis: usize) -> f64 {
        (**self).position_estimate(axis)
    }
}
