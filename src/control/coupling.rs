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

use nalgebra::{Matrix2, Vector2};

/// Map the raw joint angles to the decoupled coordinates: theta is the mean
/// position of the two joints and gamma is the half difference. Each
/// decoupled axis isolates an independent mode of motion of the leg.
///
/// # Arguments
/// * `alpha` - Angle of joint 0.
/// * `beta` - Angle of joint 1.
///
/// # Returns
/// * `theta` - Mean position.
/// * `gamma` - Half difference.
pub fn decouple(alpha: f64, beta: f64) -> (f64, f64) {
    let decoupled = Matrix2::new(0.5, 0.5, -0.5, 0.5) * Vector2::new(alpha, beta);

    (decoupled[0], decoupled[1])
}

/// Map the decoupled coordinates back to the raw joint angles. This is the
/// exact inverse of [decouple].
///
/// # Arguments
/// * `theta` - Mean position.
/// * `gamma` - Half difference.
///
/// # Returns
/// * `alpha` - Angle of joint 0.
/// * `beta` - Angle of joint 1.
pub fn recouple(theta: f64, gamma: f64) -> (f64, f64) {
    let raw = Matrix2::new(1.0, -1.0, 1.0, 1.0) * Vector2::new(theta, gamma);

    (raw[0], raw[1])
}

/// Allocate the decoupled corrections to the two joint actuators. This is a
/// current allocation, not a position reconstruction: each joint receives
/// half of each decoupled correction, so that the two independently
/// controlled axes recombine into the per-joint commands.
///
/// # Arguments
/// * `tau_theta` - Correction of the theta axis in Ampere.
/// * `tau_gamma` - Correction of the gamma axis in Ampere.
///
/// # Returns
/// * `tau_alpha` - Current command of joint 0 in Ampere.
/// * `tau_beta` - Current command of joint 1 in Ampere.
pub fn allocate_currents(tau_theta: f64, tau_gamma: f64) -> (f64, f64) {
    let currents = Matrix2::new(0.5, -0.5, 0.5, 0.5) * Vector2::new(tau_theta, tau_gamma);

    (currents[0], currents[1])
}
