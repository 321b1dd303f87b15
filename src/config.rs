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

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::NUM_LEG;
use crate::utility::{get_parameter, get_parameter_array};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Config {
    // Configuration filename.
    pub filename: String,
    // Gait frequency in Hz.
    pub gait_frequency: f64,
    // Gait amplitude in the device-native position unit.
    pub gait_amplitude: f64,
    // Per-leg gait phase offsets in radian.
    pub gait_phase_offsets: Vec<f64>,
    // Delay after each open-loop cycle in millisecond.
    pub open_loop_period_ms: usize,
    // Closed-loop position control frequency in Hz.
    pub position_control_frequency: f64,
    // Setpoints of the decoupled axes.
    pub theta_setpoint: f64,
    pub gamma_setpoint: f64,
    // Per-leg proportional and derivative gains of the decoupled axes.
    pub kp_theta: Vec<f64>,
    pub kd_theta: Vec<f64>,
    pub kp_gamma: Vec<f64>,
    pub kd_gamma: Vec<f64>,
    // Saturation limit of the decoupled corrections in Ampere.
    pub limit_current: f64,
}

impl Config {
    /// Create a new config object.
    ///
    /// # Arguments
    /// * `filepath_parameters_control` - The path to the control parameters
    /// file.
    ///
    /// # Returns
    /// A new config object.
    pub fn new(filepath_parameters_control: &Path) -> Self {
        // Read the gait phase offsets and check the size.
        let gait_phase_offsets: Vec<f64> =
            get_parameter_array(filepath_parameters_control, "gait_phase_offsets");
        assert!(gait_phase_offsets.len() == NUM_LEG);

        // Read the gains and check the sizes.
        let kp_theta: Vec<f64> = get_parameter_array(filepath_parameters_control, "kp_theta");
        let kd_theta: Vec<f64> = get_parameter_array(filepath_parameters_control, "kd_theta");
        let kp_gamma: Vec<f64> = get_parameter_array(filepath_parameters_control, "kp_gamma");
        let kd_gamma: Vec<f64> = get_parameter_array(filepath_parameters_control, "kd_gamma");

        [&kp_theta, &kd_theta, &kp_gamma, &kd_gamma]
            .iter()
            .for_each(|gains| {
                assert!(gains.len() == NUM_LEG);
            });

        Self {
            filename: String::from(filepath_parameters_control.to_str().expect(&format!(
                "Should be able to convert {:?} to a string",
                filepath_parameters_control
            ))),

            gait_frequency: get_parameter(filepath_parameters_control, "gait_frequency"),
            gait_amplitude: get_parameter(filepath_parameters_control, "gait_amplitude"),
            gait_phase_offsets: gait_phase_offsets,

            open_loop_period_ms: get_parameter(filepath_parameters_control, "open_loop_period_ms"),
            position_control_frequency: get_parameter(
                filepath_parameters_control,
                "position_control_frequency",
            ),

            theta_setpoint: get_parameter(filepath_parameters_control, "theta_setpoint"),
            gamma_setpoint: get_parameter(filepath_parameters_control, "gamma_setpoint"),

            kp_theta: kp_theta,
            kd_theta: kd_theta,
            kp_gamma: kp_gamma,
            kd_gamma: kd_gamma,

            limit_current: get_parameter(filepath_parameters_control, "limit_current"),
        }
    }
}
