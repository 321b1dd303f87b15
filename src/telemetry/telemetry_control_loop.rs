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
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::constants::NUM_ACTUATOR;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TelemetryControlLoop {
    // Control strategy name.
    pub strategy: String,
    // Position setpoints of the actuators in the (leg, joint) row-major
    // order. Updated by the open-loop cycles.
    pub setpoints: Vec<f64>,
    // Decoupled state (theta, gamma) of the coupled leg. Updated by the
    // closed-loop cycles.
    pub decoupled_state: HashMap<String, f64>,
    // Allocated currents (alpha, beta) of the coupled leg in Ampere.
    // Updated by the closed-loop cycles.
    pub allocated_currents: HashMap<String, f64>,
    // Time of the latest command dispatch in second since the loop start.
    pub timestamp_command: f64,
    // Cycle time in second.
    pub cycle_time: f64,
}

impl TelemetryControlLoop {
    /// Create a new control-loop telemetry object.
    ///
    /// # Returns
    /// A new control-loop telemetry object.
    pub fn new() -> Self {
        Self {
            strategy: String::new(),
            setpoints: vec![0.0; NUM_ACTUATOR],
            decoupled_state: Self::initialize_dict_value(&["theta", "gamma"], 0.0),
            allocated_currents: Self::initialize_dict_value(&["alpha", "beta"], 0.0),
            timestamp_command: 0.0,
            cycle_time: 0.0,
        }
    }

    /// Initialize the dictionary of the values.
    ///
    /// # Arguments
    /// * `keys` - Keys of the dictionary.
    /// * `value` - Initial value.
    ///
    /// # Returns
    /// The dictionary.
    fn initialize_dict_value(keys: &[&str], value: f64) -> HashMap<String, f64> {
        keys.iter()
            .map(|key| (String::from(*key), value))
            .collect()
    }

    /// Get the telemetry messages.
    ///
    /// # Arguments
    /// * `digit` - The number of digits after the decimal point.
    ///
    /// # Returns
    /// The telemetry messages.
    pub fn get_messages(&self, digit: i32) -> Vec<Value> {
        vec![
            self.get_message_position_setpoints(digit),
            self.get_message_coupled_axes(digit),
            self.get_message_cycle_time(digit),
        ]
    }

    /// Get the message of the position setpoints.
    ///
    /// # Arguments
    /// * `digit` - The number of digits after the decimal point.
    ///
    /// # Returns
    /// The message of the position setpoints.
    fn get_message_position_setpoints(&self, digit: i32) -> Value {
        json!({
            "id": "positionSetpoints",
            "strategy": self.strategy,
            "setpoints": self.setpoints
                .iter()
                .map(|setpoint| self.round(*setpoint, digit))
                .collect::<Vec<f64>>(),
        })
    }

    /// Get the message of the coupled axes.
    ///
    /// # Arguments
    /// * `digit` - The number of digits after the decimal point.
    ///
    /// # Returns
    /// The message of the coupled axes.
    fn get_message_coupled_axes(&self, digit: i32) -> Value {
        json!({
            "id": "coupledAxes",
            "theta": self.round(self.decoupled_state["theta"], digit),
            "gamma": self.round(self.decoupled_state["gamma"], digit),
            "currentAlpha": self.round(self.allocated_currents["alpha"], digit),
            "currentBeta": self.round(self.allocated_currents["beta"], digit),
        })
    }

    /// Get the message of the cycle time.
    ///
    /// # Arguments
    /// * `digit` - The number of digits after the decimal point.
    ///
    /// # Returns
    /// The message of the cycle time.
    fn get_message_cycle_time(&self, digit: i32) -> Value {
        json!({
            "id": "cycleTime",
            "cycleTime": self.round(self.cycle_time, digit),
            "timestampCommand": self.round(self.timestamp_command, digit),
        })
    }

    /// Round the value.
    ///
    /// # Arguments
    /// * `value` - Value to round.
    /// * `digit` - The number of digits after the decimal point.
    ///
    /// # Returns
    /// The rounded value.
    fn round(&self, value: f64, digit: i32) -> f64 {
        let scale = 10.0_f64.powi(digit);
        (value * scale).round() / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let telemetry = TelemetryControlLoop::new();

        assert_eq!(telemetry.setpoints.len(), NUM_ACTUATOR);
        assert_eq!(telemetry.decoupled_state["theta"], 0.0);
        assert_eq!(telemetry.decoupled_state["gamma"], 0.0);
        assert_eq!(telemetry.allocated_currents["alpha"], 0.0);
        assert_eq!(telemetry.allocated_currents["beta"], 0.0);
    }

    #[test]
    fn test_get_messages() {
        let mut telemetry = TelemetryControlLoop::new();
        telemetry.strategy = String::from("OpenLoopGait");
        telemetry.decoupled_state.insert(String::from("theta"), 0.123456);
        telemetry.cycle_time = 0.00501;

        let messages = telemetry.get_messages(4);

        assert_eq!(messages.len(), 3);

        assert_eq!(messages[0]["id"], "positionSetpoints");
        assert_eq!(messages[0]["strategy"], "OpenLoopGait");

        assert_eq!(messages[1]["id"], "coupledAxes");
        assert_eq!(messages[1]["theta"], 0.1235);

        assert_eq!(messages[2]["id"], "cycleTime");
        assert_eq!(messages[2]["cycleTime"], 0.005);
    }
}
