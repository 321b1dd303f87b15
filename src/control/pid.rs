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

use crate::config::Config;
use crate::constants::NUM_LEG;

/// Proportional and derivative gains of one decoupled axis. There is no
/// integral term.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Pd {
    pub kp: f64,
    pub kd: f64,
}

impl Pd {
    /// Proportional-derivative controller of one decoupled axis.
    ///
    /// # Arguments
    /// * `kp` - Proportional gain.
    /// * `kd` - Derivative gain.
    ///
    /// # Returns
    /// A new controller.
    pub fn new(kp: f64, kd: f64) -> Self {
        Self { kp: kp, kd: kd }
    }

    /// Calculate the correction. No state is retained between the
    /// invocations.
    ///
    /// # Notes
    /// The setpoint is assumed to be stationary, so the derivative term
    /// acts on the measured velocity alone.
    ///
    /// # Arguments
    /// * `setpoint` - Setpoint of the axis.
    /// * `current` - Current value of the axis.
    /// * `velocity` - Velocity estimate of the axis. The motor controllers
    /// do not report one yet and the control loop passes 0.0, which keeps
    /// the derivative path inactive.
    ///
    /// # Returns
    /// Correction.
    pub fn correction(&self, setpoint: f64, current: f64, velocity: f64) -> f64 {
        self.kp * (setpoint - current) - self.kd * velocity
    }
}

/// Per-leg gains of the two decoupled axes. Owned by the configuration and
/// read-only to the control loop.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LegGains {
    pub theta: Pd,
    pub gamma: Pd,
}

impl LegGains {
    /// Create the gains of all the legs from the configuration.
    ///
    /// # Arguments
    /// * `config` - The configuration.
    ///
    /// # Returns
    /// Gains of all the legs.
    pub fn from_config(config: &Config) -> Vec<Self> {
        (0..NUM_LEG)
            .map(|leg| Self {
                theta: Pd::new(config.kp_theta[leg], config.kd_theta[leg]),
                gamma: Pd::new(config.kp_gamma[leg], config.kd_gamma[leg]),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::path::Path;

    const EPSILON: f64 = 1e-7;

    #[test]
    fn test_correction() {
        let pd = Pd::new(0.5, 0.1);

        // Proportional term only
        assert_relative_eq!(pd.correction(10.0, 4.0, 0.0), 3.0, epsilon = EPSILON);

        // Derivative term opposes the motion
        assert_relative_eq!(pd.correction(10.0, 4.0, 2.0), 2.8, epsilon = EPSILON);
    }

    #[test]
    fn test_correction_zero_error() {
        // Zero correction at the setpoint for any gains.
        for (kp, kd) in [(0.0, 0.0), (0.5, 0.1), (123.4, -5.6)] {
            let pd = Pd::new(kp, kd);

            assert_eq!(pd.correction(7.5, 7.5, 0.0), 0.0);
        }
    }

    #[test]
    fn test_from_config() {
        let config = Config::new(Path::new("config/parameters_control.yaml"));

        let gains = LegGains::from_config(&config);

        assert_eq!(gains.len(), NUM_LEG);
        assert_eq!(gains[0].theta, Pd::new(0.5, 0.1));
        assert_eq!(gains[0].gamma, Pd::new(0.5, 0.1));
    }
}
