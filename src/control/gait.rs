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

use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::Config;
use crate::constants::{NUM_ACTUATOR, NUM_JOINT_PER_LEG, NUM_LEG};

pub struct Gait {
    // Gait frequency in Hz.
    pub frequency: f64,
    // Amplitude in the device-native position unit.
    pub amplitude: f64,
    // Per-leg phase offsets in radian.
    pub phase_offsets: Vec<f64>,
}

impl Gait {
    /// Open-loop gait generator. The setpoints are pure functions of the
    /// elapsed time and are recomputed from scratch on every cycle.
    ///
    /// # Arguments
    /// * `frequency` - Gait frequency in Hz.
    /// * `amplitude` - Amplitude in the device-native position unit.
    /// * `phase_offsets` - Per-leg phase offsets in radian.
    ///
    /// # Returns
    /// A new gait generator.
    ///
    /// # Panics
    /// If the phase offsets do not cover all the legs.
    pub fn new(frequency: f64, amplitude: f64, phase_offsets: &[f64]) -> Self {
        assert!(phase_offsets.len() == NUM_LEG);

        Self {
            frequency: frequency,
            amplitude: amplitude,
            phase_offsets: phase_offsets.to_vec(),
        }
    }

    /// Create the gait generator from the configuration.
    ///
    /// # Arguments
    /// * `config` - The configuration.
    ///
    /// # Returns
    /// A new gait generator.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.gait_frequency,
            config.gait_amplitude,
            &config.gait_phase_offsets,
        )
    }

    /// Calculate the setpoint of one actuator.
    ///
    /// # Notes
    /// Joint 1 of each leg leads joint 0 by a quarter cycle, which traces an
    /// elliptical leg trajectory when the two joints actuate orthogonal
    /// axes.
    ///
    /// # Arguments
    /// * `time` - Elapsed monotonic time in second. The epoch is arbitrary.
    /// * `leg` - 0-based leg.
    /// * `joint` - 0-based joint within the leg.
    ///
    /// # Returns
    /// Setpoint in the device-native position unit.
    pub fn setpoint(&self, time: f64, leg: usize, joint: usize) -> f64 {
        let phase =
            2.0 * PI * self.frequency * time + self.phase_offsets[leg] + (joint as f64) * FRAC_PI_2;

        self.amplitude * phase.sin()
    }

    /// Calculate the setpoints of all the actuators.
    ///
    /// # Arguments
    /// * `time` - Elapsed monotonic time in second. The epoch is arbitrary.
    ///
    /// # Returns
    /// Setpoints in the (leg, joint) row-major order.
    pub fn setpoints(&self, time: f64) -> [f64; NUM_ACTUATOR] {
        let mut setpoints = [0.0; NUM_ACTUATOR];
        for leg in 0..NUM_LEG {
            for joint in 0..NUM_JOINT_PER_LEG {
                setpoints[leg * NUM_JOINT_PER_LEG + joint] = self.setpoint(time, leg, joint);
            }
        }

        setpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-7;

    fn create_gait() -> Gait {
        Gait::new(1.0, 800.0, &[0.0, FRAC_PI_2, FRAC_PI_2, PI])
    }

    #[test]
    fn test_setpoint() {
        let gait = create_gait();

        // At the time origin
        assert_relative_eq!(gait.setpoint(0.0, 0, 0), 0.0, epsilon = EPSILON);
        assert_relative_eq!(gait.setpoint(0.0, 0, 1), 800.0, epsilon = EPSILON);

        // A quarter cycle later
        assert_relative_eq!(gait.setpoint(0.25, 0, 0), 800.0, epsilon = EPSILON);
        assert_relative_eq!(gait.setpoint(0.25, 0, 1), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_setpoint_joint_phase_lead() {
        let gait = create_gait();

        // Joint 1 leads joint 0 by a quarter cycle: the joint 0 setpoint
        // reaches the joint 1 setpoint a quarter period later.
        let quarter_period = 0.25 / gait.frequency;
        for leg in 0..NUM_LEG {
            for step in 0..20 {
                let time = 0.05 * (step as f64);
                assert_relative_eq!(
                    gait.setpoint(time + quarter_period, leg, 0),
                    gait.setpoint(time, leg, 1),
                    epsilon = EPSILON
                );
            }
        }
    }

    #[test]
    fn test_setpoint_periodicity() {
        let gait = create_gait();

        let period = 1.0 / gait.frequency;
        for leg in 0..NUM_LEG {
            for joint in 0..NUM_JOINT_PER_LEG {
                assert_relative_eq!(
                    gait.setpoint(0.1, leg, joint),
                    gait.setpoint(0.1 + period, leg, joint),
                    epsilon = EPSILON
                );
            }
        }
    }

    #[test]
    fn test_setpoints() {
        let gait = create_gait();

        let setpoints = gait.setpoints(0.0);

        // Legs 1 and 2 share the phase offset.
        assert_relative_eq!(setpoints[0], 0.0, epsilon = EPSILON);
        assert_relative_eq!(setpoints[1], 800.0, epsilon = EPSILON);
        assert_relative_eq!(setpoints[2], 800.0, epsilon = EPSILON);
        assert_relative_eq!(setpoints[3], 0.0, epsilon = EPSILON);
        assert_relative_eq!(setpoints[4], 800.0, epsilon = EPSILON);
        assert_relative_eq!(setpoints[5], 0.0, epsilon = EPSILON);
        assert_relative_eq!(setpoints[6], 0.0, epsilon = EPSILON);
        assert_relative_eq!(setpoints[7], -800.0, epsilon = EPSILON);
    }

    #[test]
    #[should_panic]
    fn test_new_panic() {
        let _ = Gait::new(1.0, 800.0, &[0.0, FRAC_PI_2]);
    }
}
