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

use approx::assert_relative_eq;
use config::Config;
use std::path::Path;

/// Trait to parse the configuration value.
pub trait ConfigValue {
    /// Parse the configuration value from a string.
    ///
    /// # Parameters
    /// * `s` - String to parse.
    ///
    /// # Returns
    /// The parsed configuration value.
    fn parse_value(s: &str) -> Self;
}

/// Implement the trait ConfigValue for String.
impl ConfigValue for String {
    fn parse_value(s: &str) -> Self {
        s.to_string()
    }
}

/// Implement the trait ConfigValue for f64.
impl ConfigValue for f64 {
    fn parse_value(s: &str) -> Self {
        s.parse::<f64>().expect(&format!("{s} should parse as f64"))
    }
}

/// Implement the trait ConfigValue for usize.
impl ConfigValue for usize {
    fn parse_value(s: &str) -> Self {
        s.parse::<usize>()
            .expect(&format!("{s} should parse as usize"))
    }
}

/// Get the configuation from the file.
///
/// # Parameters
/// * `filepath` - Path to the config file.
///
/// # Returns
/// The configuration.
pub fn get_config(filepath: &Path) -> Config {
    let name = filepath
        .to_str()
        .expect(&format!("Should have the file name in the {:?}", filepath));

    Config::builder()
        .add_source(config::File::with_name(name))
        .build()
        .expect(&format!("Should be able to read the {name}"))
}

/// Get the parameter from the file.
///
/// # Parameters
/// * `filepath` - Path to the config file.
/// * `key` - Key to find the parameter in the config file.
///
/// # Returns
/// The parameter.
pub fn get_parameter<T: ConfigValue>(filepath: &Path, key: &str) -> T {
    let config = get_config(filepath);

    config
        .get_string(key)
        .map(|v| T::parse_value(&v))
        .expect(&format!("Should find the {key} in the {:?}", filepath))
}

/// Get the array parameter from the file.
///
/// # Parameters
/// * `filepath` - Path to the config file.
/// * `key` - Key to find the parameter in the config file.
///
/// # Returns
/// The array parameter.
pub fn get_parameter_array<T: ConfigValue>(filepath: &Path, key: &str) -> Vec<T> {
    let config = get_config(filepath);
    let config_array = config
        .get_array(key)
        .expect(&format!("Should find the {key} in the {:?}", filepath));

    config_array
        .iter()
        .map(|x| T::parse_value(&x.clone().into_string().expect("Should be a string")))
        .collect()
}

/// Assert the two vectors are relatively equal.
///
/// # Parameters
/// * `v1` - Vector 1.
/// * `v2` - Vector 2.
/// * `epsilon` - Epsilon to compare the values.
///
/// # Panics
/// If the two vectors are not relatively equal.
pub fn assert_relative_eq_vector(v1: &[f64], v2: &[f64], epsilon: f64) {
    assert_eq!(v1.len(), v2.len());

    v1.iter().zip(v2.iter()).for_each(|(value1, value2)| {
        assert_relative_eq!(value1, value2, epsilon = epsilon);
    });
}
