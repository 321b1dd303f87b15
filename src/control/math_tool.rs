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

/// Clip the value to the range.
///
/// # Arguments
/// * `value` - Value to clip.
/// * `lower` - Lower bound.
/// * `upper` - Upper bound.
///
/// # Returns
/// The clipped value.
pub fn clip<T>(value: T, lower: T, upper: T) -> T
where
    T: PartialOrd,
{
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip() {
        assert_eq!(clip(0.5, -1.0, 1.0), 0.5);
        assert_eq!(clip(-1.7, -1.0, 1.0), -1.0);
        assert_eq!(clip(2.3, -1.0, 1.0), 1.0);

        assert_eq!(clip(3, 0, 10), 3);
    }
}
