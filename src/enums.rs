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

use strum_macros::{AsRefStr, FromRepr};

/// Control strategy of the position-control loop. The strategy is selected
/// at the construction of the control loop and is not switchable at
/// runtime.
#[derive(FromRepr, Debug, PartialEq, Clone, Copy, AsRefStr)]
#[repr(u8)]
pub enum ControlStrategy {
    OpenLoopGait = 1,
    CoupledPid = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_strategy() {
        assert_eq!(
            ControlStrategy::from_repr(1),
            Some(ControlStrategy::OpenLoopGait)
        );
        assert_eq!(
            ControlStrategy::from_repr(2),
            Some(ControlStrategy::CoupledPid)
        );
        assert_eq!(ControlStrategy::from_repr(3), None);

        assert_eq!(ControlStrategy::OpenLoopGait.as_ref(), "OpenLoopGait");
    }
}
