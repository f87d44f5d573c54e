// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume type for level control.
//!
//! This module provides a type-safe representation of volume levels,
//! ensuring values are always within the valid range of 0-100.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Volume level as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use medior_lib::types::Volume;
///
/// let vol = Volume::new(42).unwrap();
/// assert_eq!(vol.value(), 42);
///
/// // Step helpers saturate at the bounds
/// assert_eq!(Volume::MAX.stepped_up(Volume::DEFAULT_STEP), Volume::MAX);
///
/// // Invalid values return error
/// assert!(Volume::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Volume(u8);

impl Volume {
    /// Minimum volume (muted level).
    pub const MIN: Self = Self(0);

    /// Maximum volume.
    pub const MAX: Self = Self(100);

    /// Default step for `volume_up`/`volume_down` commands.
    pub const DEFAULT_STEP: u8 = 5;

    /// Creates a new volume level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a volume level, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the volume percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the volume raised by `step`, saturating at 100.
    #[must_use]
    pub const fn stepped_up(&self, step: u8) -> Self {
        Self::clamped(self.0.saturating_add(step))
    }

    /// Returns the volume lowered by `step`, saturating at 0.
    #[must_use]
    pub const fn stepped_down(&self, step: u8) -> Self {
        Self(self.0.saturating_sub(step))
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Volume {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        for v in [0, 1, 50, 99, 100] {
            assert_eq!(Volume::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn new_out_of_range() {
        assert!(matches!(
            Volume::new(101),
            Err(ValueError::OutOfRange { actual: 101, .. })
        ));
    }

    #[test]
    fn clamped_caps_at_max() {
        assert_eq!(Volume::clamped(255).value(), 100);
        assert_eq!(Volume::clamped(30).value(), 30);
    }

    #[test]
    fn step_up_saturates() {
        let vol = Volume::new(98).unwrap();
        assert_eq!(vol.stepped_up(Volume::DEFAULT_STEP), Volume::MAX);
        assert_eq!(Volume::new(40).unwrap().stepped_up(5).value(), 45);
    }

    #[test]
    fn step_down_saturates() {
        let vol = Volume::new(3).unwrap();
        assert_eq!(vol.stepped_down(Volume::DEFAULT_STEP), Volume::MIN);
        assert_eq!(Volume::new(40).unwrap().stepped_down(5).value(), 35);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let ok: Volume = serde_json::from_str("42").unwrap();
        assert_eq!(ok.value(), 42);
        assert!(serde_json::from_str::<Volume>("140").is_err());
    }
}
