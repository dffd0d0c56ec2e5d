//! Transform roles, generation parameters and cumulative-threshold selection

use crate::io::configuration::{DEFAULT_FIRST, DEFAULT_FOURTH, DEFAULT_SECOND, DEFAULT_THIRD};
use crate::io::error::{FernError, Result, invalid_parameter};
use crate::math::AffineMap;
use std::fmt;
use std::str::FromStr;

/// Fixed compositional role of each of the four transforms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Selected when `u < first.threshold`
    First,
    /// Selected when `first.threshold <= u < second.threshold`
    Second,
    /// Selected when `second.threshold <= u < third.threshold`
    Third,
    /// Everything else; applied to the negated current point
    Fourth,
}

impl Role {
    /// All roles in selection order
    pub const ALL: [Self; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    /// Lowercase role name as used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = FernError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| invalid_parameter("role", &s, &"expected first, second, third or fourth"))
    }
}

/// An affine map together with its cumulative selection threshold
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformSpec {
    /// The map applied when this transform is selected
    pub map: AffineMap,
    /// Upper bound (exclusive) of this transform's range in `[0, 1)`
    pub threshold: f64,
}

impl TransformSpec {
    /// Create a transform from a map and threshold
    pub const fn new(map: AffineMap, threshold: f64) -> Self {
        Self { map, threshold }
    }
}

impl FromStr for TransformSpec {
    type Err = FernError;

    /// Parse `m00,m01,m10,m11,bx,by,t` (row-major matrix, offset, threshold)
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| invalid_parameter("transform", &s, &e))?;

        match values.as_slice() {
            &[m00, m01, m10, m11, bx, by, threshold] => Ok(Self::new(
                AffineMap::new([[m00, m01], [m10, m11]], (bx, by).into()),
                threshold,
            )),
            _ => Err(invalid_parameter(
                "transform",
                &s,
                &format!("expected 7 comma-separated numbers, got {}", values.len()),
            )),
        }
    }
}

/// The four transforms driving one generation run
///
/// Thresholds are expected to be non-decreasing across the first three
/// transforms. This is a caller contract: misordered or out-of-range
/// thresholds are accepted and simply shift the relative frequencies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Lowest threshold range
    pub first: TransformSpec,
    /// Second threshold range
    pub second: TransformSpec,
    /// Third threshold range
    pub third: TransformSpec,
    /// Implicit final range; its threshold is ignored
    pub fourth: TransformSpec,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST,
            second: DEFAULT_SECOND,
            third: DEFAULT_THIRD,
            fourth: DEFAULT_FOURTH,
        }
    }
}

impl GenerationConfig {
    /// Transform for a role
    pub const fn spec(&self, role: Role) -> &TransformSpec {
        match role {
            Role::First => &self.first,
            Role::Second => &self.second,
            Role::Third => &self.third,
            Role::Fourth => &self.fourth,
        }
    }

    /// Mutable transform for a role
    pub const fn spec_mut(&mut self, role: Role) -> &mut TransformSpec {
        match role {
            Role::First => &mut self.first,
            Role::Second => &mut self.second,
            Role::Third => &mut self.third,
            Role::Fourth => &mut self.fourth,
        }
    }

    /// Check that every transform is usable for generation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A matrix entry or offset component is NaN or infinite
    /// - The first, second or third threshold is NaN; the fourth is never consulted
    pub fn validate(&self) -> Result<()> {
        for role in Role::ALL {
            let spec = self.spec(role);
            if !spec.map.is_finite() {
                return Err(invalid_parameter(
                    format!("{role}.map"),
                    &format!("{:?}", spec.map),
                    &"matrix and offset entries must be finite",
                ));
            }
            if role != Role::Fourth && spec.threshold.is_nan() {
                return Err(invalid_parameter(
                    format!("{role}.threshold"),
                    &spec.threshold,
                    &"threshold must be a number",
                ));
            }
        }
        Ok(())
    }
}

/// Pick the transform whose cumulative range contains `u`
///
/// Comparisons are strict, so a draw equal to a threshold falls into the next range.
pub fn select_role(u: f64, config: &GenerationConfig) -> Role {
    if u < config.first.threshold {
        Role::First
    } else if u < config.second.threshold {
        Role::Second
    } else if u < config.third.threshold {
        Role::Third
    } else {
        Role::Fourth
    }
}
