use crate::bounds::BoundingBox;
use crate::error::ConfigError;
use crate::point::DEFAULT_EPSILON;

/// Numeric configuration of a [`crate::VoronoiDiagram`].
///
/// The visible boundary is the square `(0, 0)..(size, size)`. The sentinel generators are
/// placed `super_factor` boundary extents away from it, insertion bisectors are clipped to the
/// boundary grown by `bisector_factor` of those offsets, and the seed bisectors to the boundary
/// grown by `init_factor` of them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagramConfig {
    /// Upper extent of the visible boundary along both axes.
    pub size: f64,
    /// Tolerance for point equality, containment and intersection tests.
    pub epsilon: f64,
    /// Distance of the sentinel generators, in multiples of the boundary extent.
    pub super_factor: f64,
    /// Growth of the insertion clipping rectangle, in multiples of the sentinel offset.
    pub bisector_factor: f64,
    /// Growth of the seed construction rectangle, in multiples of the sentinel offset.
    pub init_factor: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            size: 600.0,
            epsilon: DEFAULT_EPSILON,
            super_factor: 4.0,
            bisector_factor: 3.0,
            init_factor: 4.0,
        }
    }
}

impl DiagramConfig {
    pub fn new(size: f64) -> Self {
        Self { size, ..Self::default() }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_super_factor(mut self, factor: f64) -> Self {
        self.super_factor = factor;
        self
    }

    pub fn with_bisector_factor(mut self, factor: f64) -> Self {
        self.bisector_factor = factor;
        self
    }

    pub fn with_init_factor(mut self, factor: f64) -> Self {
        self.init_factor = factor;
        self
    }

    pub fn boundary(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.size, self.size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        for (name, value) in [
            ("super_factor", self.super_factor),
            ("bisector_factor", self.bisector_factor),
            ("init_factor", self.init_factor),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidFactor { name, value });
            }
        }
        if self.bisector_factor >= self.init_factor {
            return Err(ConfigError::FactorOrder {
                bisector: self.bisector_factor,
                init: self.init_factor,
            });
        }
        Ok(())
    }
}
