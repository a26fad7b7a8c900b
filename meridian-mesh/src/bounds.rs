//! Bounding extents and canonical rescaling
//!
//! Imported geometry arrives at arbitrary scale and offset. The importer
//! tracks per-axis extents while vertices stream in, then rescales and
//! re-centers every position into the canonical range the UV projector and
//! the host scene expect.

use glam::Vec3;

use crate::error::MeshError;

/// Per-axis extremes of a vertex set
///
/// Tracking starts from zeroed bounds, so the tracked box always contains
/// the origin even when every vertex lies on one side of it. The raw
/// (pre-rescale) extents are what the physics collaborator consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingExtents {
    /// Smallest coordinate reached per axis
    pub lower: Vec3,
    /// Largest coordinate reached per axis
    pub upper: Vec3,
}

impl BoundingExtents {
    pub(crate) fn zeroed() -> Self {
        Self {
            lower: Vec3::ZERO,
            upper: Vec3::ZERO,
        }
    }

    /// Grow the extents to contain `point`
    pub fn include(&mut self, point: Vec3) {
        self.lower = self.lower.min(point);
        self.upper = self.upper.max(point);
    }

    /// Extents of a point set (zero-seeded, like the streaming tracker)
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut extents = Self::zeroed();
        for p in points {
            extents.include(p);
        }
        extents
    }

    /// Per-axis width of the box
    pub fn span(&self) -> Vec3 {
        self.upper - self.lower
    }

    /// Largest absolute span across the three axes
    pub fn longest_span(&self) -> f32 {
        let span = self.span().abs();
        span.x.max(span.y).max(span.z)
    }
}

/// Scale and mid-point derived from the extents during canonicalization
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalFrame {
    /// Largest axis span of the source geometry
    pub scale: f32,
    /// Source mid-point, expressed in units of `scale`
    pub center: Vec3,
}

/// Rescale and re-center `positions` into the canonical range
///
/// Every position (and the extents themselves) is divided by `0.5 * scale`
/// and then translated by `-2 * center`, where `scale` is the largest axis
/// span and `center = (upper + lower) / (2 * scale)` per axis. The division
/// and translation are applied in exactly that order; downstream UV
/// projection depends on the literal values produced.
pub(crate) fn canonicalize(
    positions: &mut [[f32; 3]],
    extents: &BoundingExtents,
) -> Result<(CanonicalFrame, BoundingExtents), MeshError> {
    let scale = extents.longest_span();
    if scale == 0.0 {
        return Err(MeshError::DegenerateBounds);
    }

    let center = (extents.upper + extents.lower) / (2.0 * scale);
    let half_scale = 0.5 * scale;

    for p in positions.iter_mut() {
        let rescaled = Vec3::from(*p) / half_scale - 2.0 * center;
        *p = rescaled.to_array();
    }

    let canonical = BoundingExtents {
        lower: extents.lower / half_scale - 2.0 * center,
        upper: extents.upper / half_scale - 2.0 * center,
    };

    Ok((CanonicalFrame { scale, center }, canonical))
}
