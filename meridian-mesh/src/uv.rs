//! Spherical UV projection for imported geometry
//!
//! Parametric meshes carry analytic UVs; imported meshes derive theirs from
//! the normalized direction of each canonicalized position.

use std::f32::consts::TAU;

use glam::Vec3;
use tracing::warn;

/// Project canonicalized positions onto longitude/latitude texture space
///
/// Per vertex, with `n = normalize(position)`:
///
/// ```text
/// u = atan(n.y / n.x) / 2π
/// v = (n.z + 1) / 2
/// ```
///
/// The quotient is undefined at `n.x == 0`. Those vertices get the limit
/// value `u = ±0.25` (sign of `n.y`); directions of exactly `±z` (and the
/// origin, which has no direction) get the sentinel `u = 0`. Occurrences are
/// counted and reported through a warning event; no NaN ever reaches the
/// output.
pub fn spherical_uvs(positions: &[[f32; 3]]) -> Vec<[f32; 2]> {
    let mut singular = 0usize;

    let uvs = positions
        .iter()
        .map(|p| {
            let n = Vec3::from(*p).normalize_or_zero();
            let u = if n.x == 0.0 {
                singular += 1;
                if n.y == 0.0 { 0.0 } else { 0.25f32.copysign(n.y) }
            } else {
                (n.y / n.x).atan() / TAU
            };
            let v = (n.z + 1.0) * 0.5;
            [u, v]
        })
        .collect();

    if singular > 0 {
        warn!(
            count = singular,
            "vertices on the atan singularity during spherical projection"
        );
    }

    uvs
}
