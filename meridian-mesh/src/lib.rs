//! Meridian-Mesh: canonical render-ready geometry for the Meridian platform
//!
//! This crate turns triangulated surface geometry (procedurally generated
//! or imported from a line-oriented OBJ subset) into a frozen
//! [`MeshBuffer`]: positions, per-vertex normals, UV coordinates, and a
//! triangle/strip index buffer. Rendering (GPU upload, draw calls) and
//! physics (integration, collision) are collaborators consuming the outputs
//! by reference; neither lives here.
//!
//! # Build paths
//!
//! - **Parametric**: [`generate`] tessellates a [`Shape`] onto an
//!   `(S+1) × (S+1)` grid with analytic positions, UVs, and normals, indexed
//!   as one continuous zig-zag triangle strip. [`generate_cube`] produces
//!   the fixed 36-vertex cube used for environment capture.
//! - **Import**: [`import_obj`] parses `v`/`f` records, reconstructs smooth
//!   normals from the triangle data, rescales everything into the canonical
//!   coordinate range, and projects spherical UVs.
//!
//! Both paths are synchronous and atomic: a build either returns a complete
//! immutable mesh or an error, never a partial one, and each build owns its
//! working state end to end.
//!
//! # Usage
//!
//! ```
//! use meridian_mesh::{generate, Shape};
//!
//! let sphere = generate(Shape::Sphere, Shape::Sphere.default_segments());
//! assert_eq!(sphere.vertex_count(), 17 * 17);
//! assert_eq!(sphere.element_count(), 16 * 2 * 17);
//! ```
//!
//! ```no_run
//! use meridian_mesh::import_obj;
//!
//! let imported = import_obj("models/rock.obj")?;
//! println!(
//!     "{} vertices, {} elements",
//!     imported.mesh.vertex_count(),
//!     imported.mesh.element_count()
//! );
//! # Ok::<(), meridian_mesh::MeshError>(())
//! ```

mod bounds;
mod error;
mod mesh;
mod normals;
mod obj;
mod procedural;
mod uv;

pub use bounds::{BoundingExtents, CanonicalFrame};
pub use error::MeshError;
pub use mesh::{MeshBuffer, PrimitiveTopology};
pub use normals::smooth_normals;
pub use obj::{ImportedMesh, import_obj, import_obj_from_reader};
pub use procedural::{
    PLANE_SEGMENTS, SPHERE_SEGMENTS, Shape, generate, generate_cube, generate_plane,
    generate_sphere,
};
pub use uv::spherical_uvs;
