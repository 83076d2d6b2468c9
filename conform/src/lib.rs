//! **Conform** eliminates hanging vertices from triangle meshes.
//!
//! A hanging vertex lies on an edge of a coarser triangle without being one of
//! its corners, as happens where a refined region of a mesh meets an
//! unrefined one. Conform represents such meshes as a [`MeshGraph`] of
//! vertices, edges, and triangular interiors and rewrites the graph with
//! [`Rule`]s until every hanging vertex has become a true corner of the
//! triangles around it.
//!
//! Please note that versions in the `0.0.*` series are experimental and
//! unstable!
//!
//! [`MeshGraph`]: crate::graph::MeshGraph
//! [`Rule`]: crate::transform::Rule
#![allow(unknown_lints)] // Allow clippy lints.

pub mod geometry;
pub mod graph;
pub mod refine;
pub mod transact;
pub mod transform;

pub mod prelude {
    //! Re-exports commonly used types and traits.
    //!
    //! Importing the contents of this module is recommended when building and
    //! rewriting graphs, as those operations are expressed mostly through
    //! traits.

    pub use crate::transact::{Mutate as _, Transact as _};
    pub use crate::transform::Transformation as _;
}
