//! Splitting a triangle at a hanging vertex on one of its edges.
//!
//! Given an interior with corners $A$, $B$, and $C$ and a hanging vertex $H$
//! at the exact midpoint of $A$ and $B$, the interior is replaced by the two
//! interiors $(A, H, C)$ and $(H, B, C)$ and $H$ becomes a simple vertex. The
//! path $A-H-B$ is rebuilt from new edges that inherit the boundary flags of
//! the edges they replace and a new internal edge $H-C$ is inserted.
//!
//! ```text
//!          C                      C
//!         / \                    /|\
//!        /   \                  / | \
//!       /     \       =>       /  |  \
//!      /       \              /   |   \
//!     A----H----B            A----H----B
//! ```
//!
//! New entities are keyed by concatenating the keys of the vertices that
//! define them: edges `AH`, `HB`, and `HC` and interiors `AHC` and `HBC`.

use tracing::debug;

use crate::geometry::Point3;
use crate::graph::{GraphError, Interior, InteriorKey, MeshGraph, Mutation, Vertex, VertexKey};
use crate::transact::{Mutate, Transact};
use crate::transform::Transformation;

/// Splits a triangle in two at a hanging vertex on one of its edges.
///
/// The transformation applies to an interior if:
///
/// 1. A hanging vertex lies at the exact midpoint of two of its corners and is
///    joined to both by edges.
/// 2. Every corner of the interior is a simple vertex.
/// 3. The two halves of the split edge are together at least as long as each
///    of the other two edges of the interior, which must both exist.
///
/// Edges of the interior are searched for a hanging vertex in a fixed order.
/// For corners given as $(v_0, v_1, v_2)$, the edges $v_0 v_1$, $v_0 v_2$, and
/// $v_1 v_2$ are tested in that order and the first match determines the
/// split, with the corners reordered as $(v_0, v_1, v_2)$, $(v_2, v_0, v_1)$,
/// or $(v_1, v_2, v_0)$ respectively. This is only observable when a triangle
/// has hanging vertices at the midpoints of more than one edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct SplitHangingEdge;

impl Transformation for SplitHangingEdge {
    fn is_applicable(&self, graph: &MeshGraph, interior: &str) -> bool {
        let Some(triangle) = graph
            .interior(interior)
            .and_then(|interior| Triangle::from_interior(graph, interior))
        else {
            return false;
        };
        triangle.corners().iter().all(|vertex| !vertex.is_hanging())
            && triangle.is_admissible(graph)
    }

    fn apply<'g>(
        &self,
        graph: &'g mut MeshGraph,
        interior: &str,
    ) -> Result<&'g mut MeshGraph, GraphError> {
        let cache = SplitCache::from_graph(graph, interior)?;
        Mutation::replace(graph, MeshGraph::default())
            .commit_with(|mutation| split(mutation.as_mut(), &cache))
            .map(|(graph, _)| {
                debug!(
                    "split interior {} at hanging vertex {} between {} and {}",
                    cache.interior, cache.hanging, cache.a, cache.b
                );
                graph
            })
    }
}

/// Corners of an interior ordered such that a hanging vertex lies at the
/// midpoint of the first two.
struct Triangle<'a> {
    a: &'a Vertex,
    b: &'a Vertex,
    c: &'a Vertex,
    hanging: &'a Vertex,
}

impl<'a> Triangle<'a> {
    fn from_interior(graph: &'a MeshGraph, interior: &Interior) -> Option<Self> {
        let [v0, v1, v2] = interior.corners();
        let (v0, v1, v2) = (
            graph.vertex(v0.as_str())?,
            graph.vertex(v1.as_str())?,
            graph.vertex(v2.as_str())?,
        );
        [(v0, v1, v2), (v2, v0, v1), (v1, v2, v0)]
            .into_iter()
            .find_map(|(a, b, c)| {
                hanging_midpoint(graph, a, b).map(|hanging| Triangle { a, b, c, hanging })
            })
    }

    fn corners(&self) -> [&'a Vertex; 3] {
        [self.a, self.b, self.c]
    }

    // The halves of the split edge must not be shorter than the other edges, or
    // the transition elements degenerate into slivers.
    fn is_admissible(&self, graph: &MeshGraph) -> bool {
        let length = |a: &Vertex, b: &Vertex| {
            graph
                .edge_between(a.key().as_str(), b.key().as_str())
                .map(|edge| edge.length())
        };
        let (Some(ah), Some(hb), Some(bc), Some(ca)) = (
            length(self.a, self.hanging),
            length(self.hanging, self.b),
            length(self.b, self.c),
            length(self.c, self.a),
        )
        else {
            return false;
        };
        let split = ah + hb;
        split >= bc && split >= ca
    }
}

// Keys and flags needed to rewrite an interior, resolved before the graph is
// mutated.
struct SplitCache {
    interior: InteriorKey,
    a: VertexKey,
    b: VertexKey,
    c: VertexKey,
    hanging: VertexKey,
    boundary: (bool, bool),
}

impl SplitCache {
    fn from_graph(graph: &MeshGraph, interior: &str) -> Result<Self, GraphError> {
        let interior = graph
            .interior(interior)
            .ok_or_else(|| GraphError::InteriorNotFound(interior.into()))?;
        let Triangle { a, b, c, hanging } =
            Triangle::from_interior(graph, interior).ok_or_else(|| {
                GraphError::HangingVertexNotFound {
                    interior: interior.key().clone(),
                }
            })?;
        let boundary = |a: &Vertex, b: &Vertex| {
            graph
                .edge_between(a.key().as_str(), b.key().as_str())
                .map(|edge| edge.is_boundary())
                .ok_or_else(|| GraphError::EdgeBetweenNotFound {
                    a: a.key().clone(),
                    b: b.key().clone(),
                })
        };
        Ok(SplitCache {
            interior: interior.key().clone(),
            a: a.key().clone(),
            b: b.key().clone(),
            c: c.key().clone(),
            hanging: hanging.key().clone(),
            boundary: (boundary(a, hanging)?, boundary(hanging, b)?),
        })
    }
}

fn split(mutation: &mut Mutation, cache: &SplitCache) -> Result<(), GraphError> {
    let SplitCache {
        ref interior,
        ref a,
        ref b,
        ref c,
        ref hanging,
        boundary: (ah, hb),
    } = *cache;
    let (a, b, c, h) = (a.as_str(), b.as_str(), c.as_str(), hanging.as_str());

    mutation.promote_vertex(h)?;
    mutation.remove_interior(interior.as_str())?;
    mutation.delete_edge(a, h)?;
    mutation.delete_edge(h, b)?;

    mutation.insert_edge(format!("{}{}", a, h), a, h, ah)?;
    mutation.insert_edge(format!("{}{}", h, b), h, b, hb)?;
    mutation.insert_edge(format!("{}{}", h, c), h, c, false)?;
    let left = mutation.insert_interior(format!("{}{}{}", a, h, c), [a, h, c], false)?;
    let right = mutation.insert_interior(format!("{}{}{}", h, b, c), [h, b, c], false)?;

    mutation.validate_interior(left.as_str())?;
    mutation.validate_interior(right.as_str())
}

// Finds a hanging vertex at the exact midpoint of two vertices.
fn hanging_midpoint<'a>(graph: &'a MeshGraph, a: &Vertex, b: &Vertex) -> Option<&'a Vertex> {
    let midpoint = Point3::midpoint(a.position(), b.position());
    graph
        .vertices_between(a.key().as_str(), b.key().as_str())
        .into_iter()
        .find(|vertex| vertex.is_hanging() && *vertex.position() == midpoint)
}
