use crate::geometry::Point3;
use crate::graph::edge::EdgeKey;
use crate::graph::interior::InteriorKey;
use crate::graph::mutation::Mutation;
use crate::graph::vertex::{VertexKey, VertexKind};
use crate::graph::{GraphError, MeshGraph};
use crate::transact::Transact;

/// Incremental construction of a [`MeshGraph`].
///
/// The builder yields a graph only if every insertion succeeds and every
/// interior is bounded by edges (see [`MeshGraph::validate`]).
///
/// # Examples
///
/// ```rust
/// use conform::graph::{GraphBuilder, VertexKind};
/// use conform::prelude::*;
///
/// let (graph, _) = GraphBuilder::default()
///     .commit_with(|builder| {
///         builder.insert_vertex("a", VertexKind::Simple, (0.0, 0.0, 0.0))?;
///         builder.insert_vertex("b", VertexKind::Simple, (1.0, 0.0, 0.0))?;
///         builder.insert_vertex("c", VertexKind::Simple, (0.0, 1.0, 0.0))?;
///         builder.insert_boundary_edge("ab", "a", "b")?;
///         builder.insert_edge("bc", "b", "c")?;
///         builder.insert_boundary_edge("ca", "c", "a")?;
///         builder.insert_interior("abc", "a", "b", "c")
///     })
///     .unwrap();
///
/// assert_eq!(1, graph.interior_count());
/// assert!(graph.edge("ab").unwrap().is_boundary());
/// ```
pub struct GraphBuilder {
    mutation: Mutation,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        GraphBuilder {
            mutation: Mutation::from(MeshGraph::default()),
        }
    }
}

impl GraphBuilder {
    pub fn insert_vertex<K, P>(
        &mut self,
        key: K,
        kind: VertexKind,
        position: P,
    ) -> Result<VertexKey, GraphError>
    where
        K: Into<VertexKey>,
        P: Into<Point3>,
    {
        self.mutation.insert_vertex(key, kind, position)
    }

    pub fn insert_edge<K>(&mut self, key: K, a: &str, b: &str) -> Result<EdgeKey, GraphError>
    where
        K: Into<EdgeKey>,
    {
        self.mutation.insert_edge(key, a, b, false)
    }

    /// Inserts an edge that carries the boundary flag.
    pub fn insert_boundary_edge<K>(
        &mut self,
        key: K,
        a: &str,
        b: &str,
    ) -> Result<EdgeKey, GraphError>
    where
        K: Into<EdgeKey>,
    {
        self.mutation.insert_edge(key, a, b, true)
    }

    pub fn insert_interior<K>(
        &mut self,
        key: K,
        a: &str,
        b: &str,
        c: &str,
    ) -> Result<InteriorKey, GraphError>
    where
        K: Into<InteriorKey>,
    {
        self.mutation.insert_interior(key, [a, b, c], false)
    }
}

impl Transact for GraphBuilder {
    type Output = MeshGraph;
    type Error = GraphError;

    fn commit(self) -> Result<Self::Output, Self::Error> {
        let GraphBuilder { mutation } = self;
        mutation.validate()?;
        mutation.commit()
    }

    fn abort(self) {}
}

#[cfg(test)]
mod tests {
    use crate::graph::{GraphBuilder, GraphError, VertexKind};
    use crate::transact::Transact;

    #[test]
    fn build_triangle() {
        let (graph, key) = GraphBuilder::default()
            .commit_with(|builder| {
                builder.insert_vertex("a", VertexKind::Simple, (0.0, 0.0, 0.0))?;
                builder.insert_vertex("b", VertexKind::Simple, (1.0, 0.0, 0.0))?;
                builder.insert_vertex("c", VertexKind::Simple, (0.0, 1.0, 0.0))?;
                builder.insert_edge("ab", "a", "b")?;
                builder.insert_edge("bc", "b", "c")?;
                builder.insert_edge("ca", "c", "a")?;
                builder.insert_interior("abc", "a", "b", "c")
            })
            .unwrap();

        assert_eq!("abc", key.as_str());
        assert_eq!(3, graph.vertex_count());
        assert_eq!(3, graph.edge_count());
        assert_eq!(1, graph.interior_count());
        assert!(!graph.interior("abc").unwrap().is_partition_required());
    }

    #[test]
    fn reject_insertion_error() {
        let result = GraphBuilder::default().commit_with(|builder| {
            builder.insert_vertex("a", VertexKind::Simple, (0.0, 0.0, 0.0))?;
            builder.insert_vertex("a", VertexKind::Hanging, (1.0, 0.0, 0.0))
        });

        assert_eq!(
            Err(GraphError::VertexConflict("a".into())),
            result.map(|_| ())
        );
    }

    #[test]
    fn reject_unbounded_interior() {
        let result = GraphBuilder::default().commit_with(|builder| {
            builder.insert_vertex("a", VertexKind::Simple, (0.0, 0.0, 0.0))?;
            builder.insert_vertex("b", VertexKind::Simple, (1.0, 0.0, 0.0))?;
            builder.insert_vertex("c", VertexKind::Simple, (0.0, 1.0, 0.0))?;
            builder.insert_edge("ab", "a", "b")?;
            builder.insert_edge("bc", "b", "c")?;
            builder.insert_interior("abc", "a", "b", "c")
        });

        assert_eq!(
            Err(GraphError::InteriorNotConforming {
                interior: "abc".into(),
                a: "a".into(),
                b: "c".into(),
            }),
            result.map(|_| ())
        );
    }
}
