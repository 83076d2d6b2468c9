use std::ops::Deref;
use tracing::trace;

use crate::geometry::Point3;
use crate::graph::edge::{Edge, EdgeKey};
use crate::graph::interior::{Interior, InteriorKey};
use crate::graph::vertex::{VertexKey, VertexKind};
use crate::graph::{GraphError, MeshGraph, OptionExt};
use crate::transact::Transact;

// Each entry records enough to reverse one change.
#[derive(Debug)]
enum Change {
    InsertVertex(VertexKey),
    Reclassify(VertexKey, VertexKind),
    InsertEdge(EdgeKey),
    RemoveEdge(Edge),
    InsertInterior(InteriorKey),
    RemoveInterior(Interior),
}

/// Graph mutation.
///
/// A mutation takes ownership of a graph and journals every change applied
/// through it. Committing yields the mutated graph. Aborting reverses the
/// journal and yields the graph exactly as it was when the mutation began, so
/// a rewrite composed of several changes is either applied entirely or not at
/// all.
///
/// Reads are forwarded to the graph being mutated.
pub struct Mutation {
    graph: MeshGraph,
    journal: Vec<Change>,
}

impl Mutation {
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
        let key = self
            .graph
            .insert_vertex(key, kind, position)?
            .key()
            .clone();
        self.journal.push(Change::InsertVertex(key.clone()));
        Ok(key)
    }

    /// Reclassifies a hanging vertex as a simple vertex.
    ///
    /// Promoting a vertex that is already simple has no effect.
    pub fn promote_vertex(&mut self, key: &str) -> Result<(), GraphError> {
        let kind = self.graph.set_vertex_kind(key, VertexKind::Simple)?;
        self.journal.push(Change::Reclassify(key.into(), kind));
        Ok(())
    }

    pub fn insert_edge<K>(
        &mut self,
        key: K,
        a: &str,
        b: &str,
        boundary: bool,
    ) -> Result<EdgeKey, GraphError>
    where
        K: Into<EdgeKey>,
    {
        let edge = self.graph.insert_edge(key, a, b)?;
        edge.set_boundary(boundary);
        let key = edge.key().clone();
        self.journal.push(Change::InsertEdge(key.clone()));
        Ok(key)
    }

    pub fn delete_edge(&mut self, a: &str, b: &str) -> Result<Edge, GraphError> {
        let edge = self.graph.delete_edge(a, b)?;
        self.journal.push(Change::RemoveEdge(edge.clone()));
        Ok(edge)
    }

    pub fn insert_interior<K>(
        &mut self,
        key: K,
        corners: [&str; 3],
        partition_required: bool,
    ) -> Result<InteriorKey, GraphError>
    where
        K: Into<InteriorKey>,
    {
        let [a, b, c] = corners;
        let interior = self.graph.insert_interior(key, a, b, c)?;
        interior.set_partition_required(partition_required);
        let key = interior.key().clone();
        self.journal.push(Change::InsertInterior(key.clone()));
        Ok(key)
    }

    pub fn remove_interior(&mut self, key: &str) -> Result<Interior, GraphError> {
        let interior = self.graph.remove_interior(key)?;
        self.journal.push(Change::RemoveInterior(interior.clone()));
        Ok(interior)
    }

    fn rollback(&mut self) {
        let graph = &mut self.graph;
        for change in self.journal.drain(..).rev() {
            // Changes are reversed in order, so every entity referenced by a
            // change is present again when that change is undone.
            match change {
                Change::InsertVertex(key) => {
                    graph.vertices.remove(&key);
                }
                Change::Reclassify(key, kind) => {
                    if let Some(vertex) = graph.vertices.get_mut(&key) {
                        vertex.set_kind(kind);
                    }
                }
                Change::InsertEdge(key) => {
                    graph.remove_edge(key.as_str()).ok().expect_consistent();
                }
                Change::RemoveEdge(edge) => {
                    graph.link_edge(edge);
                }
                Change::InsertInterior(key) => {
                    graph.interiors.remove(&key);
                }
                Change::RemoveInterior(interior) => {
                    graph.link_interior(interior);
                }
            }
        }
    }
}

impl AsRef<MeshGraph> for Mutation {
    fn as_ref(&self) -> &MeshGraph {
        &self.graph
    }
}

impl Deref for Mutation {
    type Target = MeshGraph;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl From<MeshGraph> for Mutation {
    fn from(graph: MeshGraph) -> Self {
        Mutation {
            graph,
            journal: Vec::new(),
        }
    }
}

impl Transact<MeshGraph> for Mutation {
    type Output = MeshGraph;
    type Error = GraphError;

    fn commit(self) -> Result<Self::Output, Self::Error> {
        trace!("committing mutation with {} change(s)", self.journal.len());
        Ok(self.graph)
    }

    fn abort(mut self) -> MeshGraph {
        trace!("aborting mutation with {} change(s)", self.journal.len());
        self.rollback();
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{GraphError, MeshGraph, Mutation, VertexKind};
    use crate::transact::{Mutate, Transact};

    fn graph() -> MeshGraph {
        let mut graph = MeshGraph::new();
        graph
            .insert_vertex("a", VertexKind::Simple, (0.0, 0.0, 0.0))
            .unwrap();
        graph
            .insert_vertex("h", VertexKind::Hanging, (1.0, 0.0, 0.0))
            .unwrap();
        graph
            .insert_vertex("b", VertexKind::Simple, (2.0, 0.0, 0.0))
            .unwrap();
        graph
            .insert_vertex("c", VertexKind::Simple, (1.0, 2.0, 0.0))
            .unwrap();
        graph.insert_edge("e0", "a", "h").unwrap().set_boundary(true);
        graph.insert_edge("e1", "h", "b").unwrap();
        graph.insert_edge("e2", "b", "c").unwrap();
        graph.insert_edge("e3", "c", "a").unwrap();
        graph
            .insert_interior("i0", "a", "b", "c")
            .unwrap()
            .set_partition_required(true);
        graph
    }

    // Applies a few changes of every kind.
    fn churn(mutation: &mut Mutation) -> Result<(), GraphError> {
        mutation.promote_vertex("h")?;
        mutation.remove_interior("i0")?;
        mutation.delete_edge("a", "h")?;
        mutation.insert_edge("ah", "a", "h", false)?;
        mutation.insert_edge("hc", "h", "c", false)?;
        mutation.insert_vertex("d", VertexKind::Simple, (0.0, 2.0, 0.0))?;
        mutation.insert_interior("ahc", ["a", "h", "c"], false)?;
        Ok(())
    }

    #[test]
    fn commit_keeps_changes() {
        let mut mutation = Mutation::from(graph());
        churn(&mut mutation).unwrap();
        let graph = mutation.commit().unwrap();

        assert_eq!(VertexKind::Simple, graph.vertex("h").unwrap().kind());
        assert!(graph.interior("i0").is_none());
        assert!(graph.edge("e0").is_none());
        assert!(!graph.edge("ah").unwrap().is_boundary());
        assert!(graph.vertex("d").is_some());
        assert!(!graph.interior("ahc").unwrap().is_partition_required());
    }

    #[test]
    fn abort_restores_graph() {
        let original = graph();
        let mut mutation = Mutation::from(original.clone());
        churn(&mut mutation).unwrap();
        let graph = mutation.abort();

        assert_eq!(original, graph);
        assert!(graph.edge("e0").unwrap().is_boundary());
        assert!(graph.interior("i0").unwrap().is_partition_required());
        assert_eq!(VertexKind::Hanging, graph.vertex("h").unwrap().kind());
        assert_eq!(2, graph.vertex("h").unwrap().edges().len());
    }

    #[test]
    fn failed_replace_restores_target() {
        let original = graph();
        let mut graph = original.clone();

        let result = Mutation::replace(&mut graph, MeshGraph::default()).commit_with(|mutation| {
            let mutation = mutation.as_mut();
            churn(mutation)?;
            // The edge key is already taken.
            mutation.insert_edge("e2", "a", "d", false)
        });

        assert_eq!(Err(GraphError::EdgeConflict("e2".into())), result.map(|_| ()));
        assert_eq!(original, graph);
    }

    #[test]
    fn dropped_replace_restores_target() {
        let original = graph();
        let mut graph = original.clone();
        {
            let mut replace = Mutation::replace(&mut graph, MeshGraph::default());
            churn(replace.as_mut()).unwrap();
        }

        assert_eq!(original, graph);
    }

    #[test]
    fn committed_replace_writes_target() {
        let mut graph = graph();
        Mutation::replace(&mut graph, MeshGraph::default())
            .commit_with(|mutation| churn(mutation.as_mut()))
            .unwrap();

        assert_eq!(0, graph.hanging_vertex_count());
        assert!(graph.interior("ahc").is_some());
    }
}
