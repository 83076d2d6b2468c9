use derivative::Derivative;
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

use crate::geometry::Point3;
use crate::graph::edge::EdgeKey;

/// Classification of a vertex with respect to mesh conformity.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VertexKind {
    /// A true corner of every element that touches it.
    Simple,
    /// A midpoint introduced by finer refinement on one side of an edge that
    /// is not (yet) a corner of the coarser element on the other side.
    Hanging,
}

impl VertexKind {
    pub fn is_hanging(&self) -> bool {
        matches!(self, VertexKind::Hanging)
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexKey(String);

impl VertexKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VertexKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for VertexKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for VertexKey {
    fn from(key: &str) -> Self {
        VertexKey(key.to_owned())
    }
}

impl From<String> for VertexKey {
    fn from(key: String) -> Self {
        VertexKey(key)
    }
}

/// Graph vertex.
#[derive(Derivative)]
#[derivative(Clone, Debug, PartialEq)]
pub struct Vertex {
    key: VertexKey,
    kind: VertexKind,
    position: Point3,
    /// Keys of incident edges.
    ///
    /// Ordering reflects insertion history and is not part of the vertex's
    /// identity.
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    pub(in crate::graph) edges: SmallVec<[EdgeKey; 6]>,
}

impl Vertex {
    pub(in crate::graph) fn new(key: VertexKey, kind: VertexKind, position: Point3) -> Self {
        Vertex {
            key,
            kind,
            position,
            edges: SmallVec::new(),
        }
    }

    pub fn key(&self) -> &VertexKey {
        &self.key
    }

    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    pub fn is_hanging(&self) -> bool {
        self.kind.is_hanging()
    }

    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Gets the keys of the edges incident to the vertex.
    pub fn edges(&self) -> impl '_ + ExactSizeIterator<Item = &EdgeKey> {
        self.edges.iter()
    }

    pub(in crate::graph) fn set_kind(&mut self, kind: VertexKind) -> VertexKind {
        std::mem::replace(&mut self.kind, kind)
    }
}
