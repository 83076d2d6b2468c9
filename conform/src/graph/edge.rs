use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

use crate::graph::vertex::VertexKey;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeKey(String);

impl EdgeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EdgeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for EdgeKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for EdgeKey {
    fn from(key: &str) -> Self {
        EdgeKey(key.to_owned())
    }
}

impl From<String> for EdgeKey {
    fn from(key: String) -> Self {
        EdgeKey(key)
    }
}

/// Graph edge.
///
/// An edge joins an unordered pair of vertices. The endpoints are kept in the
/// order given at insertion, but no query depends on that order.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    key: EdgeKey,
    endpoints: [VertexKey; 2],
    /// Euclidean length of the edge at the time it was inserted.
    length: f64,
    boundary: bool,
}

impl Edge {
    pub(in crate::graph) fn new(key: EdgeKey, endpoints: [VertexKey; 2], length: f64) -> Self {
        Edge {
            key,
            endpoints,
            length,
            boundary: false,
        }
    }

    pub fn key(&self) -> &EdgeKey {
        &self.key
    }

    pub fn endpoints(&self) -> (&VertexKey, &VertexKey) {
        let [a, b] = &self.endpoints;
        (a, b)
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns `true` if the edge carries the boundary flag.
    ///
    /// The flag marks an edge that inherits a designated property, such as
    /// membership in the original boundary of the mesh. Edges that replace a
    /// flagged edge during a transformation inherit its flag.
    pub fn is_boundary(&self) -> bool {
        self.boundary
    }

    pub fn set_boundary(&mut self, boundary: bool) {
        self.boundary = boundary;
    }

    pub fn is_incident(&self, vertex: &str) -> bool {
        self.endpoints.iter().any(|key| key.as_str() == vertex)
    }

    /// Gets the endpoint opposite to the given vertex.
    ///
    /// Returns `None` if the vertex is not an endpoint of the edge.
    pub fn opposite(&self, vertex: &str) -> Option<&VertexKey> {
        let [a, b] = &self.endpoints;
        if a.as_str() == vertex {
            Some(b)
        }
        else if b.as_str() == vertex {
            Some(a)
        }
        else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::edge::Edge;

    #[test]
    fn opposite() {
        let edge = Edge::new("ab".into(), ["a".into(), "b".into()], 1.0);

        assert_eq!("b", edge.opposite("a").unwrap().as_str());
        assert_eq!("a", edge.opposite("b").unwrap().as_str());
        assert!(edge.opposite("c").is_none());
        assert!(edge.is_incident("a"));
        assert!(!edge.is_incident("c"));
        assert!(!edge.is_boundary());
    }
}
