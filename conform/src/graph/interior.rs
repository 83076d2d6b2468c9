use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

use crate::graph::vertex::VertexKey;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InteriorKey(String);

impl InteriorKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for InteriorKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for InteriorKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for InteriorKey {
    fn from(key: &str) -> Self {
        InteriorKey(key.to_owned())
    }
}

impl From<String> for InteriorKey {
    fn from(key: String) -> Self {
        InteriorKey(key)
    }
}

/// Triangular element of a graph.
///
/// An interior only refers to its corners. Its boundary is represented by the
/// edges joining those corners, which are owned by the graph and may be shared
/// with adjacent interiors.
#[derive(Clone, Debug, PartialEq)]
pub struct Interior {
    key: InteriorKey,
    corners: [VertexKey; 3],
    partition_required: bool,
}

impl Interior {
    pub(in crate::graph) fn new(key: InteriorKey, corners: [VertexKey; 3]) -> Self {
        Interior {
            key,
            corners,
            partition_required: false,
        }
    }

    pub fn key(&self) -> &InteriorKey {
        &self.key
    }

    /// Gets the corners of the interior in the order given at insertion.
    pub fn corners(&self) -> &[VertexKey; 3] {
        &self.corners
    }

    pub fn is_corner(&self, vertex: &str) -> bool {
        self.corners.iter().any(|key| key.as_str() == vertex)
    }

    /// Returns `true` if downstream refinement has flagged the interior for
    /// further partitioning.
    ///
    /// Interiors produced by a transformation are never flagged.
    pub fn is_partition_required(&self) -> bool {
        self.partition_required
    }

    pub fn set_partition_required(&mut self, partition_required: bool) {
        self.partition_required = partition_required;
    }
}
