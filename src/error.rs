/*!
# Errors

All fallible operations of this crate return [`Result`] with a [`GraphError`].
Vertices and edges referenced in an error are rendered with their `Debug` representation so that
the error type itself stays free of generic parameters.
*/

use std::fmt::Debug;

use thiserror::Error;

/// Errors raised by graph stores, algorithms and color maps
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A root vertex was set on an algorithm but the graph does not contain it
    #[error("root vertex {root} is not part of the graph")]
    RootNotInGraph { root: String },

    /// The algorithm requires a root vertex but none was set
    #[error("algorithm requires a root vertex but none was set")]
    MissingRootVertex,

    /// A color lookup hit an uninitialized key
    #[error("no color assigned to {key}")]
    KeyNotFound { key: String },

    /// A mutation referenced a vertex that has not been added
    #[error("vertex {vertex} is not part of the graph")]
    VertexNotFound { vertex: String },

    /// Positional access past the end of an edge list
    #[error("index {index} is out of range for {count} elements")]
    IndexOutOfRange { index: usize, count: usize },

    /// A topological order was requested on a graph that contains a cycle
    #[error("graph is not acyclic")]
    NonAcyclicGraph,
}

impl GraphError {
    pub(crate) fn root_not_in_graph<V: Debug>(root: V) -> Self {
        Self::RootNotInGraph {
            root: format!("{root:?}"),
        }
    }

    pub(crate) fn key_not_found<K: Debug>(key: &K) -> Self {
        Self::KeyNotFound {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn vertex_not_found<V: Debug>(vertex: V) -> Self {
        Self::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::root_not_in_graph(7u32).to_string(),
            "root vertex 7 is not part of the graph"
        );
        assert_eq!(
            GraphError::key_not_found(&"x").to_string(),
            "no color assigned to \"x\""
        );
        assert_eq!(
            GraphError::IndexOutOfRange { index: 3, count: 2 }.to_string(),
            "index 3 is out of range for 2 elements"
        );
    }
}
