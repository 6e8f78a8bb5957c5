/*!
# Graph Adapters

Lightweight views presenting an existing graph (or a set of closures) through the capability
traits of [`ops`](crate::ops), so that the search algorithms can run on them unchanged:

- [`ReversedGraph`]: swaps the roles of in- and out-edges of a bidirectional graph
- [`BidirectionalAdapter`]: adds in-edges to a graph that only stores out-edges
- [`UndirectedView`]: treats a bidirectional graph as undirected
- [`FilteredGraph`]: hides vertices and edges failing a predicate
- Delegate graphs ([`DelegateIncidenceGraph`], [`DelegateVertexAndEdgeListGraph`],
  [`DelegateBidirectionalGraph`], [`DelegateUndirectedGraph`]): graphs whose edges are produced
  by closures

Views borrow the wrapped graph and never copy it, except for the in-edge index built once by
[`BidirectionalAdapter::new`].
*/

mod bidirectional;
mod delegate;
mod filtered;
mod reversed;
mod undirected;

use crate::{edge::*, ops::*};

pub use bidirectional::*;
pub use delegate::*;
pub use filtered::*;
pub use reversed::*;
pub use undirected::*;
