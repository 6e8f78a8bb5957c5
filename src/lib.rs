/*!
`vgraphs` is a generic graph library built around small **capability traits**, color-marking
**search algorithms** and lazy **graph views**.

# Representation

Graphs are not tied to a concrete vertex type: any `Copy + Eq + Hash + Debug` value can be a vertex
and any type implementing [`EdgeEndpoints`](crate::edge::EdgeEndpoints) can be an edge.
For plain graphs, we use a simple tuple-struct `Edge(V, V)`.

What a graph can do is expressed by the traits it implements (see [`ops`]):

- [`ImplicitVertexSet`](crate::ops::ImplicitVertexSet) / [`VertexSet`](crate::ops::VertexSet): membership and enumeration of vertices,
- [`EdgeSet`](crate::ops::EdgeSet): enumeration of edges,
- [`ImplicitGraph`](crate::ops::ImplicitGraph) / [`IncidenceGraph`](crate::ops::IncidenceGraph): out-edges of a vertex,
- [`BidirectionalIncidenceGraph`](crate::ops::BidirectionalIncidenceGraph): additionally in-edges,
- [`ImplicitUndirectedGraph`](crate::ops::ImplicitUndirectedGraph): adjacent edges of an undirected graph.

Algorithms only require the capabilities they use, so they run on the stores in [`repr`] as well as
on the views in [`adapters`] and on closure-backed graphs that are never materialized.

### Directed vs Undirected

- In an **undirected** graph, `Edge(u, v)` is stored once and reported in the adjacency of both endpoints.
  Searches walking an edge from its target report it as `reversed`.
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are considered distinct.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before calling [`compute`](crate::algo::Algorithm::compute).
Progress is reported as a stream of [`SearchEvent`](crate::algo::SearchEvent)s to a visitor;
the [`observers`](crate::algo::observers) record the usual results such as predecessors or
discovery times. Long-running computations can be aborted via a shared
[`CancelManager`](crate::algo::CancelManager).

The most common functionalities are also implemented via the [`Traversal`](crate::algo::Traversal)
trait on the graph itself, making them usable without configuring the algorithm beforehand.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for edges, basic graph operations, and all graph stores,
- [`algo`] includes the search algorithms, their events and observers,
- [`adapters`] includes reversed, filtered, undirected and closure-backed views on graphs,
- [`gens`] includes a random graph generator and deterministic substructures such as paths/cycles/cliques,
- [`io`] includes handlers for reading and writing DOT and GraphML.

In most use-cases, `use vgraphs::{prelude::*, algo::*};` suffices for your needs.

```rust
use vgraphs::{prelude::*, algo::*};

let graph: DiGraph<&str> = DiGraph::from_edges([("shirt", "tie"), ("tie", "jacket"), ("pants", "shoes")]);
let mut predecessors = VertexPredecessorRecorder::new();

let mut dfs = DepthFirstSearch::new(&graph)
    .with_root("shirt")
    .with_visitor(&mut predecessors);
dfs.compute().unwrap();
drop(dfs);

assert_eq!(predecessors.try_get_path("jacket").unwrap().len(), 2);
assert_eq!(predecessors.try_get_path("shoes"), None);
```
*/

pub mod adapters;
pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `vgraphs::prelude` includes the edge types, the error type, all graph capability traits as well
/// as all implemented stores.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, ops::*, repr::*};
}
