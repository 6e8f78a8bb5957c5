/*!
# Search Algorithms

This module provides the depth-first and breadth-first search family together with the
infrastructure they share. All algorithms are re-exported at the top level of this module, so you
can simply do:
```rust
use vgraphs::algo::*;
```

Every search is a configurable struct: create it on a graph, adjust it with the *Builder* methods
(`with_root`, `with_max_depth`, `with_visitor`, ...), then call [`Algorithm::compute`]. Progress is
reported as [`SearchEvent`]s to a [`SearchVisitor`]; the [`observers`] module contains visitors for
the most common questions (predecessors, distances, discovery order).

| Algorithm | Graph | Colors |
|---|---|---|
| [`DepthFirstSearch`] | [`VertexListGraph`] | vertices |
| [`UndirectedDepthFirstSearch`] | [`UndirectedGraph`] | vertices |
| [`BidirectionalDepthFirstSearch`] | [`BidirectionalGraph`] | vertices |
| [`BreadthFirstSearch`] | [`VertexListGraph`] | vertices |
| [`UndirectedBreadthFirstSearch`] | [`UndirectedGraph`] | vertices |
| [`EdgeDepthFirstSearch`] | [`EdgeListAndIncidenceGraph`] | edges |
| [`ImplicitEdgeDepthFirstSearch`] | [`IncidenceGraph`] | edges |
| [`ImplicitDepthFirstSearch`] | [`IncidenceGraph`] | vertices |

Common questions are also available as methods on graphs through the [`Traversal`] trait.
*/

mod base;
mod bfs;
mod bidirectional_dfs;
mod color;
mod components;
mod dfs;
mod edge_dfs;
mod events;
mod implicit_dfs;
pub mod observers;
mod topological;
mod traversal;
mod undirected_bfs;
mod undirected_dfs;

use std::{collections::VecDeque, vec};

use fxhash::FxHashMap;

use crate::{error::*, prelude::*, utils::DoubleIter};

pub use base::*;
pub use bfs::*;
pub use bidirectional_dfs::*;
pub use color::*;
pub use components::*;
pub use dfs::*;
pub use edge_dfs::*;
pub use events::*;
pub use implicit_dfs::*;
pub use observers::*;
pub use topological::*;
pub use traversal::*;
pub use undirected_bfs::*;
pub use undirected_dfs::*;
