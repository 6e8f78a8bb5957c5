//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (colored) vertices and edges.
//!
//! Vertices are written as quoted IDs (`"prefix" + vertex`), so any `Display` output is accepted.
//! The state of a search can be drawn by passing its color map:
//! ```rust
//! use vgraphs::{prelude::*, algo::*, io::*};
//!
//! let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (2, 3)]);
//! let mut dfs = DepthFirstSearch::new(&graph).with_root(0);
//! dfs.compute().unwrap();
//!
//! let mut out = Vec::new();
//! DotWriter::new()
//!     .try_write_colored_graph(&graph, dfs.colors(), &mut out)
//!     .unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("\"2\"[style=filled, fillcolor=white];"));
//! ```
//!
//! Note that for vertices, the latest coloring is the one that will be applied in a visualizer,
//! whereas for edges, each new colored edge adds another edge to the graph.
use std::{fmt::Display, io::Write};

use super::*;
use crate::algo::{ColorMap, GraphColor};

/// A writer for the Dot-Format
#[derive(Debug, Clone, Default)]
pub struct DotWriter {
    /// Prefix of a vertex (default: none)
    prefix: String,
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of a vertex (empty by default). Can also be changed while drawing to draw
    /// additional subgraphs apart from the original graph.
    pub fn vertex_prefix<S>(self, prefix: S) -> DotWriter
    where
        S: Into<String>,
    {
        DotWriter {
            prefix: prefix.into(),
        }
    }

    /// Writes the opening brackets of the graph.
    /// Must know if the graph is undirected
    pub fn start_graph<W>(&self, writer: &mut W, directed: bool) -> Result<()>
    where
        W: Write,
    {
        let graph_name = if directed { "digraph" } else { "graph" };

        writeln!(writer, "{graph_name} {{")
    }

    /// Formats a vertex as a quoted ID
    fn format_vertex<V: Display>(&self, u: V) -> String {
        let id = format!("{}{u}", self.prefix);
        format!("\"{}\"", id.replace('"', "\\\""))
    }

    /// Writes all vertices so that isolated vertices are drawn as well
    pub fn write_vertices<W, I>(&self, writer: &mut W, vertices: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator,
        I::Item: Display,
    {
        for u in vertices {
            write!(writer, "{};", self.format_vertex(u))?;
        }
        writeln!(writer)
    }

    /// Writes an iterator of edges to `writer`. Must know if the edges are directed and if they
    /// should be colored.
    pub fn write_edges<W, I>(
        &self,
        writer: &mut W,
        edges: I,
        directed: bool,
        color: Option<DotColor>,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator,
        I::Item: EdgeEndpoints,
        <I::Item as EdgeEndpoints>::Vertex: Display,
    {
        let edge_dir = if directed { "->" } else { "--" };

        let edge_color = if let Some(c) = color {
            &format!("[color={c}]")
        } else {
            ""
        };

        for edge in edges {
            write!(
                writer,
                "{}{edge_dir}{}{edge_color};",
                self.format_vertex(edge.source()),
                self.format_vertex(edge.target())
            )?;
        }
        writeln!(writer)
    }

    /// Writes a list of filled vertices to `writer`.
    pub fn color_vertices<W, I>(&self, writer: &mut W, vertices: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator,
        I::Item: Display,
    {
        for u in vertices {
            write!(
                writer,
                "{}[style=filled, fillcolor={color}];",
                self.format_vertex(u)
            )?;
        }
        writeln!(writer)
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }

    /// Writes the graph with every vertex filled according to its color in `colors`.
    /// Vertices missing from the map are drawn white.
    pub fn try_write_colored_graph<G, W>(
        &self,
        graph: &G,
        colors: &ColorMap<G::Vertex>,
        mut writer: W,
    ) -> Result<()>
    where
        G: EdgeListGraph,
        G::Vertex: Display,
        W: Write,
    {
        let directed = graph.is_directed();
        self.start_graph(&mut writer, directed)?;
        for color in [GraphColor::White, GraphColor::Gray, GraphColor::Black] {
            self.color_vertices(
                &mut writer,
                graph
                    .vertices()
                    .filter(|v| colors.get_or_white(v) == color),
                color.into(),
            )?;
        }
        self.write_edges(&mut writer, graph.edges(), directed, None)?;
        self.finish_graph(&mut writer)
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: EdgeListGraph,
    G::Vertex: Display,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let directed = graph.is_directed();
        self.start_graph(&mut writer, directed)?;
        self.write_vertices(&mut writer, graph.vertices())?;
        self.write_edges(&mut writer, graph.edges(), directed, None)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    G: EdgeListGraph,
    G::Vertex: Display,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

impl From<GraphColor> for DotColor {
    fn from(color: GraphColor) -> Self {
        match color {
            GraphColor::White => DotColor::White,
            GraphColor::Gray => DotColor::Gray,
            GraphColor::Black => DotColor::DimGray,
        }
    }
}

/// A selection of the colors permitted in Svg-Dot, see
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Brown,
    Crimson,
    Cyan,
    DarkGreen,
    DimGray,
    Gold,
    Gray,
    Green,
    LightBlue,
    LightGray,
    Magenta,
    Orange,
    Purple,
    Red,
    SteelBlue,
    Teal,
    White,
    Yellow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    fn to_string(write: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn directed_graph() {
        let graph: DiGraph<u32> = DiGraph::from_vertices_and_edges([0, 1, 2, 3], [(0, 1), (1, 2)]);

        assert_eq!(
            to_string(|w| graph.try_write_dot(w)),
            "digraph {\n\"0\";\"1\";\"2\";\"3\";\n\"0\"->\"1\";\"1\"->\"2\";\n}\n"
        );
    }

    #[test]
    fn undirected_graph_with_prefix() {
        let graph: UnGraph<char> = UnGraph::from_edges([('a', 'b')]);

        assert_eq!(
            to_string(|w| DotWriter::new().vertex_prefix("v").try_write_graph(&graph, w)),
            "graph {\n\"va\";\"vb\";\n\"va\"--\"vb\";\n}\n"
        );
    }

    #[test]
    fn colored_edges() {
        let writer = DotWriter::new();
        let out = to_string(|w| {
            writer.write_edges(w, [Edge(1u32, 2)], true, Some(DotColor::SteelBlue))
        });
        assert_eq!(out, "\"1\"->\"2\"[color=steelblue];\n");
    }

    #[test]
    fn colors_of_a_stopped_search() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
        let cancel = CancelManager::new();
        let stopper = cancel.clone();
        let mut dfs = DepthFirstSearch::new(&graph)
            .with_root(0)
            .with_cancel_manager(cancel)
            .with_visitor(OnEvent(move |event: SearchEvent<u32, Edge<u32>>| {
                if event == SearchEvent::DiscoverVertex(2) {
                    stopper.cancel();
                }
            }));
        dfs.compute().unwrap();

        let out = to_string(|w| DotWriter::new().try_write_colored_graph(&graph, dfs.colors(), w));
        assert!(out.contains("\"3\"[style=filled, fillcolor=white];"));
        assert!(out.contains("\"0\"[style=filled, fillcolor=gray];"));
        assert!(out.contains("\"2\"[style=filled, fillcolor=gray];"));
        assert!(!out.contains("dimgray"));
    }
}
