/*!
# IO

Utilities for reading and writing graphs from and to different file formats.

## Formats

- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).
  Output only; vertices can be filled according to a search's [`ColorMap`](crate::algo::ColorMap).
- **GraphML**: The structural subset of [GraphML](http://graphml.graphdrawing.org/), i.e. a single
  `<graph>` of `<node id>` and `<edge source target>` elements. Other elements and attributes are
  ignored when reading.

Vertices are written through their `Display` implementation and parsed back via `FromStr`.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].
*/

pub mod dot;
pub mod graphml;

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use dot::*;
pub use graphml::*;

/// Identifier for a graph file format.
///
/// Used in [`GraphRead`] and [`GraphWrite`] to determine the
/// correct parser or writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// DOT language of GraphViz
    Dot,
    /// GraphML
    GraphMl,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "gv" => Ok(FileFormat::Dot),
            "graphml" => Ok(FileFormat::GraphMl),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the format cannot be read
    /// or if the input does not match the expected format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: MutableGraph + Default,
    G::Vertex: FromStr,
    G::Edge: From<(G::Vertex, G::Vertex)>,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::GraphMl => GraphMlReader::new().try_read_graph(reader),
            FileFormat::Dot => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("{format:?} does not support GraphRead")
            )),
        }
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: EdgeListGraph,
    G::Vertex: Display,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Dot => DotWriter::new().try_write_graph(self, writer),
            FileFormat::GraphMl => GraphMlWriter::new().try_write_graph(self, writer),
        }
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!("GraphML".parse::<FileFormat>().unwrap(), FileFormat::GraphMl);
        assert_eq!("dot".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert_eq!(
            "metis".parse::<FileFormat>().unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn dispatch() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 0)]);

        let mut buffer = Vec::new();
        graph
            .try_write_to_writer(&mut buffer, FileFormat::GraphMl)
            .unwrap();
        let read = DiGraph::<u32>::try_from_reader(buffer.as_slice(), FileFormat::GraphMl).unwrap();
        assert_eq!(read.edges().collect::<Vec<_>>(), graph.edges().collect::<Vec<_>>());

        let mut buffer = Vec::new();
        graph.try_write_to_writer(&mut buffer, FileFormat::Dot).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("digraph {"));

        assert_eq!(
            DiGraph::<u32>::try_from_reader(&b"digraph {}"[..], FileFormat::Dot)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidInput
        );
    }
}
