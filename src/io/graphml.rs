//! # GraphML
//!
//! Reads and writes the structural part of [GraphML](http://graphml.graphdrawing.org/):
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <graphml xmlns="http://graphml.graphdrawing.org/xmlns">
//!   <graph id="G" edgedefault="directed">
//!     <node id="0"/>
//!     <edge source="0" target="1"/>
//!   </graph>
//! </graphml>
//! ```
//! Only the first `<graph>` element is read. Keys, data elements and other attributes are skipped.
use std::fmt::Display;

use log::debug;
use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, Event},
};

use super::*;

const GRAPHML_NAMESPACE: &str = "http://graphml.graphdrawing.org/xmlns";

/// Maps any XML or parsing failure into an `InvalidData` IO-error
fn invalid_data(err: impl Display) -> std::io::Error {
    io_error!(ErrorKind::InvalidData, err.to_string())
}

/// A writer for GraphML documents
#[derive(Debug, Clone)]
pub struct GraphMlWriter {
    graph_id: String,
    indent: Option<usize>,
}

impl Default for GraphMlWriter {
    fn default() -> Self {
        Self {
            graph_id: "G".to_string(),
            indent: Some(2),
        }
    }
}

impl GraphMlWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `id` attribute of the `<graph>` element (`G` by default)
    pub fn graph_id<S>(mut self, graph_id: S) -> Self
    where
        S: Into<String>,
    {
        self.graph_id = graph_id.into();
        self
    }

    /// Number of spaces per nesting level, or `None` to write everything on one line
    pub fn indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }
}

impl<G> GraphWriter<G> for GraphMlWriter
where
    G: EdgeListGraph,
    G::Vertex: Display,
{
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write,
    {
        let mut xml = match self.indent {
            Some(size) => Writer::new_with_indent(writer, b' ', size),
            None => Writer::new(writer),
        };

        let edge_default = if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        };

        write_event(
            &mut xml,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        write_event(
            &mut xml,
            Event::Start(
                BytesStart::new("graphml").with_attributes([("xmlns", GRAPHML_NAMESPACE)]),
            ),
        )?;
        write_event(
            &mut xml,
            Event::Start(BytesStart::new("graph").with_attributes([
                ("id", self.graph_id.as_str()),
                ("edgedefault", edge_default),
            ])),
        )?;

        for u in graph.vertices() {
            let id = u.to_string();
            write_event(
                &mut xml,
                Event::Empty(BytesStart::new("node").with_attributes([("id", id.as_str())])),
            )?;
        }

        for edge in graph.edges() {
            let source = edge.source().to_string();
            let target = edge.target().to_string();
            write_event(
                &mut xml,
                Event::Empty(BytesStart::new("edge").with_attributes([
                    ("source", source.as_str()),
                    ("target", target.as_str()),
                ])),
            )?;
        }

        write_event(&mut xml, Event::End(BytesEnd::new("graph")))?;
        write_event(&mut xml, Event::End(BytesEnd::new("graphml")))?;
        xml.into_inner().flush()
    }
}

fn write_event<W: Write>(xml: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    xml.write_event(event).map_err(invalid_data)
}

/// A reader for GraphML documents.
///
/// The `edgedefault` of the document must match the directedness of the graph type read into.
/// Edges may only reference declared nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphMlReader;

impl GraphMlReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

/// Returns the unescaped value of a required attribute
fn required_attribute(element: &BytesStart<'_>, name: &str) -> Result<String> {
    let attribute = element.try_get_attribute(name).map_err(invalid_data)?;
    let Some(attribute) = attribute else {
        return Err(io_error!(
            ErrorKind::InvalidData,
            format!(
                "<{}> is missing attribute `{name}`",
                String::from_utf8_lossy(element.name().as_ref())
            )
        ));
    };

    Ok(attribute.unescape_value().map_err(invalid_data)?.into_owned())
}

fn parse_vertex<V: FromStr>(id: &str) -> Result<V> {
    id.parse()
        .map_err(|_| io_error!(ErrorKind::InvalidData, format!("Cannot parse vertex `{id}`")))
}

impl<G> GraphReader<G> for GraphMlReader
where
    G: MutableGraph + Default,
    G::Vertex: FromStr,
    G::Edge: From<(G::Vertex, G::Vertex)>,
{
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead,
    {
        let mut graph = G::default();
        let mut xml = Reader::from_reader(reader);
        let mut buffer = Vec::new();

        // 0: before the first <graph>, 1: inside it, 2: after it
        let mut section = 0u8;
        let mut num_edges = 0usize;
        loop {
            match xml.read_event_into(&mut buffer).map_err(invalid_data)? {
                Event::Start(element) | Event::Empty(element) => match element.name().as_ref() {
                    b"graph" if section == 0 => {
                        let directed = match element
                            .try_get_attribute("edgedefault")
                            .map_err(invalid_data)?
                        {
                            Some(attr) => attr.unescape_value().map_err(invalid_data)? == "directed",
                            None => true,
                        };
                        raise_error_unless!(
                            directed == graph.is_directed(),
                            ErrorKind::InvalidData,
                            format!(
                                "Expected a {} graph",
                                if graph.is_directed() {
                                    "directed"
                                } else {
                                    "undirected"
                                }
                            )
                        );
                        section = 1;
                    }
                    b"node" if section == 1 => {
                        let id = required_attribute(&element, "id")?;
                        graph.add_vertex(parse_vertex(&id)?);
                    }
                    b"edge" if section == 1 => {
                        let source = parse_vertex(&required_attribute(&element, "source")?)?;
                        let target = parse_vertex(&required_attribute(&element, "target")?)?;
                        graph
                            .add_edge((source, target).into())
                            .map_err(invalid_data)?;
                        num_edges += 1;
                    }
                    _ => {}
                },
                Event::End(element) if section == 1 && element.name().as_ref() == b"graph" => {
                    section = 2;
                }
                Event::Eof => break,
                _ => {}
            }
            buffer.clear();
        }

        raise_error_unless!(
            section != 0,
            ErrorKind::InvalidData,
            "Document contains no <graph> element"
        );

        debug!("read GraphML graph with {num_edges} edges");
        Ok(graph)
    }
}
