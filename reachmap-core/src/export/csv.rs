use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Coordinate, Error, Minutes, Node, NodeCategory};

/// Column names, in order
pub const CSV_HEADER: [&str; 7] = [
    "name",
    "latitude",
    "longitude",
    "category",
    "lines",
    "travel_time",
    "transfer_count",
];

/// Joins line names in the `lines` column. Reading splits on the whole
/// separator, so a line name that itself contains `", "` comes back as two
/// lines; a bare `,` inside a name is kept.
pub const LINE_SEPARATOR: &str = ", ";

/// Spreadsheet applications need it to detect UTF-8
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Serialize, Deserialize)]
struct NodeRow {
    name: String,
    latitude: f64,
    longitude: f64,
    category: NodeCategory,
    lines: String,
    travel_time: Minutes,
    transfer_count: u32,
}

impl From<&Node> for NodeRow {
    fn from(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            latitude: node.latitude(),
            longitude: node.longitude(),
            category: node.category,
            lines: node.lines.iter().join(LINE_SEPARATOR),
            travel_time: node.travel_time,
            transfer_count: node.transfer_count,
        }
    }
}

impl TryFrom<NodeRow> for Node {
    type Error = Error;

    fn try_from(row: NodeRow) -> Result<Self, Self::Error> {
        let coordinate = Coordinate::new(row.latitude, row.longitude).ok_or_else(|| {
            Error::InvalidData(format!(
                "Row '{}' has invalid coordinate ({}, {})",
                row.name, row.latitude, row.longitude
            ))
        })?;

        let lines = row
            .lines
            .split(LINE_SEPARATOR)
            .map(str::trim)
            .filter(|line| !line.is_empty());

        Ok(Node::new(row.name, coordinate, row.category)
            .with_travel(row.travel_time, row.transfer_count)
            .with_lines(lines))
    }
}

/// Writes the header and one row per node.
///
/// The header is written even when `nodes` is empty.
pub fn write_nodes<W: Write>(writer: W, nodes: &[Node]) -> Result<(), Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for node in nodes {
        csv_writer.serialize(NodeRow::from(node))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Saves nodes as UTF-8 CSV with a byte order mark
pub fn save_nodes_csv(path: &Path, nodes: &[Node]) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to create '{}': {}", path.display(), e),
        )
    })?;
    let mut out = BufWriter::new(file);
    out.write_all(UTF8_BOM)?;
    write_nodes(&mut out, nodes)?;
    out.flush()?;
    Ok(())
}

/// Reads rows written by [`write_nodes`]. A leading byte order mark is
/// skipped. Node ids are not part of the table and come back empty.
pub fn read_nodes<R: Read>(mut reader: R) -> Result<Vec<Node>, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    csv::Reader::from_reader(text.as_bytes())
        .deserialize::<NodeRow>()
        .map(|row| Node::try_from(row?))
        .collect()
}

pub fn load_nodes_csv(path: &Path) -> Result<Vec<Node>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open '{}': {}", path.display(), e),
        )
    })?;
    read_nodes(file)
}
