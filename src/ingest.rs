/*
Implements readers producing a graph from:
 - whitespace-delimited edge lists (one edge per line, two integer labels)
 - CSV tables (source/target columns selected by name)
 - DIMACS files (p edge n m / e a b, 1-based)
Labels are mapped to contiguous vertex ids in order of first appearance.
*/
use std::collections::HashMap;
use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till};
use nom::character::complete::{char, space0, space1};
use nom::multi::separated_list0;
use nom::sequence::delimited;

use crate::error::Error;
use crate::graph::{CompactGraph, GraphInstance, VertexId};

/// default name of the source column of CSV files
pub const DEFAULT_SOURCE_COLUMN:&str = "node_1";
/// default name of the target column of CSV files
pub const DEFAULT_TARGET_COLUMN:&str = "node_2";

/** supported instance formats */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphFormat {
    /// whitespace-delimited edge list
    EdgeList,
    /// comma separated table with a header row
    Csv {
        /// column holding the first endpoint
        source: String,
        /// column holding the second endpoint
        target: String,
    },
    /// DIMACS graph (col/clq)
    Dimacs,
}

impl GraphFormat {
    /** format from its command line name ("edgelist", "csv", "dimacs" or "auto").
"auto" picks the format from the file extension.

# Errors
 - unknown format name
    */
    pub fn from_name(name:&str, filename:&str) -> Result<Self, Error> {
        match name {
            "edgelist" => Ok(GraphFormat::EdgeList),
            "csv" => Ok(GraphFormat::default_csv()),
            "dimacs" => Ok(GraphFormat::Dimacs),
            "auto" => Ok(Self::from_extension(filename)),
            _ => Err(Error::InvalidArgument(format!(
                "instance type unknown {} (valid: 'auto', 'edgelist', 'csv', 'dimacs')", name
            ))),
        }
    }

    /// guesses the format from the extension (.csv, .col/.clq, anything else is an edge list)
    pub fn from_extension(filename:&str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".csv") {
            GraphFormat::default_csv()
        } else if lower.ends_with(".col") || lower.ends_with(".clq") {
            GraphFormat::Dimacs
        } else {
            GraphFormat::EdgeList
        }
    }

    /// CSV format with the default column names
    pub fn default_csv() -> Self {
        GraphFormat::Csv {
            source: DEFAULT_SOURCE_COLUMN.to_string(),
            target: DEFAULT_TARGET_COLUMN.to_string(),
        }
    }
}

/** reads a graph from a file

# Errors
 - the file cannot be read, or does not follow the format
*/
pub fn load_graph(filename:&str, format:&GraphFormat) -> Result<CompactGraph, Error> {
    let content = fs::read_to_string(filename)
        .map_err(|source| Error::Io { path: filename.to_string(), source })?
        .replace("\r", "");
    match format {
        GraphFormat::EdgeList => parse_edge_list(filename, &content),
        GraphFormat::Csv { source, target } => parse_csv(filename, &content, source, target),
        GraphFormat::Dimacs => parse_dimacs(filename, &content),
    }
}

/** maps external labels to contiguous vertex ids and collects edges */
#[derive(Debug, Default)]
struct GraphBuilder {
    /// ids[label]: vertex id of this label
    ids: HashMap<i64, VertexId>,
    /// labels[id]: label of this vertex
    labels: Vec<i64>,
    /// collected edges (vertex ids)
    edges: Vec<(VertexId,VertexId)>,
    /// number of self-loops found in the input
    nb_self_loops: usize,
}

impl GraphBuilder {
    fn vertex(&mut self, label:i64) -> VertexId {
        let labels = &mut self.labels;
        *self.ids.entry(label).or_insert_with(|| {
            labels.push(label);
            labels.len() - 1
        })
    }

    /// registers both endpoints, self-loops are skipped
    fn add(&mut self, a:i64, b:i64) {
        let u = self.vertex(a);
        let v = self.vertex(b);
        if u == v {
            self.nb_self_loops += 1;
        } else {
            self.edges.push((u,v));
        }
    }

    fn build(self, filename:&str) -> Result<CompactGraph, Error> {
        if self.nb_self_loops > 0 {
            println!("{}: skipped {} self-loops", filename, self.nb_self_loops);
        }
        let mut res = CompactGraph::with_labels(self.labels);
        for (u,v) in self.edges {
            res.add_edge(u, v)?;
        }
        Ok(res)
    }
}

fn parse_error(filename:&str, line:usize, reason:String) -> Error {
    Error::Parse { path: filename.to_string(), line, reason }
}

/// reads two integers separated by spaces (leading spaces allowed)
fn read_two_integers(s:&str) -> IResult<&str, (u64,u64)> {
    let (s,_) = space0(s)?;
    let (s,a) = nom::character::complete::u64(s)?;
    let (s,_) = space1(s)?;
    let (s,b) = nom::character::complete::u64(s)?;
    Ok((s,(a,b)))
}

/// reads two (possibly negative) node labels separated by spaces
fn read_two_labels(s:&str) -> IResult<&str, (i64,i64)> {
    let (s,_) = space0(s)?;
    let (s,a) = nom::character::complete::i64(s)?;
    let (s,_) = space1(s)?;
    let (s,b) = nom::character::complete::i64(s)?;
    Ok((s,(a,b)))
}

/// remaining input after a value must be empty or start with a space
fn ends_token(s:&str) -> bool {
    s.chars().next().map_or(true, char::is_whitespace)
}

/** parses an edge list: one edge per line, `#` starts a comment, extra columns are ignored

# Errors
 - a non-empty line that does not start with two integers
*/
pub fn parse_edge_list(filename:&str, content:&str) -> Result<CompactGraph, Error> {
    let mut builder = GraphBuilder::default();
    for (i,raw_line) in content.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or("");
        if line.trim().is_empty() { continue; }
        match read_two_labels(line) {
            Ok((remaining,(a,b))) if ends_token(remaining) => builder.add(a, b),
            _ => return Err(parse_error(
                filename, i+1, format!("expected two integer node ids, found '{}'", raw_line)
            )),
        }
    }
    builder.build(filename)
}

/// reads one CSV field (possibly double-quoted)
fn csv_field(s:&str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till(|c| c == '"'), char('"')),
        take_till(|c| c == ','),
    ))(s)
}

/// splits a CSV line into trimmed fields
pub fn read_csv_line(s:&str) -> IResult<&str, Vec<&str>> {
    let (remaining, fields) = separated_list0(char(','), csv_field)(s)?;
    Ok((remaining, fields.into_iter().map(str::trim).collect()))
}

/** parses a CSV table with a header row. Edges are read from the `source` and `target` columns.

# Errors
 - missing header or column, non-integer node id
*/
pub fn parse_csv(filename:&str, content:&str, source:&str, target:&str) -> Result<CompactGraph, Error> {
    let mut lines = content.lines().enumerate().filter(|(_,l)| !l.trim().is_empty());
    let header = match lines.next() {
        None => return Err(parse_error(filename, 1, "missing header".to_string())),
        Some((_,h)) => read_csv_line(h).map(|r| r.1).unwrap_or_default(),
    };
    let column = |name:&str| header.iter().position(|c| *c == name)
        .ok_or_else(|| Error::MissingColumn { path: filename.to_string(), column: name.to_string() });
    let source_index = column(source)?;
    let target_index = column(target)?;
    let mut builder = GraphBuilder::default();
    for (i,line) in lines {
        let fields = match read_csv_line(line) {
            Ok(("", fields)) => fields,
            _ => return Err(parse_error(filename, i+1, format!("malformed row '{}'", line))),
        };
        let read = |index:usize| fields.get(index)
            .and_then(|f| f.parse::<i64>().ok())
            .ok_or_else(|| parse_error(filename, i+1, format!("expected integer node ids, found '{}'", line)));
        builder.add(read(source_index)?, read(target_index)?);
    }
    builder.build(filename)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (u64,u64)> {
    let (remaining,_) = alt((tag("p edge "), tag("p col ")))(s)?;
    read_two_integers(remaining)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (u64,u64)> {
    let (remaining,_) = tag("e ")(s)?;
    read_two_integers(remaining)
}

/** parses a DIMACS graph. Vertex i of the file becomes vertex i-1 (label i).

# Errors
 - missing or duplicated header, malformed edge line, vertex outside [1,n]
*/
pub fn parse_dimacs(filename:&str, content:&str) -> Result<CompactGraph, Error> {
    let mut graph:Option<CompactGraph> = None;
    let mut m = 0;
    let mut nb_edge_lines = 0;
    for (i,line) in content.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('c') { continue; }
        if line.starts_with('p') {
            let (n,nb_edges) = match read_header(line) {
                Ok((remaining, h)) if graph.is_none() && ends_token(remaining) => h,
                _ => return Err(parse_error(filename, i+1, format!("invalid header '{}'", line))),
            };
            graph = Some(CompactGraph::with_labels((1..=n).map(|i| i as i64).collect()));
            m = nb_edges as usize;
            continue;
        }
        let g = match graph.as_mut() {
            None => return Err(parse_error(filename, i+1, "edge before the 'p' header".to_string())),
            Some(g) => g,
        };
        let (a,b) = match read_edge(line) {
            Ok((remaining, e)) if ends_token(remaining) => e,
            _ => return Err(parse_error(filename, i+1, format!("invalid edge line '{}'", line))),
        };
        let n = g.nb_vertices() as u64;
        if a == 0 || b == 0 || a > n || b > n {
            return Err(parse_error(filename, i+1, format!("vertex outside [1,{}] in '{}'", n, line)));
        }
        nb_edge_lines += 1;
        if a != b {
            g.add_edge((a-1) as VertexId, (b-1) as VertexId)?;
        }
    }
    let res = graph.ok_or_else(|| parse_error(filename, 1, "missing 'p' header".to_string()))?;
    if nb_edge_lines != m && 2*nb_edge_lines != m {
        println!("{}: header announces {} edges, found {} edge lines", filename, m, nb_edge_lines);
    }
    Ok(res)
}
