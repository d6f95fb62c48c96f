//! Network analysis output requests and the analysis routine itself.
//!
//! Requests name the quantities to report: `NODE <n>` for a node, `ELEM
//! <id>` for an element such as the surge tank. The analysis currently
//! returns fixed demonstration values for every request; a transient solver
//! would eventually replace [`analyze`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

// Demonstration values reported until a real solver is wired in.
const NODE_FLOW: f64 = 100.0;
const NODE_HEAD: f64 = 50.0;
const NODE_PRESSURE: f64 = 300.0;
const ELEMENT_FLOW: f64 = 200.0;
const ELEMENT_ELEVATION: f64 = 30.0;

/// Errors raised while parsing an output request line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestParseError {
    #[error("request '{0}' is missing an id after the keyword")]
    MissingId(String),
    #[error("node number '{0}' is not an integer")]
    InvalidNodeNumber(String),
}

/// A single output request, keyed the way results are keyed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum OutputRequest {
    Node(i64),
    Element(String),
}

impl OutputRequest {
    /// Parse one request line.
    ///
    /// Lines starting with `NODE` or `ELEM` become requests; anything else
    /// is ignored and parses to `None`. A `NODE`/`ELEM` keyword without an
    /// id, or a node id that is not an integer, is an error.
    pub fn parse(line: &str) -> Result<Option<Self>, RequestParseError> {
        let trimmed = line.trim();
        let mut tokens = trimmed.split_whitespace();

        match tokens.next() {
            Some("NODE") => {
                let id = tokens
                    .next()
                    .ok_or_else(|| RequestParseError::MissingId(trimmed.to_string()))?;
                let number = id
                    .parse::<i64>()
                    .map_err(|_| RequestParseError::InvalidNodeNumber(id.to_string()))?;
                Ok(Some(OutputRequest::Node(number)))
            }
            Some("ELEM") => {
                let id = tokens
                    .next()
                    .ok_or_else(|| RequestParseError::MissingId(trimmed.to_string()))?;
                Ok(Some(OutputRequest::Element(id.to_string())))
            }
            _ => Ok(None),
        }
    }

    /// The result-mapping key, matching how the request was written
    /// (`10` for `NODE 10`, `ST` for `ELEM ST`).
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            OutputRequest::Node(number) => number.to_string(),
            OutputRequest::Element(id) => id.clone(),
        }
    }

    /// The output columns reported for this request.
    #[must_use]
    pub fn column_names(&self) -> &'static str {
        match self {
            OutputRequest::Node(_) => "Q HEAD PRESSURE",
            OutputRequest::Element(_) => "Q ELEV",
        }
    }
}

impl fmt::Display for OutputRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputRequest::Node(number) => write!(f, "NODE {number}"),
            OutputRequest::Element(id) => write!(f, "ELEM {id}"),
        }
    }
}

/// Result record for one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultRecord {
    Node {
        #[serde(rename = "Q")]
        q: f64,
        #[serde(rename = "HEAD")]
        head: f64,
        #[serde(rename = "PRESSURE")]
        pressure: f64,
    },
    Element {
        #[serde(rename = "Q")]
        q: f64,
        #[serde(rename = "ELEV")]
        elev: f64,
    },
}

/// Results keyed by request, in deterministic order (nodes first, then
/// elements, each sorted by id).
pub type AnalysisResults = BTreeMap<OutputRequest, ResultRecord>;

/// Run the analysis for the given requests.
///
/// Values are fixed and independent of the stored network; duplicate
/// requests collapse onto one result entry. An empty request list yields an
/// empty mapping.
#[must_use]
pub fn analyze(requests: &[OutputRequest]) -> AnalysisResults {
    let mut results = AnalysisResults::new();

    for request in requests {
        let record = match request {
            OutputRequest::Node(_) => ResultRecord::Node {
                q: NODE_FLOW,
                head: NODE_HEAD,
                pressure: NODE_PRESSURE,
            },
            OutputRequest::Element(_) => ResultRecord::Element {
                q: ELEMENT_FLOW,
                elev: ELEMENT_ELEVATION,
            },
        };
        results.insert(request.clone(), record);
    }

    results
}

/// Parse raw request lines and analyze whatever parses as a request.
///
/// Non-request lines are skipped; malformed `NODE`/`ELEM` lines abort with
/// the parse error.
pub fn analyze_lines<S: AsRef<str>>(lines: &[S]) -> Result<AnalysisResults, RequestParseError> {
    let mut requests = Vec::new();
    for line in lines {
        if let Some(request) = OutputRequest::parse(line.as_ref())? {
            requests.push(request);
        }
    }
    Ok(analyze(&requests))
}

/// The raw result mapping as JSON, keyed like the original dump
/// (`{"10": {"Q": 100.0, ...}, "ST": {...}}`).
#[must_use]
pub fn results_json(results: &AnalysisResults) -> Value {
    let mut map = Map::new();
    for (request, record) in results {
        map.insert(
            request.key(),
            serde_json::to_value(record).unwrap_or(Value::Null),
        );
    }
    Value::Object(map)
}
