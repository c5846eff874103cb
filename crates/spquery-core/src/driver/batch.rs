use crate::{schema::app::FieldId, schema::app::ModelId, Dialect};
use std::fmt;

/// Rendered requests for one logical query, primary request first.
///
/// Requests are siblings: none depends on another's response to be built,
/// so they may be issued concurrently or as one network batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub requests: Vec<Request>,

    /// One entry per follow-up request
    pub merges: Vec<Merge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: RequestId,

    pub method: Method,

    pub dialect: Dialect,

    /// Path and query string with `,` and `/` left literal
    pub url: String,

    /// Same request with query values percent-encoded for transport
    pub encoded_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
}

/// How a follow-up's results are spliced back into the parent object graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
    /// The follow-up request
    pub request: RequestId,

    /// Expandable field populated on the parent
    pub field: FieldId,

    /// Logical name of `field`
    pub field_name: String,

    /// Model of the follow-up's items
    pub model: ModelId,
}

impl Batch {
    pub fn primary(&self) -> &Request {
        &self.requests[0]
    }

    pub fn follow_ups(&self) -> &[Request] {
        &self.requests[1..]
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Canonical urls of every request, primary first.
    pub fn urls(&self) -> Vec<&str> {
        self.requests.iter().map(|req| req.url.as_str()).collect()
    }
}

impl Request {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn encoded_url(&self) -> &str {
        &self.encoded_url
    }
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
