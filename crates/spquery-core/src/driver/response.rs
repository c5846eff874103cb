use super::RequestId;
use indexmap::IndexMap;

/// Raw response bodies keyed by the request that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub bodies: IndexMap<RequestId, String>,
}

impl Response {
    pub fn insert(&mut self, request: RequestId, body: impl Into<String>) {
        self.bodies.insert(request, body.into());
    }

    pub fn body(&self, request: RequestId) -> Option<&str> {
        self.bodies.get(&request).map(String::as_str)
    }
}
