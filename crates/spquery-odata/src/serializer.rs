#[macro_use]
mod fmt;
use fmt::ToOData;

mod delim;
use delim::{Comma, Delimited, Slash};

mod flavor;
use flavor::Flavor;

// Fragment serializers
mod clause;
mod name;
mod value;

use spquery_core::{
    plan::Operation,
    schema::app::Schema,
    Dialect, Error, Result,
};

/// Renders plan operations into request urls for one dialect.
///
/// Rendering is pure: the same operation always yields byte-identical
/// output, which callers may compare or cache.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Registry used to map fields to their wire names
    schema: &'a Schema,

    /// The flavor handles the differences between the REST and Graph
    /// surfaces.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized clause value
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    /// Serialize an operation to its canonical url, with `,` and `/` left
    /// literal in query values.
    pub fn serialize(&self, op: &Operation) -> Result<String> {
        let (path, params) = self.render(op)?;
        let url = join(path, &params, |value| value.to_string());
        tracing::trace!(dialect = %self.dialect(), %url, "rendered request");
        Ok(url)
    }

    /// Serialize an operation with every query value percent-encoded
    /// (RFC 3986, so a space becomes `%20`), ready to be put on the wire.
    pub fn serialize_encoded(&self, op: &Operation) -> Result<String> {
        let (path, params) = self.render(op)?;
        Ok(join(path, &params, |value| urlencoding::encode(value).into_owned()))
    }

    pub fn dialect(&self) -> Dialect {
        self.flavor.dialect()
    }

    fn render<'op>(&self, op: &'op Operation) -> Result<(&'op str, Vec<(&'static str, String)>)> {
        if op.dialect != self.dialect() {
            return Err(Error::invalid_plan(format!(
                "{} operation handed to the {} serializer",
                op.dialect,
                self.dialect()
            )));
        }

        let mut params = Vec::with_capacity(op.clauses.len());

        for clause in &op.clauses {
            if params.iter().any(|(name, _)| *name == clause.name()) {
                return Err(Error::invalid_plan(format!(
                    "operation carries more than one `{}` clause",
                    clause.name()
                )));
            }

            let mut value = String::new();
            let mut f = Formatter {
                serializer: self,
                dst: &mut value,
            };

            fmt!(&mut f, clause);
            params.push((clause.name(), value));
        }

        Ok((op.path.as_str(), params))
    }
}

fn join(path: &str, params: &[(&str, String)], encode: impl Fn(&str) -> String) -> String {
    let mut url = path.to_string();
    let mut sep = '?';

    for (name, value) in params {
        url.push(sep);
        url.push_str(name);
        url.push('=');
        url.push_str(&encode(value));
        sep = '&';
    }

    url
}
