use super::{Comma, Delimited, Formatter, ToOData};
use crate::serializer::name::WireName;

use spquery_core::{
    plan::{Clause, FieldPath, Predicate, Sort},
    Error, Result,
};

impl ToOData for &Clause {
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        use std::fmt::Write;

        match self {
            Clause::Select(paths) => {
                if paths.is_empty() {
                    return Err(Error::invalid_plan("`$select` with no fields"));
                }

                fmt!(f, Comma(paths));
            }
            Clause::Expand(paths) => {
                if paths.is_empty() {
                    return Err(Error::invalid_plan("`$expand` with no fields"));
                }

                for path in paths {
                    verify_expand(path, f)?;
                }

                fmt!(f, Comma(paths));
            }
            Clause::Filter(predicates) => {
                if predicates.is_empty() {
                    return Err(Error::invalid_plan("`$filter` with no predicates"));
                }

                fmt!(f, Delimited(predicates, " and "));
            }
            Clause::OrderBy(sorts) => {
                if sorts.is_empty() {
                    return Err(Error::invalid_plan("`$orderby` with no keys"));
                }

                fmt!(f, Comma(sorts));
            }
            Clause::Top(n) | Clause::Skip(n) => {
                let _ = write!(f.dst, "{n}");
            }
        }

        Ok(())
    }
}

impl ToOData for &Predicate {
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, WireName(self.field), " ", self.op.keyword(), " ", &self.value);
        Ok(())
    }
}

impl ToOData for &Sort {
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, WireName(self.field), " ", self.direction.keyword());
        Ok(())
    }
}

/// Every step of an expand path must be expandable, and the path must fit
/// the dialect's inline expansion limits.
fn verify_expand(path: &FieldPath, f: &Formatter<'_>) -> Result<()> {
    let dialect = f.serializer.dialect();
    let capability = dialect.capability();
    let schema = f.serializer.schema;

    if !capability.can_expand_at(path.len()) {
        return Err(Error::invalid_plan(format!(
            "{dialect} cannot expand {} levels in one request",
            path.len()
        )));
    }

    for step in path.iter() {
        let field = schema.field(step);

        let Some(expand) = field.ty.as_expand() else {
            return Err(Error::invalid_plan(format!(
                "`{}` is not expandable",
                field.full_name(schema)
            )));
        };

        if expand.collection && !capability.expand_collections {
            return Err(Error::invalid_plan(format!(
                "{dialect} cannot expand the collection `{}` inline",
                field.full_name(schema)
            )));
        }
    }

    Ok(())
}
