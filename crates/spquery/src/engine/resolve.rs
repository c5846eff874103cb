use crate::Query;

use indexmap::IndexSet;
use spquery_core::{
    err,
    plan::{Predicate, Sort},
    schema::app::{FieldId, FieldTy, Model, Schema},
    stmt::{Selection, Selector, Source},
    Error, Result,
};

/// A query with every logical name resolved against the registry.
#[derive(Debug)]
pub(crate) struct Resolved<'a> {
    pub(crate) model: &'a Model,

    pub(crate) source: Source,

    /// Normalized selection, keys included
    pub(crate) selection: Selection,

    /// Fields the query names explicitly. Only these constrain the choice of
    /// dialect; implicit keys and default sets do not.
    pub(crate) referenced: IndexSet<FieldId>,

    pub(crate) filter: Vec<Predicate>,

    pub(crate) order_by: Vec<Sort>,

    pub(crate) top: Option<u64>,

    pub(crate) skip: Option<u64>,

    /// True when the primary request is filtered, sorted or paged
    pub(crate) shaped: bool,
}

struct Resolver<'a> {
    schema: &'a Schema,
    referenced: IndexSet<FieldId>,
}

pub(crate) fn apply<'a>(schema: &'a Schema, query: &Query) -> Result<Resolved<'a>> {
    let Some(model) = schema.model_by_name(query.model()) else {
        return Err(err!("model `{}` is not registered", query.model()));
    };

    let directives = query.query_directives();
    let mut resolver = Resolver {
        schema,
        referenced: IndexSet::new(),
    };

    // `select`/`expand` directives fold into the same tree as the selectors
    let folded = directives
        .select
        .iter()
        .chain(&directives.expand)
        .map(|name| Selector::path(name));

    let mut selection = Selection::new(model.id);

    for selector in query.selectors().iter().cloned().chain(folded) {
        resolver.selector(&mut selection, &selector)?;
    }

    let filter = directives
        .filter
        .iter()
        .map(|filter| {
            Ok(Predicate {
                field: resolver.scalar(model, &filter.field)?,
                op: filter.op,
                value: filter.value.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let order_by = directives
        .order_by
        .iter()
        .map(|order_by| {
            Ok(Sort {
                field: resolver.scalar(model, &order_by.field)?,
                direction: order_by.direction,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    selection.ensure_key(schema);

    Ok(Resolved {
        model,
        source: query.source(),
        selection,
        referenced: resolver.referenced,
        filter,
        order_by,
        top: directives.top,
        skip: directives.skip,
        shaped: directives.shapes_primary(),
    })
}

impl Resolver<'_> {
    fn selector(&mut self, selection: &mut Selection, selector: &Selector) -> Result<()> {
        let schema = self.schema;
        let model = schema.model(selection.model);

        let Some(field) = model.field_by_name(selector.name()) else {
            return Err(Error::schema_mismatch(
                model.name.upper_camel_case(),
                selector.name(),
            ));
        };

        self.referenced.insert(field.id);

        match (&field.ty, selector) {
            (FieldTy::Primitive, Selector::Nested { selectors, .. }) if !selectors.is_empty() => {
                // A scalar has no properties to select into
                return Err(Error::schema_mismatch(
                    field.full_name(schema),
                    selectors[0].name(),
                ));
            }
            (FieldTy::Primitive, _) => {
                selection.insert_field(field.id);
            }
            (FieldTy::Expand(expand), Selector::Field(_)) => {
                // Bare: the default set, even when other selectors name
                // fields of the same expansion
                selection.expand_mut(field.id, expand.target).include_defaults = true;
            }
            (FieldTy::Expand(expand), Selector::Nested { selectors, .. }) => {
                let nested = selection.expand_mut(field.id, expand.target);

                for selector in selectors {
                    self.selector(nested, selector)?;
                }
            }
        }

        Ok(())
    }

    /// Resolve a filter or sort field. Both are evaluated by the backend on
    /// the root model, so they must name one of its scalars.
    fn scalar(&mut self, model: &Model, name: &str) -> Result<FieldId> {
        let Some(field) = model.field_by_name(name) else {
            return Err(Error::schema_mismatch(model.name.upper_camel_case(), name));
        };

        if field.is_expandable() {
            return Err(Error::not_expressible(format!(
                "cannot filter or sort on the expandable `{}`",
                field.full_name(self.schema)
            )));
        }

        self.referenced.insert(field.id);
        Ok(field.id)
    }
}
