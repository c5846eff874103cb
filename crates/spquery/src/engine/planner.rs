mod dialect;
mod follow_up;
mod projection;
use projection::Projection;

use super::resolve::Resolved;

use spquery_core::{
    plan::{Clause, FieldPath, FollowUp, Operation, QueryPlan},
    schema::app::{DefaultSelect, Expand, Field, FieldId, Model, Schema},
    stmt::Selection,
    Dialect, Error, Result,
};

#[derive(Debug)]
struct Planner<'a> {
    schema: &'a Schema,

    /// Dialect every operation of the plan targets
    dialect: Dialect,

    /// True when the primary request is filtered, sorted or paged
    shaped: bool,

    /// True when the primary request loads a collection. Follow-ups are
    /// only possible below a single entity.
    collection: bool,

    /// Follow-up requests, in declaration order of the fields they load
    follow_ups: Vec<FollowUp>,
}

/// How an expandable field is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// `$expand` on the same request
    Inline,

    /// A separate request
    FollowUp,
}

pub(crate) fn apply(schema: &Schema, resolved: Resolved<'_>, preferred: Dialect) -> Result<QueryPlan> {
    let dialect = dialect::choose(schema, &resolved, preferred)?;
    let model = resolved.model;

    let Some(path) = model
        .endpoint(dialect)
        .and_then(|endpoint| endpoint.path(resolved.source))
    else {
        return Err(Error::invalid_plan(format!(
            "`{}` has no {dialect} endpoint for the chosen dialect",
            model.name.upper_camel_case()
        )));
    };

    let mut planner = Planner {
        schema,
        dialect,
        shaped: resolved.shaped,
        collection: resolved.source.is_collection(),
        follow_ups: vec![],
    };

    let mut primary = Operation::new(dialect, model.id, path);
    planner.plan_root(model, &resolved.selection)?.apply(&mut primary);

    if !resolved.filter.is_empty() {
        primary.push(Clause::Filter(resolved.filter));
    }

    if !resolved.order_by.is_empty() {
        primary.push(Clause::OrderBy(resolved.order_by));
    }

    if let Some(top) = resolved.top {
        primary.push(Clause::Top(top));
    }

    if let Some(skip) = resolved.skip {
        primary.push(Clause::Skip(skip));
    }

    Ok(QueryPlan {
        dialect,
        primary,
        follow_ups: planner.follow_ups,
    })
}

impl Planner<'_> {
    /// Projection of the primary request: the key, then scalars and
    /// expandables in declaration order, then the endpoint's required
    /// fields.
    fn plan_root(&mut self, model: &Model, selection: &Selection) -> Result<Projection> {
        if selection.is_default() {
            return Ok(self.default_projection(model));
        }

        let mut projection = Projection::default();
        self.push_scalar(&mut projection, None, model.primary_key_field());

        for field in &model.fields {
            if field.id != model.primary_key && selection.fields.contains(&field.id) {
                self.push_scalar(&mut projection, None, field);
            }
        }

        for field in &model.fields {
            let Some(nested) = selection.expand.get(&field.id) else {
                continue;
            };

            let expand = self.expand_of(field)?;

            match self.strategy(expand, 1) {
                Strategy::Inline => {
                    self.plan_inline(&mut projection, FieldPath::single(field.id), nested, 1)?;
                }
                Strategy::FollowUp => {
                    if nested.is_default() {
                        projection.select(FieldPath::single(field.id));
                    }

                    self.plan_follow_up(field, expand, nested)?;
                }
            }
        }

        self.push_required(&mut projection, model);
        Ok(projection)
    }

    /// Renders an inline expansion at `path`, `depth` levels below the
    /// request root.
    fn plan_inline(
        &self,
        projection: &mut Projection,
        path: FieldPath,
        selection: &Selection,
        depth: usize,
    ) -> Result<()> {
        projection.expand(path.clone());

        if selection.is_default() {
            projection.select(path);
            return Ok(());
        }

        if selection.include_defaults {
            let model = self.schema.model(selection.model);

            for field in self.default_field_ids(model) {
                self.push_scalar(projection, Some(&path), self.schema.field(field));
            }
        }

        for field in &selection.fields {
            self.push_scalar(projection, Some(&path), self.schema.field(*field));
        }

        for (field, nested) in &selection.expand {
            let field = self.schema.field(*field);
            let expand = self.expand_of(field)?;

            match self.strategy(expand, depth + 1) {
                Strategy::Inline => {
                    self.plan_inline(projection, path.child(field.id), nested, depth + 1)?;
                }
                Strategy::FollowUp => {
                    let parent = self.schema.field(path.0[path.len() - 1]);

                    return Err(Error::not_expressible(format!(
                        "`{}` needs a separate request on {}, which is not possible inside the expansion of `{}`",
                        field.full_name(self.schema),
                        self.dialect,
                        parent.full_name(self.schema)
                    )));
                }
            }
        }

        Ok(())
    }

    /// Projection used when nothing is selected explicitly. REST lists the
    /// key first, Graph after the default fields.
    fn default_projection(&self, model: &Model) -> Projection {
        let mut projection = Projection::default();

        let default_select = model.endpoint(self.dialect).map(|e| &e.default_select);

        if let Some(DefaultSelect::Implicit) = default_select {
            return projection;
        }

        if self.dialect.is_rest() {
            self.push_scalar(&mut projection, None, model.primary_key_field());
        }

        for field in self.default_field_ids(model) {
            projection.select(FieldPath::single(field));
        }

        self.push_scalar(&mut projection, None, model.primary_key_field());
        self.push_required(&mut projection, model);
        projection
    }

    /// The model's default field set on the current dialect. An endpoint
    /// that leaves the set to the server falls back to the fields flagged
    /// as defaults, so the set can still be named next to explicit fields.
    fn default_field_ids(&self, model: &Model) -> Vec<FieldId> {
        match model.endpoint(self.dialect).map(|e| &e.default_select) {
            Some(DefaultSelect::Fields(fields)) => fields.clone(),
            _ => model
                .default_fields(self.dialect)
                .map(Field::id)
                .collect(),
        }
    }

    /// Selects a scalar, skipping fields the dialect does not serve. Such
    /// fields only show up here when added implicitly, e.g. a nested key.
    fn push_scalar(&self, projection: &mut Projection, prefix: Option<&FieldPath>, field: &Field) {
        if !field.supports(self.dialect) {
            return;
        }

        let path = match prefix {
            Some(prefix) => prefix.child(field.id),
            None => FieldPath::single(field.id),
        };

        projection.select(path);
    }

    fn push_required(&self, projection: &mut Projection, model: &Model) {
        let Some(endpoint) = model.endpoint(self.dialect) else {
            return;
        };

        for field in &endpoint.required {
            projection.select(FieldPath::single(*field));
        }
    }

    fn strategy(&self, expand: &Expand, depth: usize) -> Strategy {
        let capability = self.dialect.capability();

        if self.dialect.is_rest() && expand.separate_query {
            Strategy::FollowUp
        } else if expand.collection && !capability.expand_collections {
            Strategy::FollowUp
        } else if !capability.can_expand_at(depth) {
            Strategy::FollowUp
        } else {
            Strategy::Inline
        }
    }

    fn expand_of<'f>(&self, field: &'f Field) -> Result<&'f Expand> {
        field.ty.as_expand().ok_or_else(|| {
            Error::invalid_plan(format!(
                "`{}` is selected as an expansion but is a scalar",
                field.full_name(self.schema)
            ))
        })
    }
}
