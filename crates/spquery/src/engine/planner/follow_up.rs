use super::{Planner, Projection, Strategy};

use spquery_core::{
    plan::{FieldPath, FollowUp, Operation},
    schema::app::{Expand, Field},
    stmt::Selection,
    Error, Result,
};
use tracing::debug;

impl Planner<'_> {
    /// Loads `field` through its own request.
    ///
    /// The follow-up is a sibling of the primary request: its shape depends
    /// only on the selection, never on data the primary request returns.
    /// Its results attach to the single entity the primary request loads.
    pub(super) fn plan_follow_up(
        &mut self,
        field: &Field,
        expand: &Expand,
        selection: &Selection,
    ) -> Result<()> {
        let schema = self.schema;

        if self.collection {
            return Err(Error::not_expressible(format!(
                "`{}` must be loaded with a separate request on {}, which is only possible below a single entity",
                field.full_name(schema),
                self.dialect
            )));
        }

        if self.shaped {
            return Err(Error::not_expressible(format!(
                "`{}` must be loaded with a separate request on {}, which cannot be combined with filtering, sorting or paging",
                field.full_name(schema),
                self.dialect
            )));
        }

        let Some(path) = expand.follow_up_path(self.dialect) else {
            return Err(Error::not_expressible(format!(
                "`{}` needs a separate request on {}, but has no request path there",
                field.full_name(schema),
                self.dialect
            )));
        };

        debug!(
            field = %field.full_name(schema),
            dialect = %self.dialect,
            "loading expandable through a follow-up request"
        );

        let target = schema.model(expand.target);
        let mut operation = Operation::new(self.dialect, target.id, path);

        if selection.is_default() {
            self.default_projection(target).apply(&mut operation);
        } else {
            let mut projection = Projection::default();

            if self.dialect.is_rest() {
                self.push_scalar(&mut projection, None, target.primary_key_field());
            }

            if selection.include_defaults {
                for id in self.default_field_ids(target) {
                    self.push_scalar(&mut projection, None, schema.field(id));
                }
            }

            for id in &selection.fields {
                self.push_scalar(&mut projection, None, schema.field(*id));
            }

            self.push_required(&mut projection, target);

            for (id, nested) in &selection.expand {
                let nested_field = schema.field(*id);
                let nested_expand = self.expand_of(nested_field)?;

                match self.strategy(nested_expand, 1) {
                    Strategy::Inline => {
                        self.plan_inline(&mut projection, FieldPath::single(*id), nested, 1)?;
                    }
                    Strategy::FollowUp => {
                        return Err(Error::not_expressible(format!(
                            "`{}` needs a separate request on {}, which is not possible inside the separate request for `{}`",
                            nested_field.full_name(schema),
                            self.dialect,
                            field.full_name(schema)
                        )));
                    }
                }
            }

            projection.apply(&mut operation);
        }

        self.follow_ups.push(FollowUp {
            field: field.id,
            operation,
        });

        Ok(())
    }
}
