use crate::engine::resolve::Resolved;

use spquery_core::{schema::app::Schema, Dialect, Error, Result};
use tracing::debug;

/// Picks the dialect for the whole plan.
///
/// Each explicitly referenced field narrows the set of candidate dialects,
/// starting from the dialects that can serve the root model in the
/// requested shape. The preferred dialect wins when it survives.
pub(super) fn choose(schema: &Schema, resolved: &Resolved<'_>, preferred: Dialect) -> Result<Dialect> {
    let model = resolved.model;
    let mut candidates = model.dialects(resolved.source);

    if candidates.is_empty() {
        return Err(Error::not_expressible(format!(
            "`{}` cannot be queried as {} on any dialect",
            model.name.upper_camel_case(),
            if resolved.source.is_collection() {
                "a collection"
            } else {
                "an entity"
            }
        )));
    }

    for id in &resolved.referenced {
        let field = schema.field(*id);

        if field.dialects().is_empty() {
            return Err(Error::unsupported_property(
                schema.model(id.model).name.upper_camel_case(),
                field.app_name(),
            ));
        }
    }

    for id in &resolved.referenced {
        let field = schema.field(*id);
        let supported = field.dialects();
        let narrowed = candidates.intersection(supported);

        if narrowed.is_empty() {
            return Err(Error::split_dialect(format!(
                "`{}` is only served by {supported}, but the rest of the query needs {candidates}",
                field.full_name(schema)
            )));
        }

        candidates = narrowed;
    }

    if candidates.contains(preferred) {
        return Ok(preferred);
    }

    let fallback = preferred.other();
    debug!(
        model = %model.name.upper_camel_case(),
        %preferred,
        %fallback,
        "query is not expressible on the preferred dialect, falling back"
    );

    Ok(fallback)
}
