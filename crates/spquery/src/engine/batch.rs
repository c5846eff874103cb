use spquery_core::{
    driver::{Batch, Merge, Method, Request, RequestId},
    plan::{Operation, QueryPlan},
    schema::app::Schema,
    Result,
};
use spquery_odata::Serializer;

/// Renders every operation of `plan` and describes which field of the
/// primary entity each follow-up populates.
pub(crate) fn assemble(schema: &Schema, plan: &QueryPlan) -> Result<Batch> {
    let serializer = Serializer::for_dialect(schema, plan.dialect);

    let mut requests = Vec::with_capacity(plan.follow_ups.len() + 1);
    let mut merges = Vec::with_capacity(plan.follow_ups.len());

    requests.push(render(&serializer, RequestId(0), &plan.primary)?);

    for (index, follow_up) in plan.follow_ups.iter().enumerate() {
        let id = RequestId(index + 1);
        requests.push(render(&serializer, id, &follow_up.operation)?);

        let field = schema.field(follow_up.field);

        merges.push(Merge {
            request: id,
            field: follow_up.field,
            field_name: field.app_name().to_string(),
            model: follow_up.operation.model,
        });
    }

    Ok(Batch { requests, merges })
}

fn render(serializer: &Serializer<'_>, id: RequestId, op: &Operation) -> Result<Request> {
    Ok(Request {
        id,
        method: Method::Get,
        dialect: op.dialect,
        url: serializer.serialize(op)?,
        encoded_url: serializer.serialize_encoded(op)?,
    })
}
