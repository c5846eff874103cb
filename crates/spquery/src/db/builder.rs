use super::Db;
use crate::{engine::Engine, schema};

use indexmap::IndexMap;
use spquery_core::{
    driver::Connection,
    schema::{app, Name},
    Dialect, Error, Result,
};

use std::sync::Arc;

#[derive(Debug)]
pub struct Builder {
    /// Model definitions, in registration order (unresolved)
    models: Vec<schema::Model>,

    /// Try Graph before REST when a query states no preference
    graph_first: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            models: vec![],
            graph_first: true,
        }
    }
}

impl Builder {
    pub fn register(&mut self, model: schema::Model) -> &mut Self {
        self.models.push(model);
        self
    }

    /// Set whether Graph is preferred over REST. Defaults to `true`.
    pub fn graph_first(&mut self, graph_first: bool) -> &mut Self {
        self.graph_first = graph_first;
        self
    }

    /// Resolve the registered models into the immutable registry.
    pub fn build_app_schema(&self) -> Result<app::Schema> {
        let mut ids = IndexMap::new();

        for (index, model) in self.models.iter().enumerate() {
            if ids.insert(model.name.clone(), app::ModelId(index)).is_some() {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is registered more than once",
                    model.name.upper_camel_case()
                )));
            }
        }

        let models = self
            .models
            .iter()
            .enumerate()
            .map(|(index, model)| convert_model(model, app::ModelId(index), &ids))
            .collect::<Result<Vec<_>>>()?;

        app::Schema::from_models(models)
    }

    pub fn build(&mut self, connection: impl Connection) -> Result<Db> {
        let schema = self.build_app_schema()?;

        let preferred = if self.graph_first {
            Dialect::Graph
        } else {
            Dialect::Rest
        };

        Ok(Db {
            engine: Engine {
                schema: Arc::new(schema),
                preferred,
            },
            connection: Arc::new(connection),
        })
    }
}

/// Convert a `schema::Model` to an `app::Model` with its assigned `ModelId`
fn convert_model(
    model: &schema::Model,
    model_id: app::ModelId,
    ids: &IndexMap<Name, app::ModelId>,
) -> Result<app::Model> {
    let fields = model
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let ty = match &field.ty {
                schema::FieldTy::Primitive => app::FieldTy::Primitive,
                schema::FieldTy::Expand(expand) => {
                    let Some(target) = ids.get(&Name::new(&expand.target)) else {
                        return Err(Error::invalid_schema(format!(
                            "field `{}::{}` expands to `{}`, which is not registered",
                            model.name.upper_camel_case(),
                            field.name,
                            expand.target
                        )));
                    };

                    app::FieldTy::Expand(app::Expand {
                        target: *target,
                        collection: expand.collection,
                        separate_query: expand.separate_query,
                        rest_path: expand.rest_path.clone(),
                        graph_path: expand.graph_path.clone(),
                    })
                }
            };

            Ok(app::Field {
                id: model_id.field(index),
                name: app::FieldName {
                    app_name: field.name.clone(),
                    rest: field.rest.clone(),
                    graph: field.graph.clone(),
                },
                ty,
                primary_key: field.primary_key,
                default: field.default,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let Some(primary_key) = model.primary_key else {
        return Err(Error::invalid_schema(format!(
            "model `{}` has no primary key",
            model.name.upper_camel_case()
        )));
    };

    Ok(app::Model {
        id: model_id,
        name: model.name.clone(),
        fields,
        primary_key: model_id.field(primary_key),
        rest: convert_endpoint(model, model_id, model.rest.as_ref())?,
        graph: convert_endpoint(model, model_id, model.graph.as_ref())?,
    })
}

fn convert_endpoint(
    model: &schema::Model,
    model_id: app::ModelId,
    endpoint: Option<&schema::Endpoint>,
) -> Result<Option<app::Endpoint>> {
    let Some(endpoint) = endpoint else {
        return Ok(None);
    };

    // Field names are resolved within the model itself
    let field_id = |name: &String| {
        model
            .fields
            .iter()
            .position(|field| field.name == *name)
            .map(|index| model_id.field(index))
            .ok_or_else(|| {
                Error::invalid_schema(format!(
                    "endpoint of `{}` names unknown field `{name}`",
                    model.name.upper_camel_case()
                ))
            })
    };

    let default_select = match &endpoint.default_select {
        schema::DefaultSelect::Implicit => app::DefaultSelect::Implicit,
        schema::DefaultSelect::Declared => app::DefaultSelect::Declared,
        schema::DefaultSelect::Fields(fields) => {
            app::DefaultSelect::Fields(fields.iter().map(field_id).collect::<Result<_>>()?)
        }
    };

    Ok(Some(app::Endpoint {
        entity: endpoint.entity.clone(),
        collection: endpoint.collection.clone(),
        default_select,
        required: endpoint
            .required
            .iter()
            .map(field_id)
            .collect::<Result<_>>()?,
    }))
}
