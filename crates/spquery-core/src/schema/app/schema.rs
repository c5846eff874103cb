use super::{DefaultSelect, Field, FieldId, FieldTy, Model, ModelId};
use crate::{schema::Name, Dialect, Error, Result};

use indexmap::{IndexMap, IndexSet};

#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    /// Builds a schema from resolved models, verifying that the registry is
    /// internally consistent.
    pub fn from_models(models: impl IntoIterator<Item = Model>) -> Result<Self> {
        let schema = Schema {
            models: models.into_iter().map(|model| (model.id, model)).collect(),
        };

        schema.verify()?;
        Ok(schema)
    }

    /// Get a field by ID
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    /// Find a model by name. `TermStore` and `term_store` name the same
    /// model.
    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        let name = Name::new(name);
        self.models().find(|model| model.name == name)
    }

    fn verify(&self) -> Result<()> {
        let mut names = IndexSet::new();

        for model in self.models() {
            if !names.insert(model.name.upper_camel_case()) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is registered more than once",
                    model.name.upper_camel_case()
                )));
            }

            self.verify_model(model)?;
        }

        Ok(())
    }

    fn verify_model(&self, model: &Model) -> Result<()> {
        let mut field_names = IndexSet::new();
        let full_name = |field: &Field| {
            format!("{}::{}", model.name.upper_camel_case(), field.name.app_name)
        };

        for (index, field) in model.fields.iter().enumerate() {
            if field.id != model.id.field(index) {
                return Err(Error::invalid_schema(format!(
                    "field `{}` has a mismatched id {:?}",
                    full_name(field),
                    field.id
                )));
            }

            if !field_names.insert(field.name.app_name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "field `{}` is declared more than once",
                    full_name(field)
                )));
            }

            if let FieldTy::Expand(expand) = &field.ty {
                if !self.models.contains_key(&expand.target) {
                    return Err(Error::invalid_schema(format!(
                        "field `{}` expands to a model that was not registered",
                        full_name(field)
                    )));
                }

                if expand.separate_query && expand.rest_path.is_none() {
                    return Err(Error::invalid_schema(format!(
                        "field `{}` requires a separate query but declares no REST path",
                        full_name(field)
                    )));
                }
            }
        }

        if model.fields.iter().filter(|field| field.primary_key).count() > 1 {
            return Err(Error::invalid_schema(format!(
                "model `{}` declares more than one key field",
                model.name.upper_camel_case()
            )));
        }

        let Some(key) = model.fields.get(model.primary_key.index) else {
            return Err(Error::invalid_schema(format!(
                "model `{}` has no primary key",
                model.name.upper_camel_case()
            )));
        };

        if !key.primary_key || key.is_expandable() {
            return Err(Error::invalid_schema(format!(
                "field `{}` is not a scalar key field",
                full_name(key)
            )));
        }

        for dialect in Dialect::ALL {
            let Some(endpoint) = model.endpoint(dialect) else {
                continue;
            };

            if !key.supports(dialect) {
                return Err(Error::invalid_schema(format!(
                    "key `{}` is not served by {dialect}, but the model has a {dialect} endpoint",
                    full_name(key)
                )));
            }

            let defaults = match &endpoint.default_select {
                DefaultSelect::Fields(fields) => &fields[..],
                _ => &[],
            };

            for field in endpoint.required.iter().chain(defaults) {
                let supported = model
                    .fields
                    .get(field.index)
                    .filter(|_| field.model == model.id)
                    .map(|field| field.supports(dialect) && !field.is_expandable())
                    .unwrap_or(false);

                if !supported {
                    return Err(Error::invalid_schema(format!(
                        "model `{}` projects field {field:?} on {dialect}, but it is not a scalar served there",
                        model.name.upper_camel_case()
                    )));
                }
            }
        }

        Ok(())
    }
}
