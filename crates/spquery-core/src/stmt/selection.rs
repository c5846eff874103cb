use crate::schema::app::{FieldId, ModelId, Schema};
use indexmap::{IndexMap, IndexSet};

/// The normalized, recursive selection for one model.
///
/// An empty selection stands for the model's default field set. Once a
/// selection is non-empty, [`Selection::ensure_key`] adds the key so every
/// entity can be re-identified from a partial response.
///
/// Insertion order is kept so that rendering is deterministic; the final
/// wire order is decided by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Model the selection applies to
    pub model: ModelId,

    /// Selected scalar fields
    pub fields: IndexSet<FieldId>,

    /// Selected expandable fields and what to load within each
    pub expand: IndexMap<FieldId, Selection>,

    /// The model's default field set was requested as well, e.g. `Lists`
    /// selected bare next to `Lists.Title`. The default set is then loaded
    /// together with the explicit fields.
    pub include_defaults: bool,
}

impl Selection {
    pub fn new(model: ModelId) -> Selection {
        Selection {
            model,
            fields: IndexSet::new(),
            expand: IndexMap::new(),
            include_defaults: false,
        }
    }

    /// True when nothing was selected explicitly.
    pub fn is_default(&self) -> bool {
        self.fields.is_empty() && self.expand.is_empty()
    }

    /// Adds a scalar field. Returns `false` if it was already selected.
    pub fn insert_field(&mut self, field: FieldId) -> bool {
        debug_assert_eq!(field.model, self.model);
        self.fields.insert(field)
    }

    /// Returns the nested selection for `field`, creating an empty (default)
    /// one the first time the field is seen. Later selectors for the same
    /// field extend that one selection.
    pub fn expand_mut(&mut self, field: FieldId, target: ModelId) -> &mut Selection {
        debug_assert_eq!(field.model, self.model);
        self.expand
            .entry(field)
            .or_insert_with(|| Selection::new(target))
    }

    /// Adds the key to every non-empty level of the selection.
    pub fn ensure_key(&mut self, schema: &Schema) {
        if !self.is_default() {
            self.fields.insert(schema.model(self.model).primary_key);
        }

        for nested in self.expand.values_mut() {
            nested.ensure_key(schema);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEB: ModelId = ModelId(0);
    const LIST: ModelId = ModelId(1);

    #[test]
    fn empty_is_default() {
        let selection = Selection::new(WEB);
        assert!(selection.is_default());
        assert!(!selection.include_defaults);
    }

    #[test]
    fn expand_mut_extends_one_branch() {
        let lists = WEB.field(3);

        let mut selection = Selection::new(WEB);
        selection.expand_mut(lists, LIST).insert_field(LIST.field(1));
        selection.expand_mut(lists, LIST).insert_field(LIST.field(2));

        assert_eq!(selection.expand.len(), 1);
        assert_eq!(
            selection.expand[&lists]
                .fields
                .iter()
                .copied()
                .collect::<Vec<_>>(),
            [LIST.field(1), LIST.field(2)]
        );
    }

    #[test]
    fn defaults_flag_survives_explicit_fields() {
        let lists = WEB.field(3);

        let mut selection = Selection::new(WEB);
        selection.expand_mut(lists, LIST).include_defaults = true;
        selection.expand_mut(lists, LIST).insert_field(LIST.field(1));

        let nested = &selection.expand[&lists];
        assert!(nested.include_defaults);
        assert!(!nested.is_default());
    }

    #[test]
    fn insert_is_idempotent() {
        let mut selection = Selection::new(WEB);
        assert!(selection.insert_field(WEB.field(1)));
        assert!(!selection.insert_field(WEB.field(1)));
        assert_eq!(selection.fields.len(), 1);
    }
}
