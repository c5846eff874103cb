use super::{Formatter, Slash, ToOData};

use spquery_core::{plan::FieldPath, schema::app::FieldId, Error, Result};

/// A field rendered by its wire name on the serializer's dialect.
pub(super) struct WireName(pub(super) FieldId);

impl ToOData for WireName {
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        let dialect = f.serializer.dialect();
        let field = f.serializer.schema.field(self.0);

        let Some(name) = field.wire_name(dialect) else {
            return Err(Error::invalid_plan(format!(
                "field `{}` has no {dialect} name",
                field.full_name(f.serializer.schema)
            )));
        };

        f.dst.push_str(name);
        Ok(())
    }
}

impl ToOData for &FieldPath {
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        if self.is_empty() {
            return Err(Error::invalid_plan("empty field path"));
        }

        fmt!(f, Slash(self.iter().map(WireName)));
        Ok(())
    }
}
