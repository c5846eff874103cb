use super::{Flavor, Formatter, ToOData};

use spquery_core::{stmt::Value, Result};

impl ToOData for &Value {
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        use std::fmt::Write;

        match self {
            Value::Null => f.dst.push_str("null"),
            Value::Bool(true) => f.dst.push_str("true"),
            Value::Bool(false) => f.dst.push_str("false"),
            Value::I64(value) => {
                let _ = write!(f.dst, "{value}");
            }
            Value::String(value) => {
                f.dst.push('\'');
                f.dst.push_str(&value.replace('\'', "''"));
                f.dst.push('\'');
            }
            Value::Uuid(value) => match f.serializer.flavor {
                Flavor::Rest => {
                    let _ = write!(f.dst, "guid'{value}'");
                }
                Flavor::Graph => {
                    let _ = write!(f.dst, "{value}");
                }
            },
        }

        Ok(())
    }
}
