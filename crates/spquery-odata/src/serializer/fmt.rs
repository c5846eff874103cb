use super::Formatter;
use spquery_core::Result;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr ),+ $(,)?) => {{
        $(
            $fragments.to_odata($f)?;
        )*
    }};
}

pub(super) trait ToOData {
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()>;
}

impl ToOData for &str {
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl ToOData for &String {
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}
