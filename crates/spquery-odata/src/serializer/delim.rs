use super::{Formatter, ToOData};
use spquery_core::Result;

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Slash delimited, used for nested property paths
pub(super) struct Slash<L>(pub(super) L);

/// Delimited by an arbitrary separator
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

impl<L> ToOData for Comma<L>
where
    L: IntoIterator,
    L::Item: ToOData,
{
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        Delimited(self.0, ",").to_odata(f)
    }
}

impl<L> ToOData for Slash<L>
where
    L: IntoIterator,
    L::Item: ToOData,
{
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        Delimited(self.0, "/").to_odata(f)
    }
}

impl<L> ToOData for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToOData,
{
    fn to_odata(self, f: &mut Formatter<'_>) -> Result<()> {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s, i);
            s = self.1;
        }
        Ok(())
    }
}
