use super::Error;

/// Error when the execution layer fails to issue a batch.
///
/// Wraps whatever the connection implementation reports: transport
/// failures, authentication failures or exhausted retries.
#[derive(Debug)]
pub(super) struct ConnectionFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("connection failed: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a failure reported by a connection.
    pub fn connection_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::ConnectionFailed(ConnectionFailed {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a connection failure.
    pub fn is_connection_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConnectionFailed(_))
    }
}
