use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Shared byte sink.
///
/// Writes take `&self` because alerts land from timer tasks while the
/// driver still holds the same destination. Each call is one discrete
/// chunk of output; transports that frame messages send one frame per call.
pub trait Sink: Send + Sync {
    fn write(&self, bytes: &[u8]) -> std::io::Result<usize>;
}

/// Handle to wherever a session's output goes.
pub type Destination = Arc<dyn Sink>;

impl Sink for std::io::Stdout {
    fn write(&self, bytes: &[u8]) -> std::io::Result<usize> {
        let mut out = self.lock();
        out.write_all(bytes)?;
        out.flush()?;
        Ok(bytes.len())
    }
}

impl<W> Sink for Mutex<W>
where
    W: Write + Send,
{
    fn write(&self, bytes: &[u8]) -> std::io::Result<usize> {
        let mut out = self.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(bytes)?;
        out.flush()?;
        Ok(bytes.len())
    }
}
