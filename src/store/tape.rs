use super::*;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;

/// Overwrite sink: every `write` replaces the whole resource.
///
/// Truncates, rewinds, then writes. The resource never holds a mix of two
/// writes, but the truncate and the write are not one atomic step: a reader
/// racing a write can see an empty or partial file. The store is the only
/// writer, so this is tolerated.
#[derive(Debug)]
pub struct Tape<R> {
    resource: R,
}

impl<R> Tape<R>
where
    R: Resource,
{
    pub fn new(resource: R) -> Self {
        Self { resource }
    }

    /// Replace the resource content with exactly `bytes`.
    pub fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        self.resource.truncate()?;
        self.resource.seek(SeekFrom::Start(0))?;
        self.resource.write_all(bytes)?;
        self.resource.flush()?;
        Ok(bytes.len())
    }

    pub fn get_ref(&self) -> &R {
        &self.resource
    }

    pub fn into_inner(self) -> R {
        self.resource
    }
}
