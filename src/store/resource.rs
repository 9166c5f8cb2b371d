use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use std::io::Write;

/// Random-access byte resource that can be emptied in place.
pub trait Resource: Read + Write + Seek + Send + Sync {
    /// Drop all content. Does not move the cursor.
    fn truncate(&mut self) -> std::io::Result<()>;
    /// Current length in bytes.
    fn size(&mut self) -> std::io::Result<u64>;
}

impl Resource for std::fs::File {
    fn truncate(&mut self) -> std::io::Result<()> {
        self.set_len(0)
    }
    fn size(&mut self) -> std::io::Result<u64> {
        self.metadata().map(|m| m.len())
    }
}

impl Resource for Cursor<Vec<u8>> {
    fn truncate(&mut self) -> std::io::Result<()> {
        self.get_mut().clear();
        Ok(())
    }
    fn size(&mut self) -> std::io::Result<u64> {
        Ok(self.get_ref().len() as u64)
    }
}
