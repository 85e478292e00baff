use crate::store::error::Result as StorageResult;

/// A single key-value location holding the serialized roster.
pub trait RosterSlot {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> StorageResult<Option<String>>;

    fn write(&mut self, contents: &str) -> StorageResult<()>;

    /// Short description for log lines.
    fn describe(&self) -> String;
}

/// In-process slot, used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    contents: Option<String>,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            writes: 0,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of writes since creation
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RosterSlot for MemorySlot {
    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> StorageResult<()> {
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        String::from("memory")
    }
}
