//! # Chunk boundary capability.

use crate::error::ListenerResult;

/// Callbacks around each chunk (one transaction of read/process/write).
pub trait ChunkListener: Send + Sync + 'static {
    /// Called before a chunk starts.
    fn before_chunk(&self) -> ListenerResult {
        Ok(())
    }

    /// Called after a chunk completed.
    fn after_chunk(&self) -> ListenerResult {
        Ok(())
    }
}
