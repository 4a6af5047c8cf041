//! Cropwise Store - Result cache port and adapters
//!
//! The engine never persists anything. Callers that want "show last result"
//! save through the [`ports::ResultCache`] port, backed either by process
//! memory or by JSON files on disk.

pub mod file;
pub mod memory;
pub mod models;
pub mod ports;

pub use file::FileResultCache;
pub use memory::MemoryResultCache;
pub use models::CachedRecommendation;
pub use ports::ResultCache;
