//! Tab-scoped key/value storage, the counterpart of the browser's `sessionStorage`
//!
//! The submission handler writes the server's palette result here once per
//! successful submission; a separate results page reads it back.

use crate::error::Result;
use async_trait::async_trait;

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Backend name used in log lines
    fn backend_name(&self) -> &'static str;
}
