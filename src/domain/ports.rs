use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Seam to the native backend: one named command, one JSON argument object,
/// one JSON result (`Value::Null` for void or absent results).
#[async_trait]
pub trait CommandInvoker: Send + Sync {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value>;
}

#[async_trait]
impl<T: CommandInvoker + ?Sized> CommandInvoker for Arc<T> {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        (**self).invoke(command, args).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}
