use crate::domain::ports::CommandInvoker;
use crate::utils::error::{BridgeError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Invokes `command` and decodes its result into `T`.
pub async fn invoke_typed<I, T>(invoker: &I, command: &str, args: Value) -> Result<T>
where
    I: CommandInvoker + ?Sized,
    T: DeserializeOwned,
{
    tracing::debug!("Invoking backend command: {}", command);
    let value = invoker.invoke(command, args).await?;

    serde_json::from_value(value).map_err(|source| BridgeError::Decode {
        command: command.to_string(),
        source,
    })
}
