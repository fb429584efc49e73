use crate::core::invoke::invoke_typed;
use crate::domain::model::{
    CnpjResponseDto, ConfigEntity, CreateOrUpdateConfigDto, UpdatePercentConfigDto,
};
use crate::domain::ports::CommandInvoker;
use crate::utils::error::Result;
use serde_json::json;

/// Configuration commands. Each method is one backend call.
pub struct ConfigApi<I: CommandInvoker> {
    invoker: I,
}

impl<I: CommandInvoker> ConfigApi<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    /// Looks up public registry data for a CNPJ.
    pub async fn get_cnpj(&self, cnpj: &str) -> Result<CnpjResponseDto> {
        invoke_typed(&self.invoker, "get_cnpj", json!({ "cnpj": cnpj })).await
    }

    /// The default configuration, if one has been saved.
    pub async fn get_first_config(&self) -> Result<Option<ConfigEntity>> {
        invoke_typed(&self.invoker, "get_first_config", json!({})).await
    }

    pub async fn create_or_update(&self, body: &CreateOrUpdateConfigDto) -> Result<ConfigEntity> {
        invoke_typed(
            &self.invoker,
            "create_or_update_config",
            json!({ "body": body }),
        )
        .await
    }

    pub async fn update_percent(&self, body: &UpdatePercentConfigDto) -> Result<ConfigEntity> {
        invoke_typed(&self.invoker, "update_percent_config", json!({ "body": body })).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<ConfigEntity>> {
        invoke_typed(&self.invoker, "get_config", json!({ "id": id })).await
    }

    pub async fn save(&self, config: &ConfigEntity) -> Result<ConfigEntity> {
        invoke_typed(&self.invoker, "save_config", json!({ "config": config })).await
    }

    pub async fn list(&self) -> Result<Vec<ConfigEntity>> {
        invoke_typed(&self.invoker, "list_configs", json!({})).await
    }
}
