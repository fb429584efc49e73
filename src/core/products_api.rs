use crate::core::invoke::invoke_typed;
use crate::domain::model::{Product, ProductUpdate};
use crate::domain::ports::CommandInvoker;
use crate::utils::error::Result;
use serde_json::json;

/// Product commands. Each method is one backend call.
pub struct ProductsApi<I: CommandInvoker> {
    invoker: I,
}

impl<I: CommandInvoker> ProductsApi<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub async fn create(&self, code: &str, name: &str) -> Result<Product> {
        invoke_typed(
            &self.invoker,
            "create_product",
            json!({ "code": code, "name": name }),
        )
        .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        invoke_typed(&self.invoker, "get_product", json!({ "id": id })).await
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<Product>> {
        invoke_typed(&self.invoker, "get_product_by_code", json!({ "code": code })).await
    }

    pub async fn get_all(&self) -> Result<Vec<Product>> {
        invoke_typed(&self.invoker, "get_all_products", json!({})).await
    }

    pub async fn get_all_active(&self) -> Result<Vec<Product>> {
        invoke_typed(&self.invoker, "list_active_products", json!({})).await
    }

    /// Absent fields go out as explicit `null` so the backend keeps their
    /// current values.
    pub async fn update(&self, id: i64, data: &ProductUpdate) -> Result<Product> {
        invoke_typed(
            &self.invoker,
            "update_product",
            json!({
                "id": id,
                "code": data.code,
                "name": data.name,
                "active": data.active,
                "balance": data.balance,
            }),
        )
        .await
    }

    /// Soft delete: the backend flips the active flag.
    pub async fn delete(&self, id: i64) -> Result<()> {
        tracing::debug!("Invoking backend command: delete_product");
        self.invoker
            .invoke("delete_product", json!({ "id": id }))
            .await?;
        Ok(())
    }

    pub async fn increment_balance(&self, id: i64, amount: f64) -> Result<Product> {
        invoke_typed(
            &self.invoker,
            "increment_product_balance",
            json!({ "id": id, "amount": amount }),
        )
        .await
    }

    pub async fn decrement_balance(&self, id: i64, amount: f64) -> Result<Product> {
        invoke_typed(
            &self.invoker,
            "decrement_product_balance",
            json!({ "id": id, "amount": amount }),
        )
        .await
    }
}
