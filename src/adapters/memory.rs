//! In-process stand-in for the native backend.
//!
//! Answers every command the bridge issues with the same observable results
//! the desktop backend gives, keeping records in memory. Used by the test
//! suite and by the CLI's `--offline` mode.

use crate::domain::model::{
    CnpjResponseDto, ConfigEntity, CreateOrUpdateConfigDto, Product, UpdatePercentConfigDto,
};
use crate::domain::ports::CommandInvoker;
use crate::utils::cnpj::clean_cnpj;
use crate::utils::error::{BridgeError, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

const DEFAULT_CONFIG_ID: &str = "default";

#[derive(Default)]
struct State {
    next_product_id: i64,
    products: BTreeMap<i64, Product>,
    configs: BTreeMap<String, ConfigEntity>,
}

#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<State>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an active product directly, returning its id.
    pub fn seed_product(&self, code: &str, name: &str, balance: f64) -> i64 {
        let mut state = self.state();
        let mut product = new_product(&mut state, code, name);
        product.balance = balance;
        let id = product.id.unwrap_or_default();
        state.products.insert(id, product);
        id
    }

    pub fn seed_config(&self, config: ConfigEntity) {
        self.state().configs.insert(config.id.clone(), config);
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn dispatch(&self, command: &str, args: &Value) -> Result<Value> {
        let mut state = self.state();
        match command {
            "get_cnpj" => {
                let cnpj: String = arg(command, args, "cnpj")?;
                let cleaned = clean_cnpj(&cnpj);
                if cleaned.len() != 14 {
                    return Err(BridgeError::command(command, "CNPJ inválido"));
                }
                to_value(CnpjResponseDto {
                    cnpj: cleaned,
                    ..Default::default()
                })
            }
            "get_first_config" => to_value(state.configs.get(DEFAULT_CONFIG_ID)),
            "create_or_update_config" => {
                let body: CreateOrUpdateConfigDto = arg(command, args, "body")?;
                let id = body
                    .id
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CONFIG_ID.to_string());
                let now = Utc::now().timestamp();

                let mut config = match state.configs.get(&id) {
                    Some(existing) => existing.clone(),
                    None => ConfigEntity {
                        id: id.clone(),
                        created_at: now,
                        ..ConfigEntity::default()
                    },
                };
                merge_config(&mut config, body);
                config.id = id.clone();
                config.updated_at = now;

                state.configs.insert(id, config.clone());
                to_value(config)
            }
            "update_percent_config" => {
                let body: UpdatePercentConfigDto = arg(command, args, "body")?;
                let config = state
                    .configs
                    .get_mut(DEFAULT_CONFIG_ID)
                    .ok_or_else(|| BridgeError::command(command, "Configuração não encontrada"))?;
                config.percent_s = body.percent_s;
                config.updated_at = Utc::now().timestamp();
                to_value(config.clone())
            }
            "get_config" => {
                let id: String = arg(command, args, "id")?;
                to_value(state.configs.get(&id))
            }
            "save_config" => {
                let config: ConfigEntity = arg(command, args, "config")?;
                state.configs.insert(config.id.clone(), config.clone());
                to_value(config)
            }
            "list_configs" => to_value(state.configs.values().collect::<Vec<_>>()),
            "create_product" => {
                let code: String = arg(command, args, "code")?;
                let name: String = arg(command, args, "name")?;
                let product = new_product(&mut state, &code, &name);
                state
                    .products
                    .insert(product.id.unwrap_or_default(), product.clone());
                to_value(product)
            }
            "get_product" => {
                let id: i64 = arg(command, args, "id")?;
                to_value(state.products.get(&id))
            }
            "get_product_by_code" => {
                let code: String = arg(command, args, "code")?;
                to_value(state.products.values().find(|p| p.code == code))
            }
            "get_all_products" => to_value(sorted_by_name(state.products.values())),
            "list_active_products" => to_value(sorted_by_name(
                state.products.values().filter(|p| p.is_active()),
            )),
            "update_product" => {
                let id: i64 = arg(command, args, "id")?;
                let code: Option<String> = arg(command, args, "code")?;
                let name: Option<String> = arg(command, args, "name")?;
                let active: Option<i32> = arg(command, args, "active")?;
                let balance: Option<f64> = arg(command, args, "balance")?;

                let product = state.products.get_mut(&id).ok_or_else(|| {
                    BridgeError::command(command, format!("Product with id {} not found", id))
                })?;
                if let Some(code) = code {
                    product.code = code;
                }
                if let Some(name) = name {
                    product.name = name;
                }
                if let Some(active) = active {
                    product.active = active;
                }
                if let Some(balance) = balance {
                    product.balance = balance;
                }
                product.updated_at = Utc::now();
                to_value(product.clone())
            }
            "delete_product" => {
                let id: i64 = arg(command, args, "id")?;
                // unknown ids are a no-op
                if let Some(product) = state.products.get_mut(&id) {
                    product.active = 0;
                    product.updated_at = Utc::now();
                }
                Ok(Value::Null)
            }
            "increment_product_balance" | "decrement_product_balance" => {
                let id: i64 = arg(command, args, "id")?;
                let amount: f64 = arg(command, args, "amount")?;
                let delta = if command == "increment_product_balance" {
                    amount
                } else {
                    -amount
                };

                let product = state.products.get_mut(&id).ok_or_else(|| {
                    BridgeError::command(
                        command,
                        format!("Product with id {} not found after update", id),
                    )
                })?;
                product.balance += delta;
                product.updated_at = Utc::now();
                to_value(product.clone())
            }
            other => Err(BridgeError::command(
                other,
                format!("Unknown command: {}", other),
            )),
        }
    }
}

#[async_trait]
impl CommandInvoker for MemoryBackend {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        tracing::debug!("Memory backend handling command: {}", command);
        self.dispatch(command, &args)
    }
}

/// Builds an active product with the next id; callers store it.
fn new_product(state: &mut State, code: &str, name: &str) -> Product {
    state.next_product_id += 1;
    let now = Utc::now();
    Product {
        id: Some(state.next_product_id),
        code: code.to_string(),
        name: name.to_string(),
        active: 1,
        balance: 0.0,
        created_at: now,
        updated_at: now,
    }
}

fn sorted_by_name<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a Product> {
    let mut products: Vec<&Product> = products.collect();
    products.sort_by(|a, b| a.name.cmp(&b.name));
    products
}

/// Reads one named argument; a missing key reads as `null`.
fn arg<T: DeserializeOwned>(command: &str, args: &Value, key: &str) -> Result<T> {
    let value = args.get(key).cloned().unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| {
        BridgeError::command(command, format!("invalid argument '{}': {}", key, e))
    })
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn merge_config(config: &mut ConfigEntity, dto: CreateOrUpdateConfigDto) {
    macro_rules! merge {
        (required: $($field:ident),*; optional: $($opt:ident),*) => {
            $(if let Some(value) = dto.$field { config.$field = value; })*
            $(if let Some(value) = dto.$opt { config.$opt = Some(value); })*
        };
    }

    merge!(
        required: flow_base_url, code_uf, nserie_sat, nr_nf_sim, nr_nf_nao,
            regime_tributario, cnpj, name, zipcode, address_name, address_number,
            address_city, tipo_ambiente, address_neiborhood, address_state, percent_s,
            only_money, error_as_success, ignore_cpf, numero_caixa, emitir_l,
            habilitar_contador, habilitar_contador_nao, controle_estoque, modelo;
        optional: nserie_sat_nao, sign_ac, short_name, address_city_code, address_cpl,
            fone, ie, pagamentos
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn call(backend: &MemoryBackend, command: &str, args: Value) -> Result<Value> {
        backend.invoke(command, args).await
    }

    #[tokio::test]
    async fn test_create_product_defaults() {
        let backend = MemoryBackend::new();
        let value = call(&backend, "create_product", json!({"code": "C1", "name": "Café"}))
            .await
            .unwrap();
        let product: Product = serde_json::from_value(value).unwrap();

        assert_eq!(product.id, Some(1));
        assert_eq!(product.active, 1);
        assert_eq!(product.balance, 0.0);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[tokio::test]
    async fn test_lists_are_ordered_by_name_and_filter_inactive() {
        let backend = MemoryBackend::new();
        backend.seed_product("Z", "Zebra", 0.0);
        let inactive = backend.seed_product("A", "Abacate", 0.0);
        backend.seed_product("M", "Manga", 0.0);
        call(&backend, "delete_product", json!({"id": inactive}))
            .await
            .unwrap();

        let all = call(&backend, "get_all_products", json!({})).await.unwrap();
        let names: Vec<&str> = all
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Abacate", "Manga", "Zebra"]);

        let active = call(&backend, "list_active_products", json!({}))
            .await
            .unwrap();
        assert_eq!(active.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_merges_present_fields() {
        let backend = MemoryBackend::new();
        let id = backend.seed_product("C1", "Café", 4.0);

        let value = call(
            &backend,
            "update_product",
            json!({"id": id, "code": null, "name": "Café Torrado", "active": null, "balance": null}),
        )
        .await
        .unwrap();

        assert_eq!(value["code"], "C1");
        assert_eq!(value["name"], "Café Torrado");
        assert_eq!(value["balance"], 4.0);
    }

    #[tokio::test]
    async fn test_balance_changes_and_missing_product() {
        let backend = MemoryBackend::new();
        let id = backend.seed_product("C1", "Café", 1.0);

        let up = call(&backend, "increment_product_balance", json!({"id": id, "amount": 2.5}))
            .await
            .unwrap();
        assert_eq!(up["balance"], 3.5);

        let down = call(&backend, "decrement_product_balance", json!({"id": id, "amount": 5.0}))
            .await
            .unwrap();
        assert_eq!(down["balance"], -1.5);

        let err = call(&backend, "increment_product_balance", json!({"id": 99, "amount": 1.0}))
            .await
            .unwrap_err();
        assert_eq!(
            err.backend_message(),
            Some("Product with id 99 not found after update")
        );
    }

    #[tokio::test]
    async fn test_missing_lookups_are_null() {
        let backend = MemoryBackend::new();
        assert_eq!(
            call(&backend, "get_product", json!({"id": 5})).await.unwrap(),
            Value::Null
        );
        assert_eq!(
            call(&backend, "get_first_config", json!({})).await.unwrap(),
            Value::Null
        );
    }

    #[tokio::test]
    async fn test_create_or_update_config_merges_onto_defaults() {
        let backend = MemoryBackend::new();

        let created = call(
            &backend,
            "create_or_update_config",
            json!({"body": {"name": "Padaria Central", "percent_s": 10}}),
        )
        .await
        .unwrap();
        let created: ConfigEntity = serde_json::from_value(created).unwrap();
        assert_eq!(created.id, "default");
        assert_eq!(created.name, "Padaria Central");
        assert_eq!(created.percent_s, 10);
        assert_eq!(created.modelo, 59);
        assert!(created.created_at > 0);

        let updated = call(
            &backend,
            "create_or_update_config",
            json!({"body": {"fone": "1133334444"}}),
        )
        .await
        .unwrap();
        assert_eq!(updated["name"], "Padaria Central");
        assert_eq!(updated["fone"], "1133334444");
        assert_eq!(updated["created_at"], created.created_at);
    }

    #[tokio::test]
    async fn test_update_percent_requires_default_config() {
        let backend = MemoryBackend::new();
        let err = call(&backend, "update_percent_config", json!({"body": {"percent_s": 20}}))
            .await
            .unwrap_err();
        assert_eq!(err.backend_message(), Some("Configuração não encontrada"));

        backend.seed_config(ConfigEntity::default());
        let value = call(&backend, "update_percent_config", json!({"body": {"percent_s": 20}}))
            .await
            .unwrap();
        assert_eq!(value["percent_s"], 20);
    }

    #[tokio::test]
    async fn test_get_cnpj_validates_length() {
        let backend = MemoryBackend::new();
        let ok = call(&backend, "get_cnpj", json!({"cnpj": "28.095.955/0001-99"}))
            .await
            .unwrap();
        assert_eq!(ok["cnpj"], "28095955000199");

        let err = call(&backend, "get_cnpj", json!({"cnpj": "123"}))
            .await
            .unwrap_err();
        assert_eq!(err.backend_message(), Some("CNPJ inválido"));
    }

    #[test]
    fn test_seeded_product_found_by_code() {
        let backend = MemoryBackend::new();
        let id = backend.seed_product("PAO", "Pão francês", 40.0);

        let value = tokio_test::block_on(call(
            &backend,
            "get_product_by_code",
            json!({"code": "PAO"}),
        ))
        .unwrap();

        assert_eq!(value["id"], id);
        assert_eq!(value["balance"], 40.0);
    }

    #[tokio::test]
    async fn test_unknown_command_fails() {
        let backend = MemoryBackend::new();
        let err = call(&backend, "greet", json!({})).await.unwrap_err();
        assert!(err.to_string().contains("Unknown command: greet"));
    }
}
