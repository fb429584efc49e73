use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Business and tax configuration of one installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntity {
    pub id: String,
    pub flow_base_url: String,
    pub code_uf: i32,
    pub nserie_sat: String,
    pub nserie_sat_nao: Option<String>,
    pub nr_nf_sim: i32,
    pub nr_nf_nao: i32,
    pub sign_ac: Option<String>,
    /// "1", "2" or "3"
    pub regime_tributario: String,
    pub cnpj: String,
    pub name: String,
    pub short_name: Option<String>,
    pub zipcode: String,
    pub address_name: String,
    pub address_number: String,
    pub address_city: String,
    pub address_city_code: Option<String>,
    /// "1" production, "2" homologation
    pub tipo_ambiente: String,
    pub address_cpl: Option<String>,
    pub address_neiborhood: String,
    pub address_state: String,
    pub fone: Option<String>,
    /// Epoch seconds.
    pub created_at: i64,
    pub updated_at: i64,
    pub percent_s: i32,
    pub only_money: i32,
    pub error_as_success: i32,
    pub ie: Option<String>,
    /// JSON-encoded list of enabled payment methods.
    pub pagamentos: Option<String>,
    pub ignore_cpf: i32,
    pub numero_caixa: i32,
    pub emitir_l: i32,
    pub habilitar_contador: i32,
    pub habilitar_contador_nao: i32,
    pub controle_estoque: i32,
    pub modelo: i32,
}

impl Default for ConfigEntity {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            flow_base_url: String::new(),
            code_uf: 35,
            nserie_sat: "123456789".to_string(),
            nserie_sat_nao: None,
            nr_nf_sim: 0,
            nr_nf_nao: 0,
            sign_ac: None,
            regime_tributario: "1".to_string(),
            cnpj: "28095955000199".to_string(),
            name: "EMPRESA TESTE".to_string(),
            short_name: None,
            zipcode: "00000000".to_string(),
            address_name: "AV Paulista".to_string(),
            address_number: "2000".to_string(),
            address_city: "São Paulo".to_string(),
            address_city_code: None,
            tipo_ambiente: "1".to_string(),
            address_cpl: None,
            address_neiborhood: "Consolação".to_string(),
            address_state: "SP".to_string(),
            fone: None,
            created_at: 0,
            updated_at: 0,
            percent_s: 50,
            only_money: 0,
            error_as_success: 0,
            ie: None,
            pagamentos: None,
            ignore_cpf: 0,
            numero_caixa: 0,
            emitir_l: 0,
            habilitar_contador: 0,
            habilitar_contador_nao: 0,
            controle_estoque: 0,
            modelo: 59,
        }
    }
}

/// Partial configuration; absent fields are left out of the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOrUpdateConfigDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_uf: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nserie_sat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nserie_sat_nao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nr_nf_sim: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nr_nf_nao: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_ac: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regime_tributario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_city_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_ambiente: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_cpl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_neiborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_s: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_money: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_as_success: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagamentos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_cpf: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_caixa: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emitir_l: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habilitar_contador: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habilitar_contador_nao: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controle_estoque: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modelo: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePercentConfigDto {
    pub percent_s: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CnpjResponseDto {
    pub cnpj: String,
    #[serde(default)]
    pub razao_social: Option<String>,
    #[serde(default)]
    pub nome_fantasia: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    /// 1 active, 0 soft-deleted.
    pub active: i32,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.active == 1
    }
}

/// Field-level product update. Every field is sent, absent ones as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub active: Option<i32>,
    pub balance: Option<f64>,
}

impl ProductUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
