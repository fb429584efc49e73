pub mod config_api;
pub mod invoke;
pub mod products_api;
pub mod products_view;

pub use crate::domain::model::{
    CnpjResponseDto, ConfigEntity, CreateOrUpdateConfigDto, Product, ProductUpdate,
    UpdatePercentConfigDto,
};
pub use crate::domain::ports::{CommandInvoker, ConfigProvider};
pub use crate::utils::error::Result;
pub use config_api::ConfigApi;
pub use products_api::ProductsApi;
pub use products_view::ProductsView;
