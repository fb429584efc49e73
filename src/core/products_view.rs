use crate::core::products_api::ProductsApi;
use crate::domain::model::{Product, ProductUpdate};
use crate::domain::ports::CommandInvoker;

/// Amount added by the "+10" row action.
pub const INCREMENT_STEP: f64 = 10.0;
/// Amount removed by the "-5" row action.
pub const DECREMENT_STEP: f64 = 5.0;
/// Name applied by the "Renomear" row action.
pub const RENAME_TO: &str = "Novo Nome";

/// Product management screen.
///
/// Holds a transient copy of the product list plus the two form inputs. Every
/// action calls the bridge and, on success, reloads the whole list. Failures
/// are logged and leave the state as it was.
pub struct ProductsView<I: CommandInvoker> {
    api: ProductsApi<I>,
    products: Vec<Product>,
    loading: bool,
    code: String,
    name: String,
}

impl<I: CommandInvoker> ProductsView<I> {
    pub fn new(api: ProductsApi<I>) -> Self {
        Self {
            api,
            products: Vec::new(),
            loading: false,
            code: String::new(),
            name: String::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// First load when the view is shown.
    pub async fn mount(&mut self) {
        self.load_products().await;
    }

    pub async fn load_products(&mut self) {
        self.loading = true;
        match self.api.get_all().await {
            Ok(products) => {
                tracing::debug!("Loaded {} products", products.len());
                self.products = products;
            }
            Err(e) => tracing::error!("Failed to load products: {}", e),
        }
        self.loading = false;
    }

    /// Submits the form inputs, clearing them once the product exists.
    pub async fn handle_create(&mut self) {
        match self.api.create(&self.code, &self.name).await {
            Ok(product) => {
                tracing::info!("Created product {} ({})", product.code, product.name);
                self.code.clear();
                self.name.clear();
                self.load_products().await;
            }
            Err(e) => tracing::error!("Failed to create product: {}", e),
        }
    }

    pub async fn handle_delete(&mut self, id: i64) {
        match self.api.delete(id).await {
            Ok(()) => self.load_products().await,
            Err(e) => tracing::error!("Failed to delete product {}: {}", id, e),
        }
    }

    pub async fn handle_increment(&mut self, id: i64, amount: f64) {
        match self.api.increment_balance(id, amount).await {
            Ok(_) => self.load_products().await,
            Err(e) => tracing::error!("Failed to increment balance of product {}: {}", id, e),
        }
    }

    pub async fn handle_decrement(&mut self, id: i64, amount: f64) {
        match self.api.decrement_balance(id, amount).await {
            Ok(_) => self.load_products().await,
            Err(e) => tracing::error!("Failed to decrement balance of product {}: {}", id, e),
        }
    }

    pub async fn handle_update(&mut self, id: i64, updates: ProductUpdate) {
        match self.api.update(id, &updates).await {
            Ok(_) => self.load_products().await,
            Err(e) => tracing::error!("Failed to update product {}: {}", id, e),
        }
    }

    pub fn render(&self) -> String {
        if self.loading {
            return "Carregando...".to_string();
        }

        let header = ["ID", "Código", "Nome", "Saldo", "Status"].map(String::from);
        let rows: Vec<[String; 5]> = self
            .products
            .iter()
            .map(|p| {
                [
                    p.id.map(|id| id.to_string()).unwrap_or_default(),
                    p.code.clone(),
                    p.name.clone(),
                    format!("{:.4}", p.balance),
                    if p.is_active() { "Ativo" } else { "Inativo" }.to_string(),
                ]
            })
            .collect();

        let mut widths = header.clone().map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let format_row = |cells: &[String; 5]| {
            cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec!["Gerenciamento de Produtos".to_string(), format_row(&header)];
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        lines.extend(rows.iter().map(format_row));
        lines.join("\n")
    }
}
