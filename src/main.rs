use anyhow::Context;
use clap::Parser;
use rabbit_bridge::core::CommandInvoker;
use rabbit_bridge::domain::model::ProductUpdate;
use rabbit_bridge::utils::{logger, validation::Validate};
use rabbit_bridge::{
    format_cnpj, CliConfig, Command, ConfigApi, HttpInvoker, MemoryBackend, ProductsApi,
    ProductsView,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let config = cli.resolve().context("failed to load configuration")?;

    if config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(config.log_level());
    }
    tracing::debug!("CLI config: {:?}", cli);

    config.validate().context("invalid configuration")?;

    let invoker: Arc<dyn CommandInvoker> = if cli.offline {
        tracing::info!("Using in-process backend");
        Arc::new(MemoryBackend::new())
    } else {
        let http = HttpInvoker::from_config(&config)?;
        tracing::info!("Using backend at {}", http.base_url());
        Arc::new(http)
    };

    match cli.command() {
        Command::Config => {
            let api = ConfigApi::new(invoker);
            match api.get_first_config().await? {
                Some(entity) => {
                    println!("{} ({})", entity.name, format_cnpj(&entity.cnpj));
                    println!(
                        "{}, {} - {}/{}",
                        entity.address_name,
                        entity.address_number,
                        entity.address_city,
                        entity.address_state
                    );
                    println!(
                        "Regime: {}  Ambiente: {}  Modelo: {}  Desconto: {}%",
                        entity.regime_tributario,
                        entity.tipo_ambiente,
                        entity.modelo,
                        entity.percent_s
                    );
                }
                None => println!("No configuration saved"),
            }
        }
        Command::Cnpj { value } => {
            let api = ConfigApi::new(invoker);
            let info = api.get_cnpj(&value).await?;
            println!("CNPJ: {}", format_cnpj(&info.cnpj));
            for (label, field) in [
                ("Razão social", &info.razao_social),
                ("Nome fantasia", &info.nome_fantasia),
                ("Município", &info.municipio),
                ("UF", &info.uf),
                ("Telefone", &info.telefone),
                ("E-mail", &info.email),
            ] {
                if let Some(value) = field {
                    println!("{}: {}", label, value);
                }
            }
        }
        action => {
            let mut view = ProductsView::new(ProductsApi::new(invoker));
            view.mount().await;

            match action {
                Command::Create { code, name } => {
                    view.set_code(code);
                    view.set_name(name);
                    view.handle_create().await;
                }
                Command::Increment { id, amount } => view.handle_increment(id, amount).await,
                Command::Decrement { id, amount } => view.handle_decrement(id, amount).await,
                Command::Rename { id, name } => {
                    view.handle_update(id, ProductUpdate::rename(name)).await
                }
                Command::Delete { id } => view.handle_delete(id).await,
                _ => {}
            }

            println!("{}", view.render());
        }
    }

    Ok(())
}
