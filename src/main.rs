use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;
use titanic_serve::utils::{logger, validation::Validate};
use titanic_serve::web::{form_config, handlers, AppState};
use titanic_serve::{dataset, loader, Classifier, ServeConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServeConfig::parse();
    logger::init(config.verbose);

    tracing::info!("Starting titanic-serve");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    // A missing or corrupt artifact is not fatal: the form page keeps
    // working and /predict answers 500 until the artifact is fixed.
    let model: Option<Arc<dyn Classifier>> = match loader::load_forest(&config.model_path) {
        Ok(forest) => {
            tracing::info!(
                "✅ Model loaded: {} trees from {}",
                forest.n_trees(),
                config.model_path
            );
            Some(Arc::new(forest))
        }
        Err(e) => {
            tracing::error!("❌ Failed to load model: {}", e);
            None
        }
    };

    if std::path::Path::new(&config.dataset_path).exists() {
        match dataset::load_reference(&config.dataset_path) {
            Ok(records) => tracing::info!(
                "Reference dataset: {} rows, {:.1}% survival",
                records.len(),
                dataset::survival_rate(&records) * 100.0
            ),
            Err(e) => tracing::warn!("Could not read reference dataset: {}", e),
        }
    } else {
        tracing::debug!("No reference dataset at {}", config.dataset_path);
    }

    let state = web::Data::new(AppState::new(model));

    tracing::info!("🚀 Listening on 0.0.0.0:{}", config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(form_config())
            .service(handlers::index)
            .service(handlers::predict)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await?;

    Ok(())
}
