mod analysis;
mod config;
mod errors;
mod extract;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::similarity::{HashedNgramScorer, SemanticScorer};
use crate::analysis::skills::SkillExtractor;
use crate::analysis::suggest::Advisor;
use crate::analysis::vocab::Vocabulary;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so logging respects RUST_LOG defaults
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumatch API v{}", env!("CARGO_PKG_VERSION"));

    // Load vocabularies (embedded asset unless VOCAB_PATH overrides)
    let vocab = Arc::new(Vocabulary::load(config.vocab_path.as_deref())?);
    info!(
        technical_terms = vocab.technical_terms.len(),
        soft_skills = vocab.soft_skills.len(),
        "Vocabulary loaded"
    );

    // Build the matching engines once; requests share them read-only
    let skills = Arc::new(SkillExtractor::new(&vocab)?);
    let advisor = Arc::new(Advisor::new(Arc::clone(&vocab))?);
    let scorer: Arc<dyn SemanticScorer> = Arc::new(HashedNgramScorer::default());

    let state = AppState {
        config: config.clone(),
        skills,
        advisor,
        scorer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
