//! Axum-based gateway for the subject Q&A agents. Config-driven via CoreConfig.

mod handlers;

use axum::{
    extract::{Json, State},
    http::Method,
    routing::{get, post},
    Router,
};
use handlers::ask::{answer_request, subject_summaries, AskRequest};
use std::sync::Arc;
use subject_qa_core::{AgentRegistry, CoreConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight check: config loads, every configured subject builds, port is available.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;

    println!("Checking subjects...");
    let registry = AgentRegistry::from_subjects(config.subjects.iter().cloned());
    for agent in registry.agents() {
        let kb = agent.knowledge();
        if kb.is_empty() {
            println!("  {}: EMPTY (no built-in dataset; every answer will be not-found)", agent.subject());
        } else {
            println!(
                "  {}: OK ({} questions, {} paragraphs)",
                agent.subject(),
                kb.question_count(),
                kb.paragraph_count()
            );
        }
    }

    let port = config.port;
    print!("Checking port {}... ", port);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    match std::net::TcpListener::bind(addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("Port {} BLOCKED: {}", port, e));
        }
    }

    println!("\nSUCCESS: Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[subject-qa-gateway] .env not loaded: {} (using system environment)", e);
    }

    if std::env::args().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load()?);
    let registry = Arc::new(AgentRegistry::from_subjects(config.subjects.iter().cloned()));

    let app = build_app(AppState {
        config: Arc::clone(&config),
        registry,
    });

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("{} listening on {}", config.app_name, addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn frontend_root_dir() -> std::path::PathBuf {
    // Prefer the working directory (run from workspace root); fall back to the manifest-relative path.
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let from_cwd = cwd.join("qa-frontend");
    if from_cwd.exists() {
        return from_cwd;
    }

    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("qa-frontend")
}

fn build_app(state: AppState) -> Router {
    let frontend_enabled = state.config.frontend_enabled;

    // CORS: allow Backend/API (8001-8099) and Frontend/UI (3001-3099) port ranges.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &axum::http::HeaderValue, _| {
            let s = origin.to_str().unwrap_or("");
            let port = s
                .rsplit(':')
                .next()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(0);
            (3001..=3099).contains(&port) || (8001..=8099).contains(&port)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any);

    let mut app = Router::new()
        .route("/api/v1/health", get(health))
        .route("/v1/status", get(status))
        .route("/v1/subjects", get(subjects))
        .route("/v1/ask", post(ask))
        .with_state(state);

    if frontend_enabled {
        let frontend_dir = frontend_root_dir();
        let index_file = frontend_dir.join("index.html");

        // Map `/` -> `qa-frontend/index.html`
        app = app.route_service("/", ServeFile::new(index_file));

        // Map `/ui/*` -> `qa-frontend/*`
        app = app.nest_service("/ui", ServeDir::new(frontend_dir));
    }

    app.layer(cors)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) registry: Arc<AgentRegistry>,
}

/// GET /api/v1/health – liveness check for UI and scripts.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// GET /v1/status – app identity and subject list from config.
async fn status(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "subjects": state.registry.subject_names(),
    }))
}

/// GET /v1/subjects – per-subject knowledge summary.
async fn subjects(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(subject_summaries(&state.registry))
}

/// POST /v1/ask – answers one question for one subject.
async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> axum::Json<serde_json::Value> {
    axum::Json(answer_request(&state.registry, &req))
}
