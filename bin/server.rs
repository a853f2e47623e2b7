// 🌐 Plan Catalog - API Server
// Serves the package store over HTTP. All routes live in the library's
// api module; this binary only wires config, store, and listener together.

use plan_catalog::api::{build_router, AppState};
use plan_catalog::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("🌐 Plan Catalog - API Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = match Config::resolve(None, None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Bad configuration: {:#}", e);
            eprintln!("   Check PLAN_CATALOG_STORE, PLAN_CATALOG_PATH and PLAN_CATALOG_PORT.");
            std::process::exit(1);
        }
    };

    let store = match config.open_store() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Cannot open store at {}: {:#}", config.store_path.display(), e);
            std::process::exit(1);
        }
    };
    println!(
        "✓ Store ready: {} ({})",
        config.store_path.display(),
        config.backend.tag()
    );

    let state = AppState::new(store);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:{}", config.port);
    println!("   Packages: http://localhost:{}/packages", config.port);
    println!("   Health:   http://localhost:{}/health", config.port);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
