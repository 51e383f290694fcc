mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::middleware::{self, DocsCredentials};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::comments::{routes as comments_routes, CommentService};
use crate::features::gallery::routes as gallery_routes;
use crate::features::numerals::routes as numerals_routes;
use crate::features::products::{
    routes as products_routes, DummyJsonClient, ProductCatalog, ProductService,
};
use crate::features::rate_limits::{routes as rate_limits_routes, RateLimitService};
use crate::features::toasts::{routes as toasts_routes, ToastService};
use crate::features::uploads::{routes as uploads_routes, UploadService};
use axum::{extract::DefaultBodyLimit, middleware::from_fn_with_state, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Initialize Rate Limit Service and its expiry sweeper
    let rate_limit_service = Arc::new(RateLimitService::new(&config.rate_limit));
    let _sweeper =
        Arc::clone(&rate_limit_service).spawn_sweeper(config.rate_limit.sweep_interval);
    tracing::info!(
        "Rate limit service initialized ({} requests per {}s)",
        config.rate_limit.max_requests,
        config.rate_limit.window.as_secs()
    );

    // Initialize Product Service backed by the remote catalog
    let catalog: Arc<dyn ProductCatalog> = Arc::new(
        DummyJsonClient::new(&config.catalog)
            .map_err(|e| anyhow::anyhow!("Failed to create catalog client: {}", e))?,
    );
    let product_service = Arc::new(ProductService::new(catalog, &config.catalog));
    tracing::info!(
        "Product service initialized (catalog: {}, search debounce: {}ms)",
        config.catalog.base_url,
        config.catalog.search_debounce.as_millis()
    );

    let toast_service = Arc::new(ToastService::new());
    let comment_service = Arc::new(CommentService::new());
    tracing::info!("Toast and comment services initialized");

    // Initialize Upload Service
    let upload_service = Arc::new(UploadService::new(&config.upload));
    tracing::info!(
        "Upload service initialized: dir={}, served at {}",
        config.upload.dir.display(),
        config.upload.public_path
    );

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn_with_state(
                DocsCredentials(Arc::new(credentials)),
                middleware::docs_basic_auth,
            ))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let api_routes = Router::new()
        .merge(gallery_routes::routes())
        .merge(numerals_routes::routes())
        .merge(products_routes::routes(product_service))
        .merge(rate_limits_routes::routes(rate_limit_service))
        .merge(toasts_routes::routes(toast_service))
        .merge(comments_routes::routes(comment_service))
        .merge(uploads_routes::routes(upload_service));

    let app = Router::new()
        .merge(swagger)
        .merge(api_routes)
        .merge(health_route)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
