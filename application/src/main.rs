use std::{
    future::IntoFuture as _,
    io,
    sync::{Arc, OnceLock},
    time,
};

use axum::{
    extract::MatchedPath,
    routing::{get, on, MethodFilter},
    Extension, Router,
};
use axum_client_ip::InsecureClientIp;
use futures::{future, TryFutureExt as _};
use quote_api::{api, config, graphql, Args, Config, Service};
use service::infra::InMemory;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt as _},
    registry::LookupSpan,
    util::SubscriberInitExt as _,
};

/// Levels written into `stderr` rather than `stdout`.
const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

/// Configured maximum verbosity.
static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt_layer(io::stdout, false))
        .with(fmt_layer(io::stderr, true))
        .init();

    _ = start().await;
}

/// Creates a compact formatting [`Layer`] writing either the
/// [`STDERR_LEVELS`] or all the other levels into the provided `writer`.
fn fmt_layer<S, W>(writer: W, stderr: bool) -> impl Layer<S>
where
    S: log::Subscriber + for<'s> LookupSpan<'s>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(true)
        .with_thread_names(true)
        .with_writer(writer)
        .with_filter(filter_fn(move |meta| {
            let level = *meta.level();
            meta.is_span()
                || (STDERR_LEVELS.contains(&level) == stderr
                    && LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO)
                        >= level)
        }))
}

async fn start() -> Result<(), ()> {
    let Args {
        config,
        catalog: catalog_path,
    } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let config = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(config.log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let catalog_path =
        catalog_path.unwrap_or_else(|| config.catalog.path.clone());
    let catalog = InMemory::load(&catalog_path).await.map_err(|e| {
        log::error!("failed to load catalog from `{catalog_path}`: {e}");
    })?;
    {
        let snapshot = catalog.snapshot().await;
        log::info!(
            properties = snapshot.properties.len(),
            packages = snapshot.packages.len(),
            "loaded catalog from `{catalog_path}`"
        );
    }

    let (service, background) = Service::new(config.service(), catalog);
    let config::Server { host, port, cors } = config.server;

    let app = router(service, cors_layer(cors.origins)?);

    let listener =
        TcpListener::bind((host.as_str(), port)).await.map_err(|e| {
            log::error!("failed to listen on `{host}:{port}`: {e}");
        })?;
    log::info!("listening on `{host}:{port}`");

    future::try_join(
        axum::serve(listener, app)
            .into_future()
            .map_err(|e| log::error!("webserver failed: {e}")),
        background.into_future().map_err(|e| {
            log::error!("background task failed: {e}");
        }),
    )
    .await
    .map(|_| ())
}

/// Creates a [`CorsLayer`] allowing the provided `origins`.
fn cors_layer(origins: Vec<String>) -> Result<CorsLayer, ()> {
    origins.into_iter().try_fold(
        CorsLayer::new()
            .allow_methods([
                http::Method::GET,
                http::Method::OPTIONS,
                http::Method::POST,
            ])
            .allow_headers([http::header::CONTENT_TYPE]),
        |cors, origin| {
            let origin = origin
                .parse::<http::header::HeaderValue>()
                .map_err(|e| {
                    log::error!("`{origin}` is not a correct CORS origin: {e}");
                })?;
            Ok(cors.allow_origin(origin))
        },
    )
}

/// Creates a [`Router`] serving the GraphQL API of the provided [`Service`].
fn router(service: Service, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/graphql",
            on(MethodFilter::GET.or(MethodFilter::POST), graphql),
        )
        .route("/graphiql", get(juniper_axum::graphiql("/graphql", None)))
        .layer(Extension(Arc::new(api::schema())))
        .layer(Extension(service))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|r: &http::Request<_>| request_span(r))
                .on_response(
                    |r: &http::Response<_>,
                     dur: time::Duration,
                     span: &log::Span| record_response(r, dur, span),
                ),
        )
}

/// Creates a [`log::Span`] of the provided HTTP request.
fn request_span<B>(req: &http::Request<B>) -> log::Span {
    let uri = req.uri();
    log::info_span!(
        "HTTP request",
        http.client_ip = InsecureClientIp::from(req.headers(), req.extensions())
            .map(|ip| ip.0.to_string())
            .ok(),
        http.flavor = ?req.version(),
        http.host = uri.host(),
        http.method = req.method().as_str(),
        http.route = req
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str),
        http.scheme = uri.scheme().map(http::uri::Scheme::as_str),
        http.target = uri.path_and_query().map(http::uri::PathAndQuery::as_str),
        http.user_agent = req
            .headers()
            .get(http::header::USER_AGENT)
            .and_then(|h| h.to_str().ok()),
        http.status_code = log::field::Empty,
    )
}

/// Records the status and the duration of the provided HTTP response into
/// its `span`.
fn record_response<B>(
    resp: &http::Response<B>,
    dur: time::Duration,
    span: &log::Span,
) {
    let status = resp.status();
    _ = span.record("http.status_code", log::field::display(status.as_u16()));

    let duration = format!("{}ms", dur.as_millis());
    if status.is_client_error() || status.is_server_error() {
        log::error!(duration = %duration);
    } else {
        log::info!(duration = %duration);
    }
}
