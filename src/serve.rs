//! HTTP serve mode.
//!
//! Serves the portfolio as a fixed-route static site: the rendered page at
//! `/`, the two embedded assets, 404 for everything else. The in-page
//! anchors (`#home` … `#contact`) are the only addressable API. The page is
//! rendered once at startup and shared immutably; freshness is handled with
//! content-hash ETags and `Last-Modified` so reloads are cheap.

use std::io;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use tokio::signal;
use tower_http::compression::CompressionLayer;

use crate::content;
use crate::html;
use crate::web_assets;

/// Maximum number of consecutive ports to try before giving up.
const MAX_PORT_ATTEMPTS: u16 = 100;

/// Shared application state passed to all request handlers via `Arc<AppState>`.
pub struct AppState {
    /// The fully rendered page.
    pub page: String,
    /// Strong ETag of the rendered page.
    pub page_etag: String,
    /// ETags for the embedded assets.
    pub css_etag: String,
    pub js_etag: String,
    /// Server start time, used as `Last-Modified` for every response (the
    /// content is compiled in, so it cannot be newer than the process).
    pub started: SystemTime,
    /// Pre-formatted `Last-Modified` header value.
    pub last_modified: String,
}

impl AppState {
    pub fn new() -> Self {
        let page = html::build_page(&content::page());
        let started = SystemTime::now();
        Self {
            page_etag: content_etag(page.as_bytes()),
            css_etag: content_etag(web_assets::CSS.as_bytes()),
            js_etag: content_etag(web_assets::JS.as_bytes()),
            page,
            started,
            last_modified: httpdate::fmt_http_date(started),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Attempt to bind a TCP listener on `bind_addr` starting at `start_port`.
///
/// On `EADDRINUSE` the port is incremented by one and the attempt is retried
/// up to `MAX_PORT_ATTEMPTS` times. Any other OS error causes an immediate
/// failure without further retries.
pub fn bind_with_retry(bind_addr: &str, start_port: u16) -> Result<(TcpListener, u16), String> {
    let mut port = start_port;
    for _ in 0..MAX_PORT_ATTEMPTS {
        let addr = format!("{}:{}", bind_addr, port);
        match TcpListener::bind(&addr) {
            Ok(listener) => {
                eprintln!("[bind] success port={}", port);
                return Ok((listener, port));
            }
            Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
                let next = port.wrapping_add(1);
                eprintln!("[bind] EADDRINUSE, trying {}", next);
                port = next;
            }
            Err(e) => {
                return Err(format!("bind {}:{} failed: {}", bind_addr, port, e));
            }
        }
    }
    Err(format!(
        "exhausted {} port candidates starting at {}; all ports in use",
        MAX_PORT_ATTEMPTS, start_port,
    ))
}

// ---------------------------------------------------------------------------
// Freshness helpers
// ---------------------------------------------------------------------------

/// Strong ETag from the body bytes: quoted blake3 hash, hex-encoded.
pub fn content_etag(body: &[u8]) -> String {
    format!("\"{}\"", hex::encode(blake3::hash(body).as_bytes()))
}

/// True when any comma-separated candidate in an `If-None-Match` value
/// matches `etag` (or the candidate is `*`).
pub fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    if_none_match
        .split(',')
        .map(str::trim)
        .any(|candidate| candidate == "*" || candidate == etag)
}

/// True when `modified` is not newer than the `If-Modified-Since` value.
///
/// HTTP dates carry whole seconds, so the comparison truncates `modified`
/// to second precision.
pub fn unmodified_since(if_modified_since: &str, modified: SystemTime) -> bool {
    let Ok(since) = httpdate::parse_http_date(if_modified_since) else {
        return false;
    };
    let to_secs = |t: SystemTime| {
        t.duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs()
    };
    to_secs(modified) <= to_secs(since)
}

/// Evaluate the conditional headers of a request against the state's
/// validators. `If-None-Match` takes precedence over `If-Modified-Since`.
fn request_is_fresh(headers: &HeaderMap, etag: &str, modified: SystemTime) -> bool {
    if let Some(inm) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
    {
        return etag_matches(inm, etag);
    }
    if let Some(ims) = headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|v| v.to_str().ok())
    {
        return unmodified_since(ims, modified);
    }
    false
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// 200 with validators, nosniff, and the given content type.
fn content_response(state: &AppState, content_type: &'static str, etag: &str, body: &str) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::ETAG, etag)
        .header(header::LAST_MODIFIED, state.last_modified.as_str())
        .header("X-Content-Type-Options", "nosniff")
        .body(Body::from(body.to_owned()))
        .expect("content response builder is infallible")
}

/// 304 Not Modified, empty body, validators preserved.
fn not_modified_response(state: &AppState, etag: &str) -> Response {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header(header::ETAG, etag)
        .header(header::LAST_MODIFIED, state.last_modified.as_str())
        .header("X-Content-Type-Options", "nosniff")
        .body(Body::empty())
        .expect("not_modified response builder is infallible")
}

/// 404 Not Found with mandatory security headers.
fn not_found_response() -> Response {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header("X-Content-Type-Options", "nosniff")
        .body(Body::from("Not Found"))
        .expect("not_found response builder is infallible")
}

/// Serve one fixed document with conditional-GET handling.
fn serve_fixed(
    state: &AppState,
    headers: &HeaderMap,
    path: &'static str,
    content_type: &'static str,
    etag: &str,
    body: &str,
) -> Response {
    if request_is_fresh(headers, etag, state.started) {
        eprintln!("[request] path={path} mode=not-modified");
        return not_modified_response(state, etag);
    }
    eprintln!("[request] path={path} mode=ok");
    content_response(state, content_type, etag, body)
}

// ---------------------------------------------------------------------------
// Axum handlers
// ---------------------------------------------------------------------------

async fn page_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    serve_fixed(
        &state,
        &headers,
        "/",
        "text/html; charset=utf-8",
        &state.page_etag,
        &state.page,
    )
}

async fn css_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    serve_fixed(
        &state,
        &headers,
        "/assets/folio.css",
        "text/css; charset=utf-8",
        &state.css_etag,
        web_assets::CSS,
    )
}

async fn js_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    serve_fixed(
        &state,
        &headers,
        "/assets/folio.js",
        "text/javascript; charset=utf-8",
        &state.js_etag,
        web_assets::JS,
    )
}

async fn fallback_handler(req: Request) -> Response {
    eprintln!("[request] path={} mode=not-found", req.uri().path());
    not_found_response()
}

// ---------------------------------------------------------------------------
// Server entry point
// ---------------------------------------------------------------------------

/// Start the HTTP server.
///
/// Binds to `bind_addr` starting at `start_port`, retrying on `EADDRINUSE`
/// up to 100 times. The server shuts down cleanly when SIGINT (Ctrl+C) is
/// received.
pub async fn run_serve(bind_addr: String, start_port: u16) -> io::Result<()> {
    let state = Arc::new(AppState::new());

    let (std_listener, bound_port) = bind_with_retry(&bind_addr, start_port).map_err(|msg| {
        eprintln!("Error: {}", msg);
        io::Error::new(io::ErrorKind::AddrInUse, msg)
    })?;

    std_listener.set_nonblocking(true)?;
    let listener = tokio::net::TcpListener::from_std(std_listener)?;

    let app = Router::new()
        .route("/", get(page_handler))
        .route("/assets/folio.css", get(css_handler))
        .route("/assets/folio.js", get(js_handler))
        .fallback(fallback_handler)
        .layer(CompressionLayer::new())
        .with_state(state);

    println!("folio serve");
    println!("url:   http://{}:{}/", bind_addr, bound_port);
    eprintln!("[serve] listening on {}:{}", bind_addr, bound_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            signal::ctrl_c()
                .await
                .expect("failed to install SIGINT handler");
            eprintln!("[shutdown] complete");
        })
        .await
        .map_err(io::Error::other)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
