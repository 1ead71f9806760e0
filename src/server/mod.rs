//! Development server with live reload and viewport-aware rendering
//!
//! Pages are served from the public directory. The injected client script
//! reports the browser width over the live-reload socket; each socket owns a
//! viewport subscription and asks the page to re-render through
//! `?viewport=<width>` when the layout variant flips.

use anyhow::Result;
use axum::{
    body::Body,
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Component, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::generator::{Generator, Route};
use crate::layout::ViewportSignal;
use crate::Site;

/// Live reload client; `__WIDTH__` is the width the page was rendered for
const LIVE_RELOAD_SCRIPT: &str = r#"
<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload?width=__WIDTH__');
    function report() {
        if (ws.readyState === 1) {
            ws.send('viewport:' + window.innerWidth);
        }
    }
    ws.onopen = report;
    window.addEventListener('resize', report);
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        } else if (msg.data.indexOf('render:') === 0) {
            var url = new URL(location.href);
            url.searchParams.set('viewport', msg.data.slice(7));
            location.replace(url.toString());
        }
    };
    ws.onclose = function() {
        console.log('Live reload disconnected. Attempting to reconnect...');
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
</body>
"#;

/// Server state
struct ServerState {
    public_dir: PathBuf,
    /// Site root prefix stripped before matching routes
    root: String,
    breakpoint: u32,
    default_width: u32,
    generator: RwLock<Arc<Generator>>,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

impl ServerState {
    fn generator(&self) -> Arc<Generator> {
        let guard = self.generator.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    fn replace_generator(&self, generator: Generator) {
        let mut guard = self.generator.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(generator);
    }

    /// Route for a request path, with the site root removed
    fn route_for(&self, path: &str) -> Option<Route> {
        let root = self.root.trim_end_matches('/');
        let relative = path.strip_prefix(root).unwrap_or(path);
        Route::from_url_path(relative)
    }
}

#[derive(Debug, Deserialize)]
struct ViewportQuery {
    viewport: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SocketQuery {
    width: Option<u32>,
}

/// Start the development server
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        public_dir: site.public_dir.clone(),
        root: site.config.root.clone(),
        breakpoint: site.config.viewport.breakpoint,
        default_width: site.config.viewport.default_width,
        generator: RwLock::new(Arc::new(Generator::new(site)?)),
        reload_tx,
        live_reload: watch,
    });

    let app = Router::new()
        .route("/__livereload", get(livereload_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::clone(&state));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    if watch {
        println!("Live reload enabled. Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let site = site.clone();
        let state = Arc::clone(&state);
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(&site, &state) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch content, static assets and config; regenerate and notify clients
fn watch_and_reload(site: &Site, state: &ServerState) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&site.content_dir, &site.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = site.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<_> = events
                    .iter()
                    .filter(|e| {
                        let path_str = e.path.to_string_lossy();
                        !path_str.contains(".git")
                            && !path_str.contains(".DS_Store")
                            && !path_str.ends_with('~')
                    })
                    .collect();

                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    tracing::info!("File changed: {}", event.path.display());
                }

                match regenerate(site) {
                    Ok((generator, outcome)) => {
                        match outcome {
                            Ok(()) => tracing::info!("Regenerated successfully"),
                            Err(e) => tracing::error!("{:#}", e),
                        }
                        // Pages that did render are on disk either way
                        state.replace_generator(generator);
                        let _ = state.reload_tx.send(());
                    }
                    Err(e) => tracing::error!("Generation failed: {:#}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Fresh site and generator so edited config and documents are re-read.
/// The generator comes back even when some pages failed, alongside that outcome.
fn regenerate(site: &Site) -> Result<(Generator, Result<()>)> {
    let site = Site::new(&site.base_dir)?;
    let generator = Generator::new(&site)?;
    let outcome = generator.generate(&generator.default_env());
    Ok((generator, outcome))
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<SocketQuery>,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    let signal = ViewportSignal::new(
        query.width.unwrap_or(state.default_width),
        state.breakpoint,
    );
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx, signal))
}

/// Forward reloads, and ask for a re-render when the client's layout flips
async fn handle_livereload_socket(
    mut socket: WebSocket,
    mut reload_rx: broadcast::Receiver<()>,
    signal: ViewportSignal,
) {
    let mut subscription = signal.subscribe();
    tracing::debug!(
        "Live reload client connected ({} layout)",
        subscription.layout().as_str()
    );

    loop {
        tokio::select! {
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            changed = subscription.changed() => {
                let Some(viewport) = changed else { break };
                let message = format!("render:{}", viewport.width);
                if socket.send(Message::Text(message)).await.is_err() {
                    break;
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(width) = parse_viewport_message(&text) {
                            signal.set(width);
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    drop(subscription);
    tracing::debug!(
        "Live reload client disconnected ({} listeners left)",
        signal.subscriber_count()
    );
}

/// `viewport:<width>` as sent by the client script
fn parse_viewport_message(text: &str) -> Option<u32> {
    text.strip_prefix("viewport:")?.trim().parse().ok()
}

/// Serve files, render `?viewport=` requests on demand, inject live reload
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ViewportQuery>,
    request: Request<Body>,
) -> Response {
    let path = request.uri().path().to_string();

    if let Some(width) = query.viewport {
        if let Some(route) = state.route_for(&path) {
            return render_on_demand(&state, route, width).await;
        }
    }

    let Some(file_path) = resolve_file(&state.public_dir, &path) else {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    };

    let is_html = file_path
        .extension()
        .map(|ext| ext == "html" || ext == "htm")
        .unwrap_or(false);

    if is_html && state.live_reload {
        match tokio::fs::read_to_string(&file_path).await {
            Ok(content) => {
                Html(inject_live_reload(&content, state.default_width)).into_response()
            }
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    } else {
        let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
        match service.try_call(request).await {
            Ok(response) => response.into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
        }
    }
}

async fn render_on_demand(state: &Arc<ServerState>, route: Route, width: u32) -> Response {
    let generator = state.generator();
    let rendered = tokio::task::spawn_blocking(move || {
        let env = generator.env_for_width(width);
        generator.render_route(&route, &env)
    })
    .await;

    match rendered {
        Ok(Ok(html)) => {
            let html = if state.live_reload {
                inject_live_reload(&html, width)
            } else {
                html
            };
            Html(html).into_response()
        }
        Ok(Err(e)) => {
            tracing::error!("{:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e)).into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Map a request path to a file under the public directory; `None` for paths
/// that would leave it
fn resolve_file(public_dir: &std::path::Path, path: &str) -> Option<PathBuf> {
    if path == "/" {
        return Some(public_dir.join("index.html"));
    }

    let clean_path = path.trim_start_matches('/');
    let inside = std::path::Path::new(clean_path)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !inside {
        return None;
    }

    let candidate = public_dir.join(clean_path);
    let file = if candidate.is_dir() {
        candidate.join("index.html")
    } else if candidate.exists() {
        candidate
    } else {
        let with_html = public_dir.join(format!("{}.html", clean_path));
        if with_html.exists() {
            with_html
        } else {
            candidate
        }
    };
    Some(file)
}

/// Inject the live reload script, telling it the width the page was rendered for
fn inject_live_reload(html: &str, width: u32) -> String {
    let script = LIVE_RELOAD_SCRIPT.replace("__WIDTH__", &width.to_string());
    if html.contains("</body>") {
        html.replace("</body>", &script)
    } else {
        format!("{}{}", html, script)
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_viewport_message() {
        assert_eq!(parse_viewport_message("viewport:767"), Some(767));
        assert_eq!(parse_viewport_message("viewport: 1280 "), Some(1280));
        assert_eq!(parse_viewport_message("viewport:wide"), None);
        assert_eq!(parse_viewport_message("reload"), None);
    }

    #[test]
    fn test_inject_live_reload() {
        let html = inject_live_reload("<html><body><p>x</p></body></html>", 767);
        assert!(html.contains("/__livereload?width=767"));
        assert!(html.ends_with("</html>"));
        assert_eq!(html.matches("</body>").count(), 1);
    }

    #[test]
    fn test_resolve_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("blog")).unwrap();
        assert_eq!(
            resolve_file(dir.path(), "/"),
            Some(dir.path().join("index.html"))
        );
        assert_eq!(
            resolve_file(dir.path(), "/blog/"),
            Some(dir.path().join("blog/index.html"))
        );
    }

    #[test]
    fn test_resolve_file_stays_inside_public() {
        let dir = tempfile::TempDir::new().unwrap();
        let public = dir.path().join("public");
        std::fs::create_dir_all(&public).unwrap();
        std::fs::write(dir.path().join("secret.html"), "<p>x</p>").unwrap();

        assert_eq!(resolve_file(&public, "/../secret.html"), None);
        assert_eq!(resolve_file(&public, "/blog/../../secret"), None);
        assert_eq!(resolve_file(&public, "/./index.html"), None);
    }

    #[test]
    fn test_regenerate_keeps_pages_that_render() {
        let dir = tempfile::TempDir::new().unwrap();
        crate::commands::init::init_site(dir.path()).unwrap();
        std::fs::write(
            dir.path().join("content/blog/roto.json"),
            r#"{"title": "sin cerrar""#,
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let (generator, outcome) = regenerate(&site).unwrap();
        assert!(outcome.unwrap_err().to_string().contains("/blog/post/roto/"));
        assert!(dir.path().join("public/index.html").is_file());
        assert!(generator
            .routes()
            .unwrap()
            .contains(&Route::BlogPost {
                slug: "roto".to_string()
            }));
    }
}
