use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn leptos_options() -> LeptosOptions {
    // The not-found fallback renders Leptos views, which need a global executor.
    let _ = any_spawner::Executor::init_tokio();
    LeptosOptions::builder().output_name("supreme_site").build()
}

fn site(dir: PathBuf) -> Router {
    let config = ServerConfig {
        bind_addr: crate::config::DEFAULT_BIND_ADDR,
        port: crate::config::DEFAULT_PORT,
        assets_dir: dir,
    };
    app(&config, leptos_options())
}

/// Fresh asset directory holding a single logo file.
fn asset_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("site-assets-{name}-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("passenger")).expect("create asset dir");
    std::fs::write(dir.join("logo.webp"), b"RIFF0000WEBP").expect("write logo");
    std::fs::write(dir.join("passenger/passenger-front.mp4"), b"\0\0\0\x18ftypmp42").expect("write clip");
    dir
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).expect("request");
    router.oneshot(request).await.expect("router is infallible").status()
}

async fn fetch(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).expect("request");
    let response = router.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_is_mounted() {
    let dir = asset_dir("healthz");
    assert_eq!(status_of(static_routes(&dir, leptos_options()), "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn static_assets_are_served_from_assets_dir() {
    let dir = asset_dir("serve");
    assert_eq!(status_of(static_routes(&dir, leptos_options()), "/logo.webp").await, StatusCode::OK);
    assert_eq!(status_of(static_routes(&dir, leptos_options()), "/passenger/passenger-front.mp4").await, StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let dir = asset_dir("missing");
    assert_eq!(status_of(static_routes(&dir, leptos_options()), "/commercial/commercial-engine.mp4").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn site_serves_healthz_and_assets() {
    let dir = asset_dir("site");
    assert_eq!(status_of(site(dir.clone()), "/healthz").await, StatusCode::OK);
    assert_eq!(status_of(site(dir), "/logo.webp").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_page_renders_not_found_view() {
    let dir = asset_dir("unknown");
    let (status, body) = fetch(site(dir), "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"), "body: {body}");
}
