//! 前端静态资源路由
//!
//! rust-embed 把 frontend/dist/ 的构建产物打进二进制，
//! 未命中的路径回落到 index.html 交给前端路由处理。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct WebAssets;

/// 扩展名 -> (Content-Type, 是否可长缓存)
///
/// 带内容 hash 的产物（脚本、样式、图片、字体）标记 immutable，
/// HTML 与 manifest 之类的入口文件始终重新验证。
const ASSET_POLICY: &[(&str, &str, bool)] = &[
    ("html", "text/html; charset=utf-8", false),
    ("js", "application/javascript; charset=utf-8", true),
    ("mjs", "application/javascript; charset=utf-8", true),
    ("css", "text/css; charset=utf-8", true),
    ("json", "application/json; charset=utf-8", false),
    ("map", "application/json", false),
    ("png", "image/png", true),
    ("jpg", "image/jpeg", true),
    ("jpeg", "image/jpeg", true),
    ("gif", "image/gif", true),
    ("svg", "image/svg+xml", true),
    ("webp", "image/webp", true),
    ("ico", "image/x-icon", true),
    ("woff", "font/woff", true),
    ("woff2", "font/woff2", true),
    ("ttf", "font/ttf", true),
    ("txt", "text/plain; charset=utf-8", false),
    ("wasm", "application/wasm", true),
];

fn asset_policy(path: &str) -> (&'static str, bool) {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    ASSET_POLICY
        .iter()
        .find(|(e, _, _)| *e == ext)
        .map(|(_, mime, cacheable)| (*mime, *cacheable))
        .unwrap_or(("application/octet-stream", false))
}

fn load_asset(path: &str) -> Option<Vec<u8>> {
    WebAssets::get(path).map(|f| f.data.to_vec())
}

const MISSING_FRONTEND_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>ClassTrack</title></head>
<body>
<h1>Frontend not built</h1>
<p>Run <code>cd frontend &amp;&amp; npm run build</code> and rebuild the server.</p>
</body>
</html>"#;

/// 静态资源请求入口，带 SPA fallback
pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let requested = req.match_info().query("tail").trim_start_matches('/');

    let (data, resolved) = if requested.is_empty() {
        (load_asset("index.html"), "index.html")
    } else if let Some(data) = load_asset(requested) {
        (Some(data), requested)
    } else {
        // 前端路由的深链接，统一回 index.html
        (load_asset("index.html"), "index.html")
    };

    let Some(data) = data else {
        return Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(MISSING_FRONTEND_PAGE));
    };

    let (mime, cacheable) = asset_policy(resolved);
    let cache_control = if cacheable {
        "public, max-age=31536000, immutable"
    } else {
        "no-cache, no-store, must-revalidate"
    };

    Ok(HttpResponse::Ok()
        .content_type(mime)
        .insert_header(("Cache-Control", cache_control))
        .body(data))
}

/// 兜底路由，挂在所有 API scope 之后
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_policy_mime() {
        assert_eq!(asset_policy("index.html").0, "text/html; charset=utf-8");
        assert_eq!(
            asset_policy("assets/app-3f2a.js").0,
            "application/javascript; charset=utf-8"
        );
        assert_eq!(asset_policy("logo.svg").0, "image/svg+xml");
        assert_eq!(asset_policy("unknown.xyz").0, "application/octet-stream");
    }

    #[test]
    fn test_asset_policy_caching() {
        assert!(asset_policy("assets/app-3f2a.js").1);
        assert!(asset_policy("fonts/inter.woff2").1);
        assert!(!asset_policy("index.html").1);
        assert!(!asset_policy("manifest.json").1);
    }
}
