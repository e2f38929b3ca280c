use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

use classtrack::config::{AppConfig, CorsConfig};
use classtrack::models::AppStartTime;
use classtrack::routes;
use classtrack::runtime::{lifetime, scheduler};
use classtrack::utils::{json_error_handler, query_error_handler};

/// 初始化 tracing 日志，开发环境带源码位置，生产环境输出 JSON
/// 返回的 guard 在 main 存活期间持有，保证异步写入不丢日志
fn init_tracing(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .event_format(
            tracing_subscriber::fmt::format()
                .with_level(true)
                .with_ansi(true),
        );

    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }

    guard
}

/// 按配置构建 CORS 规则，列表含 "*" 时放开对应维度
fn build_cors(cors: &CorsConfig) -> Cors {
    let mut rules = Cors::default().max_age(cors.max_age);

    if cors.allowed_origins.iter().any(|o| o == "*") {
        rules = rules.allow_any_origin();
    } else {
        for origin in &cors.allowed_origins {
            rules = rules.allowed_origin(origin);
        }
    }

    if cors.allowed_methods.iter().any(|m| m == "*") {
        rules = rules.allow_any_method();
    } else {
        rules = rules.allowed_methods(cors.allowed_methods.iter().map(String::as_str));
    }

    if cors.allowed_headers.iter().any(|h| h == "*") {
        rules = rules.allow_any_header();
    } else {
        rules = rules.allowed_headers(cors.allowed_headers.iter().map(String::as_str));
    }

    rules
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let app_start_time = AppStartTime::now();

    setup_panic!();
    AppConfig::init().expect("Configuration failed to load");
    let config = AppConfig::get();
    let _log_guard = init_tracing(config);

    warn!(
        "{} v{} starting up...",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let startup = lifetime::startup::prepare_server_startup().await;
    let storage = startup.storage.clone();
    let cache = startup.cache.clone();

    let boot_ms = (chrono::Utc::now() - app_start_time.start_datetime).num_milliseconds();
    debug!("Startup preparation finished in {boot_ms} ms");

    // 启动提醒扫描定时任务
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let scheduler_handle = tokio::spawn(scheduler::run_reminder_scheduler(
        storage.clone(),
        shutdown_rx,
    ));

    warn!("Serving with {} worker threads", config.server.workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&config.cors))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add((
                        "Keep-Alive",
                        format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
                    ))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            // 参数解析失败也走统一的响应信封
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(cache.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(
                config.server.limits.max_payload_size,
            ))
            .configure(routes::configure_auth_routes)
            .configure(routes::configure_user_routes)
            .configure(routes::configure_classes_routes)
            .configure(routes::configure_class_members_routes)
            .configure(routes::configure_attendance_routes)
            .configure(routes::configure_events_routes)
            .configure(routes::configure_reminders_routes)
            .configure(routes::configure_notifications_routes)
            .configure(routes::configure_system_routes)
            // 前端静态资源兜底，必须注册在最后
            .configure(routes::configure_frontend_routes)
    })
    .keep_alive(std::time::Duration::from_secs(
        config.server.timeouts.keep_alive,
    ))
    .client_request_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_request,
    ))
    .client_disconnect_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    #[cfg(unix)]
    let server = if let Some(socket_path) = config.unix_socket_path() {
        warn!("Listening on Unix socket {}", socket_path);
        // 上次退出遗留的套接字文件会导致绑定失败
        if std::path::Path::new(socket_path).exists() {
            std::fs::remove_file(socket_path)?;
        }
        server.bind_uds(socket_path)?
    } else {
        let bind_address = config.server_bind_address();
        warn!("Listening on http://{}", bind_address);
        server.bind(bind_address)?
    };

    #[cfg(not(unix))]
    let server = {
        let bind_address = config.server_bind_address();
        warn!("Listening on http://{}", bind_address);
        server.bind(bind_address)?
    };

    tokio::select! {
        res = server.run() => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {}
    }

    // 通知定时任务退出并等待收尾
    warn!("Server stopped, flushing background tasks...");
    let _ = shutdown_tx.send(true);
    let _ = scheduler_handle.await;

    Ok(())
}
