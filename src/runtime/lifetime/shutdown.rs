//! 停机信号监听

use tokio::signal;
use tracing::warn;

/// 阻塞到收到停机信号为止，Unix 下同时监听 Ctrl+C 和 SIGTERM
pub async fn listen_for_shutdown() {
    #[cfg(unix)]
    {
        let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}, falling back to Ctrl+C only");
                wait_for_ctrl_c().await;
                return;
            }
        };

        tokio::select! {
            _ = wait_for_ctrl_c() => {}
            _ = sigterm.recv() => {
                warn!("SIGTERM received, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {e}");
        // 信号监听失败时挂起，交给外层的服务器退出分支结束进程
        std::future::pending::<()>().await;
    }
    warn!("Ctrl+C received, shutting down...");
}
