//! todo-api バイナリのエントリポイント
//! HTTP サーバを起動します。

use todo_api::app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // RUST_LOG 環境変数で制御可能。未設定時は info（アクセスログを含む）
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ポートは環境変数 PORT（なければ 8000）
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    tracing::info!(%addr, "server starting");

    axum::serve(listener, app())
        .await
        .expect("server error");
}
