//! Todo HTTP API（axum）
//!
//! インメモリの Todo コレクションに対する list / create / get-by-id を提供します。
//! 共有状態は [`TodoStore`] ただ 1 つで、プロセス起動時に構築して
//! 全ハンドラへ State として注入します（グローバル変数は使いません）。

use std::sync::Arc;

use axum::Router;
use todo_domain::TodoStore;

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use error::ApiError;

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: Arc::new(TodoStore::new()),
        }
    }
}

/// ルータを構築して返します（新規ストア付き）。
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// 外部から状態を注入できる版。テストでは新規ストアを渡して使います。
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .fallback(router::dispatch)
        .layer(axum::middleware::from_fn(middleware::access_log))
        .with_state(state)
}
