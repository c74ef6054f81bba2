//! ルーティング
//!
//! リクエストごとに (method, path) を固定のルートパターン集合へ分類し、
//! 対応するハンドラへ振り分けます。分類は純粋関数で、リクエスト間で
//! 保持する状態はありません。正規表現ではなくセグメント照合で判定します。

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};

use crate::{error::ApiError, handlers, AppState};

const COLLECTION_PATH: &str = "/api/v1/todos";

/// パスの分類結果
#[derive(Debug, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/healthz`（完全一致のみ）
    Health,
    /// `/api/v1/todos` + 末尾スラッシュ 0 個以上
    Collection,
    /// `/api/v1/todos/<数字列>` + 末尾スラッシュ 0 個以上
    Item { id: &'a str },
    Unknown,
}

/// パスをルートパターンへ分類する
pub fn classify(path: &str) -> Route<'_> {
    if path == "/healthz" {
        return Route::Health;
    }

    let Some(rest) = path.strip_prefix(COLLECTION_PATH) else {
        return Route::Unknown;
    };

    // 直後が空か、スラッシュのみ → コレクション
    if rest.bytes().all(|b| b == b'/') {
        return Route::Collection;
    }

    // 単一アイテムはスラッシュちょうど 1 つ + 数字列 + 末尾スラッシュ 0 個以上
    let Some(rest) = rest.strip_prefix('/') else {
        return Route::Unknown;
    };
    let id = rest.trim_end_matches('/');
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        return Route::Item { id };
    }

    Route::Unknown
}

/// ディスパッチハンドラ
///
/// 既知パスへの未対応メソッドは 405、未知パスは 404（いずれもボディなし）。
pub async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let result = match (classify(&path), method.as_str()) {
        (Route::Health, "GET") => handlers::health().await,
        (Route::Collection, "GET") => handlers::list_todos(&state.store).await,
        (Route::Collection, "POST") => handlers::create_todo(&state.store, req).await,
        (Route::Item { id }, "GET") => handlers::get_todo_by_id(&state.store, id).await,
        (Route::Unknown, _) => Err(ApiError::NotFound),
        (_, _) => Err(ApiError::MethodNotAllowed),
    };

    result.unwrap_or_else(IntoResponse::into_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthz_matches_exactly() {
        assert_eq!(classify("/healthz"), Route::Health);
        assert_eq!(classify("/healthz/"), Route::Unknown);
        assert_eq!(classify("/healthzz"), Route::Unknown);
    }

    #[test]
    fn collection_tolerates_trailing_slashes() {
        assert_eq!(classify("/api/v1/todos"), Route::Collection);
        assert_eq!(classify("/api/v1/todos/"), Route::Collection);
        assert_eq!(classify("/api/v1/todos///"), Route::Collection);
    }

    #[test]
    fn item_requires_digit_segment() {
        assert_eq!(classify("/api/v1/todos/1"), Route::Item { id: "1" });
        assert_eq!(classify("/api/v1/todos/42/"), Route::Item { id: "42" });
        assert_eq!(classify("/api/v1/todos/42///"), Route::Item { id: "42" });
        assert_eq!(classify("/api/v1/todos/abc"), Route::Unknown);
        assert_eq!(classify("/api/v1/todos/1x"), Route::Unknown);
        assert_eq!(classify("/api/v1/todos/1/2"), Route::Unknown);
        // 数字の前のスラッシュはちょうど 1 つ
        assert_eq!(classify("/api/v1/todos//1"), Route::Unknown);
    }

    #[test]
    fn unrelated_paths_are_unknown() {
        assert_eq!(classify("/"), Route::Unknown);
        assert_eq!(classify("/api/v1/todosx"), Route::Unknown);
        assert_eq!(classify("/api/v2/todos"), Route::Unknown);
        assert_eq!(classify("/api/v1"), Route::Unknown);
    }
}
