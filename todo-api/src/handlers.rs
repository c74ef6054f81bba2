//! 操作ハンドラ（list / create / get-by-id / health）
//!
//! ルータから呼ばれる request → response の純粋なロジック。
//! 共有状態へのアクセスはすべて [`TodoStore`] 経由で行います。

use axum::{
    body,
    extract::Request,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use todo_domain::{NewTodo, TodoStore};

use crate::error::ApiError;

/// リクエストボディの読み取り上限
const MAX_BODY_BYTES: usize = 64 * 1024;

/// レスポンスの JSON シリアライズ。レコード形状は固定なので
/// 失敗は呼び出し側の過失ではなく 500（プログラミング上の欠陥）。
fn json_response(status: StatusCode, body: &impl serde::Serialize) -> Result<Response, ApiError> {
    let json = serde_json::to_vec(body).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], json).into_response())
}

/// GET /healthz — 200、ボディなし
pub async fn health() -> Result<Response, ApiError> {
    Ok(StatusCode::OK.into_response())
}

/// GET /api/v1/todos — 全レコードを挿入順で返す
pub async fn list_todos(store: &TodoStore) -> Result<Response, ApiError> {
    json_response(StatusCode::OK, &store.list())
}

/// POST /api/v1/todos — レコードを 1 件作成して 201 で返す
///
/// ボディがデコードできない場合はストアに触れず 400。
/// `id`・タイムスタンプはサーバ側で採番し、`isComplete` は `false` に強制する。
pub async fn create_todo(store: &TodoStore, req: Request) -> Result<Response, ApiError> {
    let bytes = body::to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ApiError::BadRequest(format!("failed to read body: {e}")))?;
    let input: NewTodo = serde_json::from_slice(&bytes)?;

    let todo = store.create(input);
    json_response(StatusCode::CREATED, &todo)
}

/// GET /api/v1/todos/{id} — ID で 1 件取得
///
/// ルータは数字のみのセグメントを渡してくるが、u64 に収まらない値は
/// ここで 400 になる。該当レコードなしは 404。
pub async fn get_todo_by_id(store: &TodoStore, raw_id: &str) -> Result<Response, ApiError> {
    let id: u64 = raw_id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid todo id: {raw_id}")))?;

    match store.get_by_id(id) {
        Some(todo) => json_response(StatusCode::OK, &todo),
        None => Err(ApiError::NotFound),
    }
}
