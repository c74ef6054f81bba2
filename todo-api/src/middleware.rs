//! アクセスログミドルウェア
//!
//! リクエスト完了ごとに 1 行のサマリログ
//! （メソッド・パス・ステータス・所要時間・レスポンスサイズ）を出力します。
//! 機能契約の一部ではなく、ハンドラの結果には影響しません。

use std::time::Instant;

use axum::{body::HttpBody, extract::Request, middleware::Next, response::Response};

pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    // レスポンスボディはすべて全量バッファ済みなので exact が取れる
    let bytes = response.body().size_hint().exact().unwrap_or(0);
    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms,
        bytes,
        "request completed"
    );

    response
}
