use axum::{http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

pub async fn logger<B>(mut req: Request<B>, next: Next<B>) -> Response {
    // 生成 request_id，放入请求扩展供后续处理器使用
    let request_id = Uuid::new_v4();
    req.extensions_mut().insert(request_id);

    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let elapsed = start.elapsed().as_millis();

    info!(request_id = %request_id, method = %method, uri = %uri, status = status, elapsed_ms = elapsed, "Request log");
    response
}
