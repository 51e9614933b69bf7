use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use contracts::shared::format::group_thousands;

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль время, длительность, размер ответа, статус и путь.
/// Ошибочные ответы дополнительно уходят в tracing.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Тело читаем целиком, чтобы узнать размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("{} {}: cannot read response body: {}", method, uri.path(), e);
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let duration = start.elapsed();
    // Голубой для 2xx, коричневый для остальных
    let color_code = if parts.status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>10} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        duration.as_millis(),
        group_thousands(&bytes.len().to_string()),
        status,
        method,
        uri.path()
    );

    if parts.status.is_client_error() || parts.status.is_server_error() {
        tracing::warn!("{} {} -> {}", method, uri.path(), status);
    }

    Response::from_parts(parts, Body::from(bytes))
}
