use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

const INDEX_HTML: &str = include_str!("../static/index.html");

const STATIC_FILES: &[(&str, &str)] = &[
    ("script.js", include_str!("../static/script.js")),
    ("style.css", include_str!("../static/style.css")),
];

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn static_file(Path(name): Path<String>) -> Response {
    match STATIC_FILES.iter().find(|(file, _)| *file == name) {
        Some((file, body)) => {
            let mime = mime_guess::from_path(file).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.to_string())],
                *body,
            )
                .into_response()
        }
        None => {
            let payload = json!({ "error": format!("static file '{name}' not found") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
