use axum::response::Html;

const INDEX_PAGE: &str = include_str!("../../assets/index.html");

// The form page; everything else happens through /api/suggestions
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
