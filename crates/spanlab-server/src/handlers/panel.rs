use axum::response::Html;

/// Control panel. UI glue only; the JSON routes are the product.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/panel.html"))
}
