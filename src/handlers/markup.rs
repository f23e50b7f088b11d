use axum::response::Html;

use crate::markup::{Element, document};

/// GET /kotlinxhtml handler - HTML assembled in code, no template engine
pub async fn markup_handler() -> Html<String> {
    let body = Element::new("body")
        .child(Element::new("h1").attr("id", "title").text("Title"))
        .child(
            Element::new("div")
                .attr("id", "greeting")
                .text("Hello World"),
        )
        .child(
            Element::new("div")
                .attr("id", "generated")
                .text("Generated markup"),
        );

    Html(document("Async World", body))
}
