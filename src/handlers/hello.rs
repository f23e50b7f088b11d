/// GET /hello handler - fixed plain-text greeting
pub async fn hello_handler() -> &'static str {
    "Hello World"
}
