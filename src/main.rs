#[tokio::main]
async fn main() {
    inquiry_backend::run().await;
}
