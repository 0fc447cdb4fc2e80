#[tokio::main]
async fn main() -> anyhow::Result<()> {
    promptpal_server::start().await
}
