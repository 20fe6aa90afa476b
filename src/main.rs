#[tokio::main]
async fn main() -> anyhow::Result<()> {
    enrollment_lib::run().await
}
