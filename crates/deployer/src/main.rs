#[tokio::main(flavor = "current_thread")]
async fn main() {
    deployer::start(std::env::args()).await;
}
