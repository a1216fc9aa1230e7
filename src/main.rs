use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // logs go to stderr, stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    command::exec().await;
}
