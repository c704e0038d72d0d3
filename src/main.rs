#[cfg(feature = "cli")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mistral_agent_rs::cli::run().await
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    std::process::exit(1);
}
