use clap::Parser;
use parley::{init_logger, run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logger(cli.log_level);
    run(cli.command).await
}
