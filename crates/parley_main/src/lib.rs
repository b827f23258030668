mod cli;
mod compare;
mod env;
mod log;
mod models;

use std::net::SocketAddr;

pub use cli::{Cli, Command, CompareArgs, PanelSpec};
pub use compare::{compare, Panel};
pub use log::{init_logger, LogLevel};
pub use models::render_models;
use parley_domain::Provider;
use parley_server::{ChatService, API};
use strum::IntoEnumIterator;
use tracing::warn;

fn service() -> anyhow::Result<ChatService> {
    let env = env::from_process()?;
    let service = ChatService::from_env(&env)?;
    for provider in Provider::iter().filter(|provider| !service.is_configured(*provider)) {
        warn!("{} is not set, {} requests will fail", provider.key_var(), provider.label());
    }
    Ok(service)
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve { host, port } => {
            API::new(service()?).launch(SocketAddr::new(host, port)).await
        }
        Command::Compare(args) => {
            let a = Panel::new("A", args.panel_a());
            let b = Panel::new("B", args.panel_b());
            let output = compare(&service()?, &args.prompt, &a, &b).await?;
            print!("{output}");
            Ok(())
        }
        Command::Models => {
            print!("{}", render_models());
            Ok(())
        }
    }
}
