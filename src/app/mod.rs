pub mod args;
mod commands;
mod plain;
mod setup;

pub use args::AppArgs;

use anyhow::Result;
use devconsole::Console;
use tracing::debug;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp {
        config,
        plain,
        relay,
    } = setup::prepare(args)?;

    let mut console = Console::new(&config);
    commands::register_demo_commands(&mut console);
    debug!(
        "Registered commands: {}",
        console.registry().names().collect::<Vec<_>>().join(", ")
    );

    if plain {
        let stdin = std::io::stdin();
        plain::run(&mut console, stdin.lock(), std::io::stdout())
    } else {
        crate::ui::run_tui(console, relay, &config).await
    }
}
