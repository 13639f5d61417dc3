use clap::Parser as _;
use postdeck::{
    cli::{Cli, Command},
    config::{self, Config},
    App,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::ConfigTemplate) => {
            config::print_config_template();
            return Ok(());
        }
        Some(Command::ConfigInit) => {
            let config_path = config::init_config(cli.args.config_path)?;
            println!("Configuration file created: {}", config_path.display());
            return Ok(());
        }
        _ => (),
    }

    let config = Config::load(cli.args.config_path)?;
    App::boot(&config)?.run(cli.command).await?;

    Ok(())
}
