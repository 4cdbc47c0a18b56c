use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_booking::{config::Config, ui, App};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting movie ticket booking system");

    let mut app = App::new(config);
    ui::run(&mut app).context("terminal menu failed")?;

    info!("Shutting down");
    Ok(())
}
