use pulse::configuration::get_configuration;
use pulse::startup::build;
use pulse::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("pulse".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration()?;
    let app = build(config)?;
    app.run().await?;

    Ok(())
}
