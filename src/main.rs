use parlor::{analytics, config::Config, dispatcher::Dispatcher, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "parlor=info".into()),
    )
    .init();

  let config = Config::from_env();
  let analytics = analytics::sink_from(config.analytics_endpoint.clone());
  let dispatcher = Dispatcher::new(analytics);

  server::serve(&config.bind_addr(), dispatcher, &config.cors_origin).await
}
