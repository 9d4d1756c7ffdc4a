//! Environment-driven configuration, read once at startup.

#[derive(Debug, Clone)]
pub struct Config {
  /// Listen port (`PORT`, default 3000).
  pub port: u16,
  /// Allowed CORS origin (`CORS_ORIGIN`, default `*`).
  pub cors_origin: String,
  /// Analytics endpoint (`ANALYTICS_ENDPOINT`); absence disables analytics.
  pub analytics_endpoint: Option<String>,
}

impl Config {
  pub fn from_env() -> Self {
    let port = std::env::var("PORT")
      .ok()
      .and_then(|v| v.parse().ok())
      .unwrap_or(3000);
    let cors_origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());
    let analytics_endpoint = std::env::var("ANALYTICS_ENDPOINT").ok().filter(|v| !v.is_empty());
    Self {
      port,
      cors_origin,
      analytics_endpoint,
    }
  }

  pub fn bind_addr(&self) -> String {
    format!("0.0.0.0:{}", self.port)
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      port: 3000,
      cors_origin: "*".to_string(),
      analytics_endpoint: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_binds_port_3000() {
    let config = Config::default();
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    assert!(config.analytics_endpoint.is_none());
  }
}
