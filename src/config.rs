use std::env;

use anyhow::{Context, Result};

/// Longest fixture window the proxy will request
pub const MAX_LOOKAHEAD_DAYS: u32 = 365;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// AllSportsAPI access key
    pub api_key: String,

    /// AllSportsAPI football base URL
    pub api_base_url: String,

    /// Address the proxy binds to
    pub bind_addr: String,

    /// Port the proxy listens on
    pub port: u16,

    /// Days after today included in the fixture window
    pub lookahead_days: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            api_key: env::var("FOOTBALL_API_KEY").context("FOOTBALL_API_KEY must be set")?,

            api_base_url: env::var("FOOTBALL_API_URL")
                .unwrap_or_else(|_| "https://apiv2.allsportsapi.com/football".to_string()),

            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,

            lookahead_days: parse_lookahead_days(
                &env::var("LOOKAHEAD_DAYS").unwrap_or_else(|_| "15".to_string()),
            )?,
        })
    }

    /// Socket address string for the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Parse `LOOKAHEAD_DAYS`, accepting `0..=MAX_LOOKAHEAD_DAYS`
pub fn parse_lookahead_days(value: &str) -> Result<u32> {
    let days: u32 = value
        .trim()
        .parse()
        .context("LOOKAHEAD_DAYS must be a non-negative whole number")?;

    if days > MAX_LOOKAHEAD_DAYS {
        anyhow::bail!(
            "LOOKAHEAD_DAYS must be at most {}, got {}",
            MAX_LOOKAHEAD_DAYS,
            days
        );
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookahead_days() {
        assert_eq!(parse_lookahead_days("15").unwrap(), 15);
        assert_eq!(parse_lookahead_days("0").unwrap(), 0);
        assert_eq!(parse_lookahead_days("365").unwrap(), 365);
    }

    #[test]
    fn test_parse_lookahead_days_rejects_out_of_range() {
        assert!(parse_lookahead_days("-1").is_err());
        assert!(parse_lookahead_days("366").is_err());
        assert!(parse_lookahead_days("100000000").is_err());
        assert!(parse_lookahead_days("fifteen").is_err());
    }
}
