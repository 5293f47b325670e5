use serde::Deserialize;
use std::env;
use validator::Validate;

const ENV_PREFIX: &str = "MOVIE_BOOKING";

// Main configuration container
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub app: AppConfig,
    #[validate(nested)]
    pub theatre: TheatreConfig,
    #[validate(nested)]
    pub window: WindowConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub environment: String,
    #[validate(length(min = 1))]
    pub rust_log: String,
}

// Theatre and booking rules, shared by every movie in the catalog
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TheatreConfig {
    #[validate(range(min = 1, max = 10_000))]
    pub capacity: usize,
    #[validate(range(min = 1))]
    pub max_seats_per_booking: u32,
    #[validate(range(min = 0.0))]
    pub ticket_price: f64,
    #[validate(length(min = 2))]
    pub email_domain: String,
}

// Main window settings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WindowConfig {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(range(min = 320.0))]
    pub width: f32,
    #[validate(range(min = 320.0))]
    pub height: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl Default for TheatreConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            max_seats_per_booking: 20,
            ticket_price: 120.0,
            email_domain: "@gmail.com".to_string(),
        }
    }
}

impl Config {
    /// Loads defaults, then `MOVIE_BOOKING_<SECTION>__<KEY>` variables, then `RUST_LOG`.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        let theatre = TheatreConfig::default();

        let raw = ::config::Config::builder()
            .set_default("app.environment", "development")?
            .set_default("app.rust_log", "movie_booking=debug")?
            .set_default("theatre.capacity", theatre.capacity as i64)?
            .set_default("theatre.max_seats_per_booking", i64::from(theatre.max_seats_per_booking))?
            .set_default("theatre.ticket_price", theatre.ticket_price)?
            .set_default("theatre.email_domain", theatre.email_domain)?
            .set_default("window.title", "Movie Ticket Booking System")?
            .set_default("window.width", 600.0)?
            .set_default("window.height", 600.0)?
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("app.rust_log", env::var("RUST_LOG").ok())?
            .build()?;

        let config: Config = raw.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            app: AppConfig {
                environment: "test".to_string(),
                rust_log: "movie_booking=debug".to_string(),
            },
            theatre: TheatreConfig::default(),
            window: WindowConfig {
                title: "Movie Ticket Booking System".to_string(),
                width: 600.0,
                height: 600.0,
            },
        }
    }

    #[test]
    fn test_defaults_match_reference_theatre() {
        let theatre = TheatreConfig::default();
        assert_eq!(theatre.capacity, 100);
        assert_eq!(theatre.max_seats_per_booking, 20);
        assert_eq!(theatre.ticket_price, 120.0);
        assert_eq!(theatre.email_domain, "@gmail.com");
    }

    #[test]
    fn test_sample_config_is_valid() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let mut config = sample();
        config.theatre.capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_seat_limit_is_rejected() {
        let mut config = sample();
        config.theatre.max_seats_per_booking = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tiny_window_is_rejected() {
        let mut config = sample();
        config.window.width = 100.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_loads_defaults() {
        let config = Config::from_env().expect("defaults should load");
        assert!(config.theatre.capacity >= 1);
        assert!(!config.app.rust_log.is_empty());
    }
}
