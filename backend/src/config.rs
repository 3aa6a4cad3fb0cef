use anyhow::{bail, Context, Result};
use chrono::{FixedOffset, Offset, Utc};
use config::{Config, Environment};
use serde::Deserialize;

/// Longest admin session accepted from `ADMIN_SESSION_HOURS` (one year).
const MAX_ADMIN_SESSION_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub admin_password: String,
    pub admin_session_hours: i64,
    pub cors_allowed_origins: Option<String>,
    pub frontend_dir: String,
    /// Offset of the organisation's wall clock from UTC. Decides which
    /// calendar day an event falls on and how admin form times are read.
    pub utc_offset_minutes: i32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let settings = Config::builder()
            .set_default("port", 8080)?
            .set_default("admin_session_hours", 12)?
            .set_default("frontend_dir", "frontend/dist")?
            .set_default("utc_offset_minutes", 120)?
            .add_source(Environment::default())
            .build()
            .context("Failed to read configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("DATABASE_URL and ADMIN_PASSWORD must be set")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.admin_password.is_empty() {
            bail!("ADMIN_PASSWORD must not be empty");
        }

        if !(1..=MAX_ADMIN_SESSION_HOURS).contains(&self.admin_session_hours) {
            bail!(
                "ADMIN_SESSION_HOURS must be between 1 and {}, got {}",
                MAX_ADMIN_SESSION_HOURS,
                self.admin_session_hours
            );
        }

        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .context("UTC_OFFSET_MINUTES must be within +/- 24 hours")?;

        Ok(())
    }

    /// Zone used for calendar days and `datetime-local` input.
    pub fn timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    /// Allowed CORS origins, empty when unset.
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(offset: i32, origins: Option<&str>) -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/sproutsphere".to_string(),
            port: 8080,
            admin_password: "secret".to_string(),
            admin_session_hours: 12,
            cors_allowed_origins: origins.map(str::to_string),
            frontend_dir: "frontend/dist".to_string(),
            utc_offset_minutes: offset,
        }
    }

    #[test]
    fn test_timezone_from_offset() {
        assert_eq!(config(120, None).timezone().local_minus_utc(), 7200);
        assert_eq!(config(-300, None).timezone().local_minus_utc(), -18000);
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_utc() {
        assert_eq!(config(24 * 60 * 2, None).timezone().local_minus_utc(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_session_hours() {
        assert!(config(120, None).validate().is_ok());

        for hours in [0, -5, MAX_ADMIN_SESSION_HOURS + 1, i64::MAX] {
            let mut cfg = config(120, None);
            cfg.admin_session_hours = hours;
            assert!(cfg.validate().is_err(), "{} hours accepted", hours);
        }
    }

    #[test]
    fn test_validate_rejects_empty_password_and_bad_offset() {
        let mut cfg = config(120, None);
        cfg.admin_password.clear();
        assert!(cfg.validate().is_err());

        assert!(config(24 * 60 * 2, None).validate().is_err());
    }

    #[test]
    fn test_cors_origins_split_and_trimmed() {
        let cfg = config(0, Some("https://sproutsphere.org, http://localhost:8081,,"));
        assert_eq!(
            cfg.cors_origins(),
            vec!["https://sproutsphere.org", "http://localhost:8081"]
        );
        assert!(config(0, None).cors_origins().is_empty());
    }
}
