use crate::config::types::{Config, CrawlerConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_seeds(&config.seeds)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.fetch_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch-timeout must be >= 1 second, got {}",
            config.fetch_timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the seed URL list
///
/// Empty and whitespace-only entries are skipped at seeding time, so they
/// are tolerated here; at least one usable seed must remain, and every
/// usable seed must be an absolute http(s) URL.
fn validate_seeds(seeds: &[String]) -> Result<(), ConfigError> {
    let usable: Vec<&String> = seeds.iter().filter(|s| !s.trim().is_empty()).collect();

    if usable.is_empty() {
        return Err(ConfigError::Validation(
            "seeds must contain at least one non-blank URL".to_string(),
        ));
    }

    for seed in usable {
        let url = Url::parse(seed.trim())
            .map_err(|e| ConfigError::InvalidSeed(format!("{}: {}", seed, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidSeed(format!(
                "{}: only http and https schemes are supported",
                seed
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::StorageConfig;

    fn config_with_seeds(seeds: Vec<String>) -> Config {
        Config {
            seeds,
            crawler: CrawlerConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let config = config_with_seeds(vec!["https://example.com/recipes".to_string()]);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_no_seeds_rejected() {
        let config = config_with_seeds(vec![]);
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_only_blank_seeds_rejected() {
        let config = config_with_seeds(vec!["".to_string(), "   ".to_string()]);
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_seed_tolerated_alongside_valid_one() {
        let config = config_with_seeds(vec![
            "".to_string(),
            "https://example.com/recipes".to_string(),
        ]);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_malformed_seed_rejected() {
        let config = config_with_seeds(vec!["not a url".to_string()]);
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_non_http_seed_rejected() {
        let config = config_with_seeds(vec!["ftp://example.com/recipes".to_string()]);
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_zero_fetch_timeout_rejected() {
        let mut config = config_with_seeds(vec!["https://example.com/".to_string()]);
        config.crawler.fetch_timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
