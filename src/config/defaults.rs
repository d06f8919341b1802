//! Default configuration values

use super::schema::Config;

/// Get the built-in default configuration
pub fn default_config() -> Config {
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.name, "desk-bluetooth");
        assert_eq!(config.log.level, "info");
    }
}
