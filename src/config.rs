use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub elasticsearch: EsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EsConfig {
    pub url: String,
    pub index_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener, e.g. 0.0.0.0
    pub listen_addr: String,
    /// Port for the HTTP listener
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0".into(),
            port: 80,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        // Step 1: Try loading .env file (silently ignore if not found)
        let _ = dotenvy::dotenv();

        // Step 2: Try loading TOML config as base
        let mut config = if Path::new("config.toml").exists() {
            let content = std::fs::read_to_string("config.toml")?;
            toml::from_str::<AppConfig>(&content)?
        } else {
            AppConfig::defaults()
        };

        // Step 3: Override with environment variables where present
        if let Ok(url) = std::env::var("ELASTICSEARCH_URL") {
            config.elasticsearch.url = url;
        }
        if let Ok(index) = std::env::var("ELASTICSEARCH_INDEX") {
            config.elasticsearch.index_name = index;
        }
        if let Ok(val) = std::env::var("SERVER_LISTEN_ADDR") {
            config.server.listen_addr = val;
        }
        if let Ok(val) = std::env::var("SERVER_PORT") {
            config.server.port = val.parse()?;
        }

        Ok(config)
    }

    fn defaults() -> Self {
        Self {
            elasticsearch: EsConfig {
                url: "http://localhost:9200".into(),
                index_name: "message_data".into(),
            },
            server: ServerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_elasticsearch() {
        let config = AppConfig::defaults();
        assert_eq!(config.elasticsearch.url, "http://localhost:9200");
        assert_eq!(config.elasticsearch.index_name, "message_data");
        assert_eq!(config.server.port, 80);
    }

    #[test]
    fn server_section_is_optional_in_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [elasticsearch]
            url = "http://es:9200"
            index_name = "message_data"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0");
        assert_eq!(config.server.port, 80);
    }
}
