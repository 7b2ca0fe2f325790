use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Mongo,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub uri: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub filter: String,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3002)?
        .set_default("storage.backend", "memory")?
        .set_default("storage.uri", "mongodb://localhost:27017")?
        .set_default("storage.database", "Mydb")?
        .set_default("storage.collection", "sensordatas")?
        .set_default("log.filter", "info")?)
}

/// Load settings from `config/greenhouse.*` (optional) and `GREENHOUSE__*` env vars.
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = builder()?
        .add_source(config::File::with_name("config/greenhouse").required(false))
        .add_source(
            config::Environment::with_prefix("GREENHOUSE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
