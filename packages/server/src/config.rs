use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default)]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: CorsConfig::default(),
        }
    }
}

/// Supabase project credentials. The endpoint and anon key are
/// mandatory; without the service-role key the service starts with
/// uploads disabled.
#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    #[serde(default)]
    pub service_role_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    #[serde(default = "default_bucket")]
    pub bucket: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            table: default_table(),
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    3000
}
fn default_cors_max_age() -> u64 {
    3600
}
fn default_bucket() -> String {
    "showcase-images".into()
}
fn default_table() -> String {
    "artworks".into()
}
fn default_max_bytes() -> u64 {
    5 * 1024 * 1024
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Environment fallbacks for the Supabase credentials. A value in the
/// secrets file wins over one from the environment.
const SUPABASE_ENV_KEYS: [(&str, &str); 3] = [
    ("SUPABASE_URL", "supabase.url"),
    ("SUPABASE_ANON_KEY", "supabase.anon_key"),
    ("SUPABASE_SERVICE_ROLE_KEY", "supabase.service_role_key"),
];

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|var| std::env::var(var).ok())
    }

    fn load_from<F>(env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder();
        for (var, key) in SUPABASE_ENV_KEYS {
            if let Some(value) = env(var) {
                builder = builder.set_default(key, value)?;
            }
        }

        let s = builder
            // General settings from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Credentials from the secret store
            .add_source(File::with_name("config/secrets").required(false))
            // Override anything (e.g., SHOWCASE__SERVER__PORT)
            .add_source(Environment::with_prefix("SHOWCASE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
