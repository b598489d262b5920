use portage_core::config::Config;

/// Accounts module configuration loaded from environment variables.
#[derive(Debug, serde::Deserialize)]
pub struct AccountsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
}

impl Config for AccountsConfig {}
