use std::net::SocketAddr;

use axum::http::HeaderValue;
use eyre::{eyre, WrapErr};

use vitals_dashboard::SchemaSelection;
use vitals_schemas::get_schema;
use vitals_sheets::config::SheetsConfig;

pub const BIND_ADDR_VAR: &str = "VITALS_BIND_ADDR";
pub const SCHEMA_VAR: &str = "VITALS_SCHEMA";
pub const ALLOWED_ORIGINS_VAR: &str = "VITALS_ALLOWED_ORIGINS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Browser origins allowed to call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// Comma-separated origins; a `*` anywhere in the list opens it to all.
    pub fn parse(raw: &str) -> eyre::Result<Self> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.is_empty() || entries.contains(&"*") {
            return Ok(AllowedOrigins::Any);
        }

        let origins = entries
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin).wrap_err_with(|| format!("invalid origin: {origin}"))
            })
            .collect::<eyre::Result<Vec<_>>>()?;
        Ok(AllowedOrigins::List(origins))
    }
}

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub schema: SchemaSelection,
    pub allowed_origins: AllowedOrigins,
    pub sheets: SheetsConfig,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("invalid {BIND_ADDR_VAR}"))?;

        let schema = SchemaSelection::parse(&lookup(SCHEMA_VAR).unwrap_or_default());
        if let SchemaSelection::Fixed(id) = &schema
            && get_schema(id).is_none()
        {
            return Err(eyre!("{SCHEMA_VAR} names an unknown schema: {id}"));
        }

        let allowed_origins = AllowedOrigins::parse(&lookup(ALLOWED_ORIGINS_VAR).unwrap_or_default())?;

        let sheets = SheetsConfig::from_lookup(&lookup)?;

        Ok(Self {
            bind_addr,
            schema,
            allowed_origins,
            sheets,
        })
    }
}
