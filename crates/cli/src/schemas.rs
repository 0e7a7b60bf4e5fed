//! Config schemas for the demo services.
//!
//! Each config has its own schema so that several can be built from a single
//! env file, each seeing only its own keys.

use serde::{Deserialize, Serialize};
use typed_env_config::{Field, ObjectSchema, Typed};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MailerConfig {
    #[serde(rename = "MAIL_FROM")]
    pub from: String,
    #[serde(rename = "MAIL_DOMAIN")]
    pub domain: String,
    #[serde(rename = "MAIL_API_KEY")]
    pub api_key: String,
}

pub fn mailer_schema() -> Typed<MailerConfig> {
    ObjectSchema::new()
        .field("MAIL_FROM", Field::string())
        .field("MAIL_DOMAIN", Field::string())
        .field("MAIL_API_KEY", Field::string())
        .typed()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PostgresConfig {
    #[serde(rename = "PG_HOST")]
    pub host: String,
    #[serde(rename = "PG_PORT")]
    pub port: u16,
}

pub fn postgres_schema() -> Typed<PostgresConfig> {
    ObjectSchema::new()
        .field("PG_HOST", Field::string())
        // All env values are strings, so the port has to be coerced.
        .field(
            "PG_PORT",
            Field::number()
                .coerce()
                .int()
                .gte(1024)
                .lte(65535)
                .default(5432),
        )
        .typed()
}
