use serde::Deserialize;
use quizd_core::error::{QuizdError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(QuizdError::BadRequest(
                "unsupported config version (expected 1)".into(),
            ));
        }

        self.gateway.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Prometheus namespace prefixed to every exported metric name.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            namespace: default_namespace(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.is_empty() {
            return Err(QuizdError::BadRequest(
                "gateway.listen must not be empty".into(),
            ));
        }

        // Prometheus metric name rules: [a-z][a-z0-9_]*
        let mut chars = self.namespace.chars();
        let head_ok = chars.next().is_some_and(|c| c.is_ascii_lowercase());
        let tail_ok = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !(head_ok && tail_ok) {
            return Err(QuizdError::BadRequest(
                "gateway.namespace must match [a-z][a-z0-9_]*".into(),
            ));
        }

        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_namespace() -> String {
    "quizd".into()
}
