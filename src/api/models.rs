// API request/response models (DTOs)

use serde::{Deserialize, Serialize};

/// Pagination query for GET /jogos. Wire names come from the original
/// API contract; defaults match it (page 1, 5 per page).
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_pagina")]
    pub pagina: u32,
    #[serde(default = "default_quantidade")]
    pub quantidade: u32,
}

fn default_pagina() -> u32 {
    1
}

fn default_quantidade() -> u32 {
    5
}

pub const MAX_QUANTIDADE: u32 = 50;

impl ListQuery {
    /// Range check done at the HTTP boundary; the storage gateway
    /// trusts these values.
    pub fn validate(&self) -> Result<(), String> {
        if self.pagina < 1 {
            return Err("pagina deve ser no mínimo 1".to_string());
        }
        if self.quantidade < 1 || self.quantidade > MAX_QUANTIDADE {
            return Err(format!(
                "quantidade deve estar entre 1 e {MAX_QUANTIDADE}"
            ));
        }
        Ok(())
    }
}

/// Fixed-shape failure body; every non-2xx response carries one.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub erro: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            erro: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub storage: String,
}
