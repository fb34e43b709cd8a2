//! Skip/limit pagination for list endpoints.

use serde::Deserialize;

/// List window. `limit == 0` means "no limit", matching store cursor semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 { 10 }

impl Default for ListParams {
    fn default() -> Self { Self { skip: 0, limit: default_limit() } }
}

impl ListParams {
    pub fn new(skip: u64, limit: u64) -> Self { Self { skip, limit } }

    /// Apply an optional ceiling. Without one the window is left untouched.
    pub fn normalize(self, max_limit: Option<u64>) -> Self {
        match max_limit {
            Some(max) if self.limit == 0 || self.limit > max => Self { limit: max, ..self },
            _ => self,
        }
    }
}
