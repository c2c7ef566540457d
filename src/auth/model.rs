use serde::{Deserialize, Serialize};

/// Claims carried by a Supabase access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Auth user id (UUID) of the caller.
    pub sub: String,
    #[serde(default = "default_audience")]
    pub aud: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    pub exp: usize,
    #[serde(default)]
    pub iat: usize,
}

fn default_audience() -> String {
    "authenticated".to_string()
}
