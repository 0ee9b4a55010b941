use serde::{Deserialize, Serialize};

/// JWT payload. `sub` carries the username the token speaks for; it is
/// optional so that a token without a subject is detectable after decoding
/// rather than a blanket parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>, // subject (username)
    pub iat: usize,          // issued at (unix timestamp)
    pub exp: usize,          // expires at (unix timestamp)
}
