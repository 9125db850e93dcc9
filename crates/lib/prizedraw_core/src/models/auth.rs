//! Session token models.

use serde::Deserialize;

/// Access/refresh token pair issued by the backend.
///
/// Tokens are opaque to the client: no claims are inspected and no expiry
/// is tracked. Validity is discovered reactively via a 401 response. The
/// login and refresh response bodies deserialize into this directly.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
