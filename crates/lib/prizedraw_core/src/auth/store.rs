//! Token storage.
//!
//! The webapp keeps its token pair in client-local storage so a returning
//! user resumes an authenticated session without a fresh login. Storage is
//! a trait so embedders and tests can swap the backing.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::models::auth::TokenPair;

/// File name for the stored access token.
const ACCESS_TOKEN_FILE: &str = "access_token";
/// File name for the stored refresh token.
const REFRESH_TOKEN_FILE: &str = "refresh_token";

/// Client-local storage for the token pair.
///
/// Writes never fail the caller: storage is assumed available and problems
/// are logged instead. Stored values carry no expiry metadata.
pub trait TokenStore: Send + Sync {
    /// Persist both tokens, replacing any prior pair.
    fn save(&self, tokens: &TokenPair);

    /// The stored access token, if any.
    fn access_token(&self) -> Option<String>;

    /// The stored refresh token, if any.
    fn refresh_token(&self) -> Option<String>;

    /// Remove both tokens. Idempotent.
    fn clear(&self);

    /// Whether an access token is present. Says nothing about server-side
    /// validity.
    fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

// =============================================================================
// File-backed store
// =============================================================================

/// Token store backed by two plain-text files under a data directory.
///
/// Mirrors the webapp's persistent local storage: values survive restarts,
/// no encryption, fixed file names.
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read(&self, name: &str) -> Option<String> {
        let contents = fs::read_to_string(self.dir.join(name)).ok()?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_string())
    }

    fn write(&self, name: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), error = %e, "could not create token directory");
            return;
        }
        if let Err(e) = fs::write(self.dir.join(name), value) {
            warn!(file = name, error = %e, "could not persist token");
        }
    }

    fn remove(&self, name: &str) {
        if let Err(e) = fs::remove_file(self.dir.join(name))
            && e.kind() != ErrorKind::NotFound
        {
            warn!(file = name, error = %e, "could not remove token");
        }
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, tokens: &TokenPair) {
        self.write(ACCESS_TOKEN_FILE, &tokens.access_token);
        self.write(REFRESH_TOKEN_FILE, &tokens.refresh_token);
        debug!(dir = %self.dir.display(), "token pair stored");
    }

    fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_FILE)
    }

    fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_FILE)
    }

    fn clear(&self) {
        self.remove(ACCESS_TOKEN_FILE);
        self.remove(REFRESH_TOKEN_FILE);
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// In-memory token store for tests and embedders that persist elsewhere.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<TokenPair>> {
        self.tokens
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, tokens: &TokenPair) {
        *self.lock() = Some(tokens.clone());
    }

    fn access_token(&self) -> Option<String> {
        self.lock().as_ref().map(|t| t.access_token.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.lock().as_ref().map(|t| t.refresh_token.clone())
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}

// =============================================================================
// Tests
// =============================================================================
