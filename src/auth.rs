//! API credential resolution
//!
//! The key is looked up in a local secret file first, then in the
//! environment. Startup aborts with a distinct exit status if neither
//! source yields one.

use std::env;
use std::path::Path;

use thiserror::Error;

/// Secret file probed first, relative to the working directory.
pub const SECRET_FILE: &str = "secret.txt";

/// Environment variable consulted when the secret file is absent.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Process exit status when no credential can be found.
pub const EXIT_NO_CREDENTIAL: i32 = 2;

/// No credential was found in any source.
#[derive(Debug, Error)]
#[error("could not access the secret API key in {secret_file} or ${env_var}")]
pub struct CredentialError {
    pub secret_file: String,
    pub env_var: String,
}

/// Resolve the API key: the secret file wins, the environment is the
/// fallback. The file contents are trimmed; an empty file counts as
/// absent.
pub fn resolve_api_key(secret_file: &Path, env_var: &str) -> Result<String, CredentialError> {
    match std::fs::read_to_string(secret_file) {
        Ok(contents) => {
            let key = contents.trim();
            if !key.is_empty() {
                log::info!("configuration through the secret file successful");
                return Ok(key.to_string());
            }
            log::info!("secret file is empty, trying the environment variable");
        }
        Err(e) => {
            log::info!("could not read the secret file ({}), trying the environment variable", e);
        }
    }

    match env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => {
            log::info!("configuration through the environment variable successful");
            Ok(key.trim().to_string())
        }
        _ => Err(CredentialError {
            secret_file: secret_file.display().to_string(),
            env_var: env_var.to_string(),
        }),
    }
}
