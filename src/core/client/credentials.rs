//! Token loading from a local JSON credential file.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::IexError;

#[derive(Deserialize)]
struct CredentialFile {
    token: String,
    #[serde(default)]
    sandbox_token: Option<String>,
}

/// Reads `{"token": "...", "sandbox_token": "..."}` from `path`.
///
/// In sandbox mode the sandbox token wins when the file has one.
pub(crate) fn load_token(path: &Path, sandbox: bool) -> Result<String, IexError> {
    let text = fs::read_to_string(path)
        .map_err(|e| IexError::Credentials(format!("cannot read {}: {e}", path.display())))?;
    let creds: CredentialFile = serde_json::from_str(&text)
        .map_err(|e| IexError::Credentials(format!("cannot parse {}: {e}", path.display())))?;

    let token = match creds.sandbox_token {
        Some(t) if sandbox => t,
        _ => creds.token,
    };
    if token.trim().is_empty() {
        return Err(IexError::Credentials(format!(
            "empty token in {}",
            path.display()
        )));
    }
    Ok(token.trim().to_string())
}
