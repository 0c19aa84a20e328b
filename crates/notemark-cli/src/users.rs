use std::path::Path;

use anyhow::{Context, Result};
use notemark_engine::{User, UserDirectory, sort_users};

/// Reads a `[[users]]` TOML file, sorted by full name.
pub fn load_users(path: &Path) -> Result<Vec<User>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read user directory at {}", path.display()))?;
    let directory: UserDirectory = toml::from_str(&content)
        .with_context(|| format!("Failed to parse user directory at {}", path.display()))?;

    let mut users = directory.users;
    sort_users(&mut users);
    log::info!("Loaded {} users from {}", users.len(), path.display());
    Ok(users)
}
