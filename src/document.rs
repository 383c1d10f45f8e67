use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::BuildError;

/// Read the prompt with line endings normalized to `\n`.
pub fn load(path: &Path) -> Result<String, BuildError> {
    if !path.exists() {
        return Err(BuildError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path)?;
    info!(path = %path.display(), bytes = raw.len(), "prompt loaded");
    Ok(raw.replace("\r\n", "\n"))
}

/// Write the script and mark it executable (0755).
pub fn write_executable(path: &Path, contents: &str) -> Result<(), BuildError> {
    fs::write(path, contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }
    info!(path = %path.display(), bytes = contents.len(), "script written");
    Ok(())
}
