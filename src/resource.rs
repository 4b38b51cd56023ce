use crate::error::{FileToolsError, Result};
use std::path::PathBuf;

/// Runtime location that logical resource paths are resolved against.
#[derive(Debug, Clone)]
pub enum ResourceAnchor {
    /// The process working directory.
    WorkingDir,
    /// The directory containing the running executable.
    ExecutableDir,
    /// An explicit root directory.
    Root(PathBuf),
}

impl ResourceAnchor {
    fn base_dir(&self) -> Result<PathBuf> {
        match self {
            ResourceAnchor::WorkingDir => Ok(std::env::current_dir()?),
            ResourceAnchor::ExecutableDir => {
                let exe = std::env::current_exe()?;
                Ok(exe.parent().map(PathBuf::from).unwrap_or(exe))
            }
            ResourceAnchor::Root(root) => Ok(root.clone()),
        }
    }
}

/// Resolves a logical resource path against an anchor, reads all bytes and
/// decodes them as UTF-8, replacing malformed sequences. A leading `/` in the
/// resource path is ignored so that absolute-style logical paths still resolve
/// under the anchor. No caching: every call re-reads the resource.
pub fn load_resource_as_string(anchor: &ResourceAnchor, resource: &str) -> Result<String> {
    let full_path = anchor.base_dir()?.join(resource.trim_start_matches('/'));

    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FileToolsError::ResourceNotFound(resource.to_string())
        } else {
            FileToolsError::Io(e)
        }
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
