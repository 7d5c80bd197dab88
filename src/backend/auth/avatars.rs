/**
 * Avatar Storage
 *
 * Writes uploaded avatar bytes under the public directory. Files land in
 * `<public_dir>/images/avatar/<user_id>-<file_name>` and are referred to by
 * their public path `images/avatar/<user_id>-<file_name>`, which is what the
 * user record stores and what the static file route serves.
 */
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Directory of avatar files, relative to the public directory
pub const AVATAR_DIR: &str = "images/avatar";

/// Reduce a client-supplied file name to its last path component
///
/// Returns `None` for names that do not leave a usable file name, such as
/// `""`, `".."` or `"dir/"`.
pub fn sanitize_file_name(file_name: &str) -> Option<String> {
    // Clients on Windows send backslash-separated paths
    let last = file_name.rsplit(['/', '\\']).next()?.trim();
    if last.is_empty() || last == "." || last == ".." {
        return None;
    }
    Some(last.to_string())
}

/// File storage for avatar images
#[derive(Debug, Clone)]
pub struct AvatarStorage {
    public_dir: PathBuf,
}

impl AvatarStorage {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// Public path for a user's avatar file
    pub fn public_path(user_id: Uuid, file_name: &str) -> String {
        format!("{}/{}-{}", AVATAR_DIR, user_id, file_name)
    }

    /// Write `bytes` and return the public path of the stored file
    ///
    /// `file_name` must already be sanitized.
    pub async fn save(&self, user_id: Uuid, file_name: &str, bytes: &[u8]) -> io::Result<String> {
        let public_path = Self::public_path(user_id, file_name);
        let target = self.public_dir.join(&public_path);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, bytes).await?;

        tracing::debug!("Stored avatar at {}", target.display());
        Ok(public_path)
    }

    /// Delete a file previously returned by `save`
    ///
    /// Paths outside the avatar directory are refused; a file that is already
    /// gone is not an error.
    pub async fn remove(&self, public_path: &str) -> io::Result<()> {
        let inside_avatar_dir = public_path
            .strip_prefix(AVATAR_DIR)
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|name| sanitize_file_name(name).as_deref() == Some(name));
        if !inside_avatar_dir {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not an avatar path: {}", public_path),
            ));
        }

        match tokio::fs::remove_file(self.public_dir.join(public_path)).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => {
                tracing::debug!("Removed avatar {}", public_path);
                Ok(())
            }
        }
    }
}
