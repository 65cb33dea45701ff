use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::warn;

/// Single persisted bearer-token slot. The slot is overwritten, not merged:
/// whichever call completes last wins. Storage failures are logged and
/// swallowed so auth flows never fail on the local side.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// The stored token, if any
    async fn get(&self) -> Option<String>;

    /// Replace the stored token
    async fn put(&self, token: &str);

    /// Drop the stored token
    async fn clear(&self);
}

/// Process-local token storage, the default
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out already holding a token (e.g. one minted out of band)
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn put(&self, token: &str) {
        *self.token.write().await = Some(token.to_string());
    }

    async fn clear(&self) {
        *self.token.write().await = None;
    }
}

/// File-backed token storage so a session survives process restarts
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> Option<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(_) => None,
        }
    }

    async fn put(&self, token: &str) {
        if let Err(e) = tokio::fs::write(&self.path, token).await {
            warn!(path = %self.path.display(), error = %e, "Failed to persist token");
        }
    }

    async fn clear(&self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to clear token");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_token_path() -> PathBuf {
        std::env::temp_dir().join(format!("pizza-token-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get().await, None);

        store.put("ttttt").await;
        assert_eq!(store.get().await.as_deref(), Some("ttttt"));

        store.put("uuuuu").await;
        assert_eq!(store.get().await.as_deref(), Some("uuuuu"));

        store.clear().await;
        assert_eq!(store.get().await, None);
    }

    #[tokio::test]
    async fn test_memory_store_with_token() {
        let store = MemoryTokenStore::with_token("abcdef");
        assert_eq!(store.get().await.as_deref(), Some("abcdef"));
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let path = temp_token_path();
        let store = FileTokenStore::new(&path);
        assert_eq!(store.get().await, None);

        store.put("abcdef").await;
        assert_eq!(store.get().await.as_deref(), Some("abcdef"));

        // A second store on the same path sees the token
        let rehydrated = FileTokenStore::new(&path);
        assert_eq!(rehydrated.get().await.as_deref(), Some("abcdef"));

        store.clear().await;
        assert_eq!(store.get().await, None);
        // Clearing twice is fine
        store.clear().await;
    }

    #[tokio::test]
    async fn test_file_store_trims_whitespace() {
        let path = temp_token_path();
        tokio::fs::write(&path, "abcdef\n").await.unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.get().await.as_deref(), Some("abcdef"));

        store.clear().await;
    }
}
