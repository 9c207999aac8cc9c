use async_trait::async_trait;
use ng_core::{ArticleStorage, Error, Result};
use std::sync::Arc;
use tracing::{error, info};

pub mod backends;

pub use backends::*;

#[async_trait]
pub trait StorageBackend: Send + Sync {
    fn get_error_message() -> &'static str;
    async fn new() -> Result<Self> where Self: Sized;
}

/// Names accepted by [`create_storage`]
pub fn available_backends() -> Vec<&'static str> {
    let mut backends = vec!["memory"];
    if cfg!(feature = "sqlite") {
        backends.push("sqlite");
    }
    backends
}

async fn init_backend<T: StorageBackend + ArticleStorage + 'static>() -> Result<Arc<dyn ArticleStorage>> {
    match T::new().await {
        Ok(storage) => Ok(Arc::new(storage)),
        Err(e) => {
            error!("{} ({})", T::get_error_message(), e);
            Err(e)
        }
    }
}

/// Build the storage backend named by `kind`.
///
/// `url` is only meaningful for backends that live outside the process; for
/// SQLite it is the database path, with or without a `sqlite:` prefix.
#[cfg_attr(not(feature = "sqlite"), allow(unused_variables))]
pub async fn create_storage(kind: &str, url: Option<&str>) -> Result<Arc<dyn ArticleStorage>> {
    let storage = match kind {
        "memory" => init_backend::<InMemoryStorage>().await?,
        #[cfg(feature = "sqlite")]
        "sqlite" => match url {
            Some(url) => {
                let path = std::path::PathBuf::from(sqlite::strip_scheme(url));
                Arc::new(SQLiteStorage::new_with_path(&path).await?) as Arc<dyn ArticleStorage>
            }
            None => init_backend::<SQLiteStorage>().await?,
        },
        other => {
            return Err(Error::Storage(format!(
                "Unknown storage backend: {} (available: {})",
                other,
                available_backends().join(", ")
            )))
        }
    };
    info!("💾 Storage backend ready ({})", kind);
    Ok(storage)
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_storage, StorageBackend};
}
