//! Remote data access defaults: repository, image downloader, prefetching.
//!
//! All three are generic over the facets they read and resolve those
//! capabilities on every call, so replacing a sibling (e.g. the network
//! client) on the container is picked up immediately.

use parking_lot::Mutex;
use std::collections::HashMap;
use weave_core::contracts::{ImageDownloader, LogRecord, PrefetchHelping, Repository, Request};
use weave_core::{
    DependencyCacheManager, DependencyLogger, DependencyNetworkClient, DependencyRepository,
    DependencyUrlBuilder, NetworkError, RepositoryError,
};

const CATEGORY: &str = "network";

/// Fetches components and images through the configured network client,
/// consulting the cache manager for components.
pub struct DefaultRepository<D> {
    dependencies: D,
}

impl<D> DefaultRepository<D> {
    /// Create a repository reading its collaborators from `dependencies`.
    pub fn new(dependencies: D) -> Self {
        Self { dependencies }
    }
}

impl<D> DefaultRepository<D>
where
    D: DependencyUrlBuilder + DependencyNetworkClient + DependencyCacheManager + DependencyLogger,
{
    fn fetch(&self, path: &str, cached: bool) -> Result<Vec<u8>, RepositoryError> {
        let url = self
            .dependencies
            .url_builder()
            .build(path)
            .ok_or_else(|| RepositoryError::InvalidUrl(path.to_owned()))?;
        let logger = self.dependencies.logger();

        let cache = if cached {
            self.dependencies.cache_manager()
        } else {
            None
        };
        if let Some(data) = cache.as_ref().and_then(|cache| cache.get(&url)) {
            logger.log(&LogRecord::debug(CATEGORY, format!("cache hit for {url}")));
            return Ok(data);
        }

        let client = self
            .dependencies
            .network_client()
            .ok_or(RepositoryError::NetworkClientMissing)?;
        logger.log(&LogRecord::debug(CATEGORY, format!("GET {url}")));
        let response = client.execute(&Request::get(&url)).inspect_err(|e| {
            logger.log(&LogRecord::error(CATEGORY, format!("GET {url} failed: {e}")));
        })?;
        if !response.is_success() {
            logger.log(&LogRecord::error(
                CATEGORY,
                format!("GET {url} returned {}", response.status),
            ));
            return Err(NetworkError::Status(response.status).into());
        }

        if let Some(cache) = cache {
            cache.insert(&url, response.data.clone());
        }
        Ok(response.data)
    }
}

impl<D> Repository for DefaultRepository<D>
where
    D: DependencyUrlBuilder
        + DependencyNetworkClient
        + DependencyCacheManager
        + DependencyLogger
        + Send
        + Sync,
{
    fn fetch_component(&self, path: &str) -> Result<Vec<u8>, RepositoryError> {
        self.fetch(path, true)
    }

    fn fetch_image(&self, path: &str) -> Result<Vec<u8>, RepositoryError> {
        self.fetch(path, false)
    }
}

/// Downloads images through the container's repository.
pub struct DefaultImageDownloader<D> {
    dependencies: D,
}

impl<D> DefaultImageDownloader<D> {
    /// Create a downloader reading the repository from `dependencies`.
    pub fn new(dependencies: D) -> Self {
        Self { dependencies }
    }
}

impl<D> ImageDownloader for DefaultImageDownloader<D>
where
    D: DependencyRepository + Send + Sync,
{
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, RepositoryError> {
        self.dependencies.repository().fetch_image(url)
    }
}

/// Fetches screens ahead of navigation and holds them until taken.
pub struct PrefetchHelper<D> {
    dependencies: D,
    prefetched: Mutex<HashMap<String, Vec<u8>>>,
}

impl<D> PrefetchHelper<D> {
    /// Create a helper reading the repository from `dependencies`.
    pub fn new(dependencies: D) -> Self {
        Self {
            dependencies,
            prefetched: Mutex::new(HashMap::new()),
        }
    }
}

impl<D> PrefetchHelping for PrefetchHelper<D>
where
    D: DependencyRepository + DependencyLogger + Send + Sync,
{
    fn prefetch(&self, path: &str) {
        if self.is_prefetched(path) {
            return;
        }
        match self.dependencies.repository().fetch_component(path) {
            Ok(data) => {
                self.prefetched.lock().insert(path.to_owned(), data);
            }
            Err(e) => self.dependencies.logger().log(&LogRecord::warning(
                "prefetch",
                format!("could not prefetch {path}: {e}"),
            )),
        }
    }

    fn is_prefetched(&self, path: &str) -> bool {
        self.prefetched.lock().contains_key(path)
    }

    fn take(&self, path: &str) -> Option<Vec<u8>> {
        self.prefetched.lock().remove(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::UrlBuilder;
    use crate::testing::{MemoryCache, RecordingLogger, StubNetworkClient};
    use std::sync::Arc;
    use weave_core::contracts::{
        CacheManager, ImageDownloader, Logger, NetworkClient, PrefetchHelping, Repository,
        Response, UrlBuilding,
    };

    struct Deps {
        client: Option<Arc<StubNetworkClient>>,
        cache: Option<Arc<MemoryCache>>,
        logger: RecordingLogger,
    }

    impl DependencyUrlBuilder for Deps {
        fn url_builder(&self) -> Arc<dyn UrlBuilding> {
            Arc::new(UrlBuilder::with_base_url("https://example.com"))
        }
    }

    impl DependencyNetworkClient for Deps {
        fn network_client(&self) -> Option<Arc<dyn NetworkClient>> {
            self.client.clone().map(|c| c as Arc<dyn NetworkClient>)
        }
    }

    impl DependencyCacheManager for Deps {
        fn cache_manager(&self) -> Option<Arc<dyn CacheManager>> {
            self.cache.clone().map(|c| c as Arc<dyn CacheManager>)
        }
    }

    impl DependencyLogger for Deps {
        fn logger(&self) -> Arc<dyn Logger> {
            Arc::new(self.logger.clone())
        }
    }

    fn deps(client: Option<StubNetworkClient>, cache: Option<MemoryCache>) -> Arc<Deps> {
        Arc::new(Deps {
            client: client.map(Arc::new),
            cache: cache.map(Arc::new),
            logger: RecordingLogger::new(),
        })
    }

    #[test]
    fn test_fetch_component_uses_built_url_and_caches() {
        let client = StubNetworkClient::new()
            .with_response("https://example.com/home", Response { status: 200, data: b"tree".to_vec() });
        let deps = deps(Some(client.clone()), Some(MemoryCache::new()));
        let repository = DefaultRepository::new(Arc::clone(&deps));

        assert_eq!(repository.fetch_component("/home").unwrap(), b"tree".to_vec());
        assert_eq!(repository.fetch_component("/home").unwrap(), b"tree".to_vec());
        assert_eq!(client.requests(), vec!["https://example.com/home".to_owned()]);
    }

    #[test]
    fn test_missing_network_client_is_reported() {
        let repository = DefaultRepository::new(deps(None, None));
        assert!(matches!(
            repository.fetch_component("/home"),
            Err(RepositoryError::NetworkClientMissing)
        ));
    }

    #[test]
    fn test_error_status_is_logged_and_returned() {
        let client = StubNetworkClient::new()
            .with_response("https://example.com/gone", Response { status: 404, data: vec![] });
        let deps = deps(Some(client), None);
        let repository = DefaultRepository::new(Arc::clone(&deps));

        assert!(matches!(
            repository.fetch_component("gone"),
            Err(RepositoryError::Network(NetworkError::Status(404)))
        ));
        assert!(deps
            .logger
            .records()
            .iter()
            .any(|r| r.message.contains("returned 404")));
    }

    #[test]
    fn test_images_bypass_cache() {
        let client = StubNetworkClient::new()
            .with_response("https://example.com/a.png", Response { status: 200, data: vec![1] });
        let deps = deps(Some(client.clone()), Some(MemoryCache::new()));
        let repository = DefaultRepository::new(Arc::clone(&deps));

        repository.fetch_image("a.png").unwrap();
        repository.fetch_image("a.png").unwrap();
        assert_eq!(client.requests().len(), 2);
    }

    struct RepoDeps {
        repository: Arc<dyn Repository>,
        logger: RecordingLogger,
    }

    impl DependencyRepository for RepoDeps {
        fn repository(&self) -> Arc<dyn Repository> {
            Arc::clone(&self.repository)
        }
    }

    impl DependencyLogger for RepoDeps {
        fn logger(&self) -> Arc<dyn Logger> {
            Arc::new(self.logger.clone())
        }
    }

    #[test]
    fn test_prefetch_then_take_once() {
        let client = StubNetworkClient::new()
            .with_response("https://example.com/next", Response { status: 200, data: b"next".to_vec() });
        let repo_deps = RepoDeps {
            repository: Arc::new(DefaultRepository::new(deps(Some(client), None))),
            logger: RecordingLogger::new(),
        };
        let helper = PrefetchHelper::new(repo_deps);

        helper.prefetch("/next");
        assert!(helper.is_prefetched("/next"));
        assert_eq!(helper.take("/next"), Some(b"next".to_vec()));
        assert_eq!(helper.take("/next"), None);
    }

    #[test]
    fn test_failed_prefetch_logs_warning() {
        let repo_deps = RepoDeps {
            repository: Arc::new(DefaultRepository::new(deps(None, None))),
            logger: RecordingLogger::new(),
        };
        let logger = repo_deps.logger.clone();
        let helper = PrefetchHelper::new(repo_deps);

        helper.prefetch("/next");
        assert!(!helper.is_prefetched("/next"));
        assert_eq!(logger.records().len(), 1);
    }

    #[test]
    fn test_image_downloader_goes_through_repository() {
        let client = StubNetworkClient::new()
            .with_response("https://example.com/i.png", Response { status: 200, data: vec![7] });
        let repo_deps = RepoDeps {
            repository: Arc::new(DefaultRepository::new(deps(Some(client), None))),
            logger: RecordingLogger::new(),
        };
        let downloader = DefaultImageDownloader::new(repo_deps);
        assert_eq!(downloader.fetch_image("i.png").unwrap(), vec![7]);
    }
}
