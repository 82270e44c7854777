use crate::core::{ConfigProvider, Endpoint, FetchOutcome, Fetcher, Storage};
use crate::utils::error::Result;
use chrono::Utc;

/// Runs endpoints one after another. The first failure ends the run.
pub struct FetchEngine<F: Fetcher, S: Storage> {
    fetcher: F,
    storage: S,
}

impl<F: Fetcher, S: Storage> FetchEngine<F, S> {
    pub fn new(fetcher: F, storage: S) -> Self {
        Self { fetcher, storage }
    }

    pub async fn run<C: ConfigProvider>(&self, config: &C) -> Result<Vec<FetchOutcome>> {
        let endpoints = config.endpoints();
        tracing::info!(
            "Fetching {} endpoint(s) into {}",
            endpoints.len(),
            config.data_dir().display()
        );

        let mut outcomes = Vec::with_capacity(endpoints.len());
        for endpoint in endpoints {
            let outcome = self.fetch_one(endpoint).await.inspect_err(|e| {
                tracing::error!("{} failed: {}", endpoint.name, e);
            })?;
            outcomes.push(outcome);
        }

        let total: usize = outcomes.iter().map(|o| o.bytes_written).sum();
        tracing::info!("Done: {} file(s), {} bytes", outcomes.len(), total);
        Ok(outcomes)
    }

    pub async fn fetch_one(&self, endpoint: &Endpoint) -> Result<FetchOutcome> {
        tracing::info!(
            "Fetching {} ({}) from {}",
            endpoint.name,
            endpoint.description.as_deref().unwrap_or("no description"),
            endpoint.url
        );
        let payload = self.fetcher.fetch(&endpoint.url).await?;
        if !payload.is_success() {
            tracing::warn!(
                "{} answered {}, saving the body anyway",
                endpoint.url,
                payload.status
            );
        }

        let path = self
            .storage
            .write_file(&endpoint.destination, &payload.body)
            .await?;
        tracing::info!(
            "{}: wrote {} bytes to {}",
            endpoint.name,
            payload.body.len(),
            path.display()
        );

        Ok(FetchOutcome {
            endpoint: endpoint.name.clone(),
            path,
            status: payload.status,
            bytes_written: payload.body.len(),
            fetched_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Payload;
    use crate::utils::error::FetchError;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(Path::new(path)).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &Path, data: &[u8]) -> Result<PathBuf> {
            let mut files = self.files.lock().await;
            files.insert(path.to_path_buf(), data.to_vec());
            Ok(path.to_path_buf())
        }
    }

    /// Serves canned bodies by URL; unknown URLs fail like a refused connection.
    struct MockFetcher {
        bodies: HashMap<String, Vec<u8>>,
        status: u16,
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl MockFetcher {
        fn new(bodies: &[(&str, &str)]) -> Self {
            Self {
                bodies: bodies
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.as_bytes().to_vec()))
                    .collect(),
                status: 200,
                requested: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn with_status(mut self, status: u16) -> Self {
            self.status = status;
            self
        }
    }

    #[async_trait::async_trait]
    impl Fetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<Payload> {
            self.requested.lock().await.push(url.to_string());
            match self.bodies.get(url) {
                Some(body) => Ok(Payload {
                    status: self.status,
                    content_type: None,
                    body: body.clone(),
                }),
                None => Err(FetchError::IoError(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ))),
            }
        }
    }

    struct TestConfig {
        endpoints: Vec<Endpoint>,
    }

    impl ConfigProvider for TestConfig {
        fn endpoints(&self) -> &[Endpoint] {
            &self.endpoints
        }

        fn data_dir(&self) -> &Path {
            Path::new("data")
        }
    }

    #[tokio::test]
    async fn test_run_writes_each_body_verbatim() {
        let storage = MockStorage::new();
        let fetcher = MockFetcher::new(&[
            ("http://a/csv", "a,b,c\n1,2,3\n"),
            ("http://b/json", "[{\"x\":1}]"),
        ]);
        let engine = FetchEngine::new(fetcher, storage.clone());
        let config = TestConfig {
            endpoints: vec![
                Endpoint::new("a", "http://a/csv", "a.csv"),
                Endpoint::new("b", "http://b/json", "b.json"),
            ],
        };

        let outcomes = engine.run(&config).await.unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].endpoint, "a");
        assert_eq!(outcomes[0].bytes_written, 12);
        assert_eq!(outcomes[1].status, 200);
        assert_eq!(storage.get_file("a.csv").await.unwrap(), b"a,b,c\n1,2,3\n");
        assert_eq!(storage.get_file("b.json").await.unwrap(), b"[{\"x\":1}]");
    }

    #[tokio::test]
    async fn test_error_status_body_still_written() {
        let storage = MockStorage::new();
        let fetcher =
            MockFetcher::new(&[("http://e/official", "<html>502</html>")]).with_status(502);
        let engine = FetchEngine::new(fetcher, storage.clone());
        let endpoint = Endpoint::new("e", "http://e/official", "e.json")
            .with_description("gateway in trouble");

        let outcome = engine.fetch_one(&endpoint).await.unwrap();

        assert_eq!(outcome.status, 502);
        assert_eq!(
            storage.get_file("e.json").await.unwrap(),
            b"<html>502</html>"
        );
    }

    #[tokio::test]
    async fn test_run_stops_at_first_failure() {
        let storage = MockStorage::new();
        let fetcher = MockFetcher::new(&[("http://c/ok", "ok")]);
        let requested = fetcher.requested.clone();
        let engine = FetchEngine::new(fetcher, storage.clone());
        let config = TestConfig {
            endpoints: vec![
                Endpoint::new("down", "http://down/", "down.csv"),
                Endpoint::new("c", "http://c/ok", "c.csv"),
            ],
        };

        let result = engine.run(&config).await;

        assert!(result.is_err());
        assert_eq!(*requested.lock().await, vec!["http://down/".to_string()]);
        assert!(storage.get_file("down.csv").await.is_none());
        assert!(storage.get_file("c.csv").await.is_none());
    }
}
