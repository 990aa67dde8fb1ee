//! Shared harness for the scenario suites.
//!
//! By default every suite talks to an in-process `tmdb-mock` started once per
//! test binary on a random port. With `TMDB_LIVE=1` the suites run against
//! the API described by `TMDB_BASE_URL` and friends instead.

#![allow(dead_code)]

use std::sync::OnceLock;

use mock_server::MockConfig;
use tmdb_core::{ClientConfig, SuiteConfig};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn live() -> bool {
    std::env::var("TMDB_LIVE").is_ok_and(|v| v == "1")
}

/// Configuration for the scenario run, resolved once.
pub fn suite() -> &'static SuiteConfig {
    static SUITE: OnceLock<SuiteConfig> = OnceLock::new();
    SUITE.get_or_init(|| {
        init_logging();
        if live() {
            return SuiteConfig::from_env().expect("TMDB_LIVE=1 requires TMDB_* variables");
        }
        let mock = MockConfig::default();
        SuiteConfig {
            client: ClientConfig::new(mock_base_url())
                .with_api_key(&mock.api_key)
                .with_read_access_token(&mock.read_access_token),
            session_id: Some(mock.session_id),
        }
    })
}

pub fn config() -> ClientConfig {
    suite().client.clone()
}

/// Base URL of the mock, started on first use. Always the mock, even in
/// live mode, for scenarios that need a server they control.
pub fn mock_base_url() -> &'static str {
    static BASE_URL: OnceLock<String> = OnceLock::new();
    BASE_URL.get_or_init(|| {
        init_logging();
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener, MockConfig::default()).await
            })
            .unwrap();
        });

        format!("http://{addr}")
    })
}
