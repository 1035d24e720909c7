//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use mono_flux_client::DemoClient;
use mono_flux_demo::config::AppConfig;
use mono_flux_demo::http::HttpServer;
use mono_flux_demo::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    #[allow(dead_code)]
    /// A client that talks to this server directly, ignoring proxy settings.
    pub fn client(&self) -> DemoClient {
        DemoClient::with_client(http_client(), &self.url())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Start a server whose delayed lookup takes `fetch_delay`.
pub async fn start_server(fetch_delay: Duration) -> TestServer {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.users.fetch_delay_ms = fetch_delay.as_millis() as u64;

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}
