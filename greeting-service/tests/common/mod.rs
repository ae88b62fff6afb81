use greeting_core::config::Config;
use greeting_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the application on a random port and run it in the background.
    pub async fn spawn() -> Self {
        // Use random port for testing (port 0)
        let config = Config { port: 0 };

        let app = Application::build(&config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }
}

/// Scoped override of a process environment variable.
///
/// Restores the previous value on drop so tests cannot leak state into each
/// other. The greeting handler reads `NAME` on every request, so any test
/// asserting on a response body must pin the variable with one of these and
/// run serially.
pub struct EnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVar {
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        std::env::set_var(key, value);
        Self { key, previous }
    }

    pub fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        std::env::remove_var(key);
        Self { key, previous }
    }
}

impl Drop for EnvVar {
    fn drop(&mut self) {
        match self.previous.as_deref() {
            Some(value) => std::env::set_var(self.key, value),
            None => std::env::remove_var(self.key),
        }
    }
}
