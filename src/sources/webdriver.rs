use crate::error::AcquisitionError;
use crate::sources::MarkupSource;
use fantoccini::{Client, ClientBuilder};
use tokio::sync::Mutex;
use url::Url;

/// Common WebDriver endpoints tried when the configured one refuses
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Renders pages in a browser through WebDriver and captures the resulting DOM
///
/// Sessions are opened lazily and pooled: each fetch borrows an idle session or
/// opens a new one, so at most one session exists per in-flight fetch.
pub struct WebDriverSource {
    webdriver_url: String,
    idle: Mutex<Vec<Client>>,
}

impl WebDriverSource {
    pub fn new(webdriver_url: &str) -> Self {
        Self {
            webdriver_url: webdriver_url.to_string(),
            idle: Mutex::new(Vec::new()),
        }
    }

    pub fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }

    /// Close every pooled session
    pub async fn close(&self) {
        let clients: Vec<Client> = self.idle.lock().await.drain(..).collect();
        ::log::debug!("Closing {} WebDriver sessions", clients.len());
        for client in clients {
            if let Err(e) = client.close().await {
                ::log::warn!("Failed to close WebDriver session: {}", e);
            }
        }
    }

    async fn checkout(&self) -> Result<Client, AcquisitionError> {
        if let Some(client) = self.idle.lock().await.pop() {
            return Ok(client);
        }
        connect_to_webdriver(&self.webdriver_url).await
    }

    async fn checkin(&self, client: Client) {
        self.idle.lock().await.push(client);
    }
}

impl MarkupSource for WebDriverSource {
    async fn fetch_markup(&self, url: &Url) -> Result<String, AcquisitionError> {
        let client = self.checkout().await?;

        match capture(&client, url).await {
            Ok(markup) => {
                self.checkin(client).await;
                Ok(markup)
            }
            Err(e) => {
                // a session that failed mid-page is not reused
                if let Err(close_err) = client.close().await {
                    ::log::debug!("Discarding broken WebDriver session: {}", close_err);
                }
                Err(e)
            }
        }
    }
}

/// Navigates to the URL and returns the rendered page source
async fn capture(client: &Client, url: &Url) -> Result<String, AcquisitionError> {
    let start = std::time::Instant::now();
    ::log::debug!("CAPTURE: {}", url);

    client.goto(url.as_str()).await.map_err(|e| {
        log_session_error(&e, "accessing", url);
        AcquisitionError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        }
    })?;

    let source = client.source().await.map_err(|e| {
        log_session_error(&e, "getting source for", url);
        AcquisitionError::Source {
            url: url.to_string(),
            reason: e.to_string(),
        }
    })?;

    ::log::debug!(
        "Captured {} ({} bytes) in {:.2} seconds",
        url,
        source.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(source)
}

/// Connects to the WebDriver instance, falling back to common local endpoints
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client, AcquisitionError> {
    let first_error = match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            e.to_string()
        }
    };

    for url in FALLBACK_WEBDRIVER_URLS.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(AcquisitionError::Connect {
        url: webdriver_url.to_string(),
        reason: first_error,
    })
}

fn log_session_error(error: &fantoccini::error::CmdError, context: &str, url: &Url) {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while {} {}", context, url);
    } else {
        ::log::error!("Failed {} {}: {}", context, url, error);
    }
}
