use std::time::Duration;
use crate::channel::OneshotChannel;
use crate::jsonrpc::{JsonRpc, Response};
use crate::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client configuration for [`HttpChannel`].
///
/// `timeout` is applied to every request on top of whatever the client
/// itself was built with; `None` leaves the client's own policy in charge.
#[derive(Clone, Debug)]
pub struct HttpOptions {
    pub http: reqwest::Client,
    pub timeout: Option<Duration>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl HttpOptions {
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct HttpChannel {
    options: HttpOptions,
    endpoint: String,
}

impl HttpChannel {
    pub fn new<E>(endpoint: E) -> Self
    where
        E: Into<String>,
    {
        Self::with_options(endpoint, HttpOptions::default())
    }

    pub fn with_options<E>(endpoint: E, options: HttpOptions) -> Self
    where
        E: Into<String>,
    {
        Self {
            options,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn options(&self) -> &HttpOptions {
        &self.options
    }
}

#[async_trait]
impl OneshotChannel for HttpChannel {
    type Output = Response;

    async fn fire(&self, json: &JsonRpc) -> Result<Self::Output, Error> {
        let mut request = self.options.http.post(&self.endpoint).json(json);
        if let Some(timeout) = self.options.timeout {
            request = request.timeout(timeout);
        }

        let response: Response = request.send().await?
            .error_for_status()?
            .json().await?;

        Ok(response)
    }
}
