//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod config;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    DeliveryError, MessageText, Password, Recipient, Reference, SendSms, SenderId, SmsResult,
    Username, ValidationError, compute_split_count,
};

pub use config::{ClientConfig, PASSWORD_ENV, SENDER_ENV, USERNAME_ENV};

const DEFAULT_ENDPOINT: &str = "https://api.smsbroadcast.com.au/api-adv.php";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Account credentials sent with every SMS Broadcast request.
pub(crate) struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate that both parts are non-empty.
    fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    fn from_config(config: &ClientConfig) -> Result<Self, ValidationError> {
        let username = config.username.clone().ok_or(ValidationError::Empty {
            field: Username::FIELD,
        })?;
        let password = config.password.clone().ok_or(ValidationError::Empty {
            field: Password::FIELD,
        })?;
        Self::new(username, password)
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        params.push((
            Username::FIELD.to_owned(),
            self.username.as_str().to_owned(),
        ));
        params.push((
            Password::FIELD.to_owned(),
            self.password.as_str().to_owned(),
        ));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsBroadcastClient`].
///
/// Local failures ([`InvalidCredentials`](Self::InvalidCredentials),
/// [`Validation`](Self::Validation), [`SmsDelivery`](Self::SmsDelivery)) are
/// raised before any request is issued.
pub enum SmsBroadcastError {
    /// Username or password missing or empty at construction.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(#[source] ValidationError),

    /// A setter rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A send request failed local checks; see [`DeliveryError::code`].
    #[error("SMS delivery error (code {code}): {0}", code = .0.code())]
    SmsDelivery(#[from] DeliveryError),

    /// The gateway answered with a top-level `ERROR:<reason>`.
    #[error("there was an error with this request: {reason}")]
    GatewayRequest { reason: String },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body did not have the expected line format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

impl SmsBroadcastError {
    /// Code of a local delivery check failure, if this is one.
    pub fn delivery_code(&self) -> Option<u8> {
        match self {
            Self::SmsDelivery(err) => Some(err.code()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsBroadcastClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct SmsBroadcastClientBuilder {
    config: ClientConfig,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsBroadcastClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsBroadcastClient`].
    ///
    /// Fails with [`SmsBroadcastError::InvalidCredentials`] when the username
    /// or password is missing.
    pub fn build(self) -> Result<SmsBroadcastClient, SmsBroadcastError> {
        let credentials =
            Credentials::from_config(&self.config).map_err(SmsBroadcastError::InvalidCredentials)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsBroadcastError::Transport(Box::new(err)))?;

        let mut sms = SmsBroadcastClient::with_transport(
            credentials,
            self.endpoint,
            Arc::new(ReqwestTransport { client }),
        );
        if let Some(sender_name) = self.config.sender_name {
            sms.set_sender_name(sender_name);
        }
        Ok(sms)
    }
}

#[derive(Clone)]
/// High-level SMS Broadcast client.
///
/// Holds credentials plus the sender, recipients, message, reference and
/// split override for the next [`send`](Self::send). These may be changed
/// freely between calls; no state is carried over from a previous response.
///
/// The client is meant for a single owner with one call in flight at a time.
/// Run independent clients for parallel sends.
pub struct SmsBroadcastClient {
    credentials: Credentials,
    sender: SenderId,
    recipients: Vec<Recipient>,
    message: MessageText,
    max_split: Option<u32>,
    reference: Option<Reference>,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for SmsBroadcastClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsBroadcastClient")
            .field("credentials", &self.credentials)
            .field("sender", &self.sender)
            .field("recipients", &self.recipients)
            .field("message", &self.message)
            .field("max_split", &self.max_split)
            .field("reference", &self.reference)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl SmsBroadcastClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SmsBroadcastClient::builder`].
    pub fn new(config: ClientConfig) -> Result<Self, SmsBroadcastError> {
        Self::builder(config).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(config: ClientConfig) -> SmsBroadcastClientBuilder {
        SmsBroadcastClientBuilder::new(config)
    }

    fn with_transport(
        credentials: Credentials,
        endpoint: String,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            credentials,
            sender: SenderId::default(),
            recipients: Vec::new(),
            message: MessageText::default(),
            max_split: None,
            reference: None,
            endpoint,
            http,
        }
    }

    /// Set the sender id. The length limit is checked at send time.
    pub fn set_sender_name(&mut self, name: impl Into<String>) {
        self.sender = SenderId::new(name);
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    /// Append a recipient. Duplicates are dropped when the request is encoded.
    pub fn add_recipient(&mut self, number: impl Into<Recipient>) {
        self.recipients.push(number.into());
    }

    pub fn add_recipients<I, R>(&mut self, numbers: I)
    where
        I: IntoIterator<Item = R>,
        R: Into<Recipient>,
    {
        self.recipients.extend(numbers.into_iter().map(Into::into));
    }

    pub fn clear_recipients(&mut self) {
        self.recipients.clear();
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = MessageText::new(message);
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    /// Fix the number of parts instead of deriving it from the message length.
    ///
    /// `0` clears the override.
    pub fn set_max_split(&mut self, parts: u32) {
        self.max_split = (parts > 0).then_some(parts);
    }

    pub fn clear_max_split(&mut self) {
        self.max_split = None;
    }

    /// Set the caller reference (at most 20 characters).
    pub fn set_reference(&mut self, reference: impl Into<String>) -> Result<(), SmsBroadcastError> {
        self.reference = Some(Reference::new(reference)?);
        Ok(())
    }

    pub fn clear_reference(&mut self) {
        self.reference = None;
    }

    /// Number of parts the current message will be sent as.
    pub fn split_count(&self) -> u32 {
        compute_split_count(self.max_split, self.message.char_len())
    }

    /// Send the current message to all recipients.
    ///
    /// Returns one [`SmsResult`] per gateway line, in gateway order.
    ///
    /// Errors:
    /// - [`SmsBroadcastError::SmsDelivery`] when local checks fail (no request is made),
    /// - [`SmsBroadcastError::GatewayRequest`] when the gateway returns `ERROR`,
    /// - [`SmsBroadcastError::HttpStatus`] for non-2xx HTTP responses.
    pub async fn send(&self) -> Result<Vec<SmsResult>, SmsBroadcastError> {
        let request = SendSms::new(
            self.recipients.clone(),
            self.sender.clone(),
            self.message.clone(),
            self.reference.clone(),
            self.max_split,
        );
        request.validate()?;

        tracing::debug!(
            recipients = request.recipients().len(),
            maxsplit = request.max_split(),
            "sending SMS"
        );

        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_form_params(&mut params);
        params.extend(crate::transport::encode_send_sms_form(&request));

        let body = self.dispatch(params).await?;
        let results = crate::transport::decode_send_sms_response(&body)
            .map_err(|err| SmsBroadcastError::Parse(Box::new(err)))?;

        tracing::debug!(results = results.len(), "gateway answered send");
        Ok(results)
    }

    /// Query the number of SMS credits left on the account.
    pub async fn check_balance(&self) -> Result<u64, SmsBroadcastError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_form_params(&mut params);
        params.extend(crate::transport::encode_balance_form());

        let body = self.dispatch(params).await?;
        let balance = crate::transport::decode_balance_response(&body)
            .map_err(|err| SmsBroadcastError::Parse(Box::new(err)))?;

        tracing::debug!(balance, "gateway answered balance");
        Ok(balance)
    }

    async fn dispatch(&self, params: Vec<(String, String)>) -> Result<String, SmsBroadcastError> {
        let body = crate::transport::encode_form_body(&params);

        let response = self
            .http
            .post_form(&self.endpoint, body)
            .await
            .map_err(SmsBroadcastError::Transport)?;

        if let Some(reason) = crate::transport::top_level_error(&response.body) {
            tracing::warn!(status = response.status, %reason, "gateway rejected request");
            return Err(SmsBroadcastError::GatewayRequest { reason });
        }

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmsBroadcastError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}
