//! HTTP client for the mail service endpoints.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Request, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, warn};
use url::Url;

use super::{CURRENT_USER_FAILED, DETAIL_FAILED, LIST_FAILED, LOGIN_FAILED, REGISTER_FAILED, SEND_FAILED};
use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::model::{EmailDetail, EmailId, EmailSummary, NewEmail, Registration, User};
use crate::pagination::{PaginationData, offset_for};

/// Client for the mail service REST API.
///
/// Cheap to clone; clones share the connection pool.
///
/// Authenticated operations take the credentials to use for that one call.
/// Callers pass the session's credentials as they are at dispatch time, so
/// a sign-out between two calls is always observed by the second one. With
/// `None` no `Authorization` header is sent and the service rejects the
/// request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    page_size: u32,
    http: Client,
}

impl ApiClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        debug!("API client for {base_url}");
        Ok(Self {
            base_url,
            page_size: config.page_size,
            http: Client::new(),
        })
    }

    /// Service root (always ends with `/`).
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default `limit` for [`Self::get_emails`].
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Checks the candidate credentials against `GET /users/current/`.
    ///
    /// Nothing is persisted here; the caller signs in on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the
    /// credentials.
    pub async fn login(&self, candidate: &Credentials) -> Result<User> {
        let request = self.login_request(candidate)?;
        self.execute(request, LOGIN_FAILED).await
    }

    /// Creates an account with `POST /users/`.
    ///
    /// Returns the credentials of the new identity; the created user in the
    /// response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service refuses the
    /// registration.
    pub async fn register(&self, registration: &Registration) -> Result<Credentials> {
        let request = self.register_request(registration)?;
        let _created: IgnoredAny = self.execute(request, REGISTER_FAILED).await?;
        Ok(Credentials::new(
            registration.username.clone(),
            registration.password.clone(),
        ))
    }

    /// Fetches the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn get_current_user(&self, auth: Option<&Credentials>) -> Result<User> {
        let request = self.current_user_request(auth)?;
        self.execute(request, CURRENT_USER_FAILED).await
    }

    /// Fetches one page of sent emails using the configured page size.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn get_emails(
        &self,
        auth: Option<&Credentials>,
        page: u32,
    ) -> Result<PaginationData<EmailSummary>> {
        self.get_emails_with_limit(auth, page, self.page_size).await
    }

    /// Fetches one page of sent emails with an explicit `limit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn get_emails_with_limit(
        &self,
        auth: Option<&Credentials>,
        page: u32,
        limit: u32,
    ) -> Result<PaginationData<EmailSummary>> {
        let request = self.emails_request(auth, page, limit)?;
        self.execute(request, LIST_FAILED).await
    }

    /// Sends an email and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service refuses the email.
    pub async fn send_email(
        &self,
        auth: Option<&Credentials>,
        email: &NewEmail,
    ) -> Result<EmailSummary> {
        let request = self.send_email_request(auth, email)?;
        self.execute(request, SEND_FAILED).await
    }

    /// Fetches a single email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn get_email(&self, auth: Option<&Credentials>, id: EmailId) -> Result<EmailDetail> {
        let request = self.email_request(auth, id)?;
        self.execute(request, DETAIL_FAILED).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn authorize(builder: RequestBuilder, auth: Option<&Credentials>) -> RequestBuilder {
        match auth {
            Some(credentials) => builder.header(AUTHORIZATION, credentials.basic_header()),
            None => builder,
        }
    }

    fn login_request(&self, candidate: &Credentials) -> Result<Request> {
        let url = self.endpoint("users/current/")?;
        Ok(Self::authorize(self.http.get(url), Some(candidate)).build()?)
    }

    fn register_request(&self, registration: &Registration) -> Result<Request> {
        let url = self.endpoint("users/")?;
        Ok(self.http.post(url).json(registration).build()?)
    }

    fn current_user_request(&self, auth: Option<&Credentials>) -> Result<Request> {
        let url = self.endpoint("users/current/")?;
        Ok(Self::authorize(self.http.get(url), auth).build()?)
    }

    fn emails_request(&self, auth: Option<&Credentials>, page: u32, limit: u32) -> Result<Request> {
        let mut url = self.endpoint("emails/")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset_for(page, limit).to_string());
        Ok(Self::authorize(self.http.get(url), auth).build()?)
    }

    fn send_email_request(&self, auth: Option<&Credentials>, email: &NewEmail) -> Result<Request> {
        let url = self.endpoint("emails/")?;
        Ok(Self::authorize(self.http.post(url), auth).json(email).build()?)
    }

    fn email_request(&self, auth: Option<&Credentials>, id: EmailId) -> Result<Request> {
        let url = self.endpoint(&format!("emails/{id}/"))?;
        Ok(Self::authorize(self.http.get(url), auth).build()?)
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request, fallback: &str) -> Result<T> {
        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!("{method} {path}");

        let response = self.http.execute(request).await.inspect_err(|e| {
            warn!("{method} {path} failed: {e}");
        })?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let error = Error::from_response(status.as_u16(), &body, fallback);
            warn!("{method} {path} returned {status}: {error}");
            return Err(error);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
