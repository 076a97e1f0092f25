//! `reqwest` implementation of [`ShortenerGateway`].

use crate::api::dto::{
    CreateLinkRequest, CreateLinkResponse, ErrorBody, LinkExpirationRequest, LinkPasswordRequest,
    LinkResponse, LinkStatsResponse, LoginRequest, RegisterRequest, RenameLinkRequest,
    ResolveLinkResponse, UpdateEmailRequest, UpdatePasswordRequest, UpdateUsernameRequest,
    UserResponse,
};
use crate::api::routes::Endpoint;
use crate::domain::ShortenerGateway;
use crate::domain::entities::{
    CreatedLink, Credentials, EmailChange, Link, LinkId, LinkStats, NewLink, PasswordChange,
    Registration, ResolvedLink, UserProfile,
};
use crate::error::AppError;
use crate::infrastructure::session::Session;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the password of a protected link.
const LINK_PASSWORD_HEADER: &str = "password";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP gateway to the shortener API.
///
/// Authentication is cookie based: the jar picks up the session cookie from
/// `/auth/login` and sends it on every later request. [`HttpGateway::session`]
/// exports the jar so the CLI can persist it between runs.
pub struct HttpGateway {
    http: reqwest::Client,
    api_base: Url,
    jar: Arc<Jar>,
}

impl HttpGateway {
    /// Creates a gateway with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `api_base_url` is not an absolute
    /// http(s) URL, and [`AppError::Network`] if the client cannot be built.
    pub fn new(api_base_url: &str) -> Result<Self, AppError> {
        Self::with_timeouts(api_base_url, DEFAULT_REQUEST_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Creates a gateway with explicit request and connect timeouts.
    ///
    /// # Errors
    ///
    /// See [`HttpGateway::new`].
    pub fn with_timeouts(
        api_base_url: &str,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, AppError> {
        let api_base = Url::parse(api_base_url)
            .map_err(|e| AppError::config(format!("invalid API base URL '{api_base_url}': {e}")))?;
        if api_base.cannot_be_a_base() || !matches!(api_base.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "API base URL must be an http(s) URL, got '{api_base_url}'"
            )));
        }

        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base,
            jar,
        })
    }

    /// Seeds the cookie jar from a persisted session.
    ///
    /// Sessions issued by a different API base URL are ignored.
    pub fn restore_session(&self, session: &Session) {
        if session.api_base_url.trim_end_matches('/') != self.api_base.as_str().trim_end_matches('/')
        {
            warn!(
                session_api = %session.api_base_url,
                current_api = %self.api_base,
                "Ignoring session saved for a different API"
            );
            return;
        }
        for cookie in &session.cookies {
            self.jar.add_cookie_str(cookie, &self.api_base);
        }
        debug!(cookies = session.cookies.len(), "Session restored");
    }

    /// Exports the cookies currently held for the API, if any.
    pub fn session(&self) -> Option<Session> {
        let header = self.jar.cookies(&self.api_base)?;
        let cookies: Vec<String> = header
            .to_str()
            .ok()?
            .split(';')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        if cookies.is_empty() {
            return None;
        }
        Some(Session::new(self.api_base.as_str(), cookies))
    }

    /// Base URL requests are sent to.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    fn url(&self, endpoint: &Endpoint<'_>) -> Result<Url, AppError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::config("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    fn request(&self, endpoint: &Endpoint<'_>) -> Result<RequestBuilder, AppError> {
        Ok(self.http.request(endpoint.method(), self.url(endpoint)?))
    }

    /// Sends a request and turns non-success statuses into [`AppError::Api`].
    async fn send(&self, endpoint: &Endpoint<'_>, request: RequestBuilder) -> Result<Response, AppError> {
        debug!(method = %endpoint.method(), path = %endpoint.path(), "Sending request");

        let response = request.send().await.inspect_err(|e| {
            warn!(path = %endpoint.path(), error = %e, "Request failed");
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(path = %endpoint.path(), status = status.as_u16(), "Request succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = ErrorBody::parse(&body).detail_text();
        warn!(
            path = %endpoint.path(),
            status = status.as_u16(),
            detail = detail.as_deref().unwrap_or("-"),
            "Request rejected"
        );
        Err(AppError::api(status.as_u16(), detail))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<'_>,
        request: RequestBuilder,
    ) -> Result<T, AppError> {
        let response = self.send(endpoint, request).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("{} {}: {e}", endpoint.method(), endpoint.path())))
    }
}

#[async_trait]
impl ShortenerGateway for HttpGateway {
    async fn create_link(&self, new_link: NewLink) -> Result<CreatedLink, AppError> {
        let endpoint = Endpoint::CreateLink;
        let body = CreateLinkRequest::from(new_link);
        let request = self.request(&endpoint)?.json(&body);
        let created: CreateLinkResponse = self.send_json(&endpoint, request).await?;
        Ok(created.into())
    }

    async fn resolve_link(
        &self,
        slug: &str,
        password: Option<String>,
    ) -> Result<ResolvedLink, AppError> {
        let endpoint = Endpoint::ResolveLink(slug);
        let mut request = self.request(&endpoint)?;
        if let Some(password) = password {
            request = request.header(LINK_PASSWORD_HEADER, password);
        }
        let resolved: ResolveLinkResponse = self.send_json(&endpoint, request).await?;
        Ok(resolved.into_entity(slug))
    }

    async fn register_click(&self, slug: &str) -> Result<(), AppError> {
        let endpoint = Endpoint::RegisterClick(slug);
        let request = self.request(&endpoint)?;
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn rename_link(&self, id: LinkId, new_slug: &str) -> Result<(), AppError> {
        let endpoint = Endpoint::RenameLink(id);
        let request = self
            .request(&endpoint)?
            .json(&RenameLinkRequest { short_url: new_slug });
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn set_link_password(
        &self,
        id: LinkId,
        password: Option<String>,
    ) -> Result<(), AppError> {
        let endpoint = Endpoint::LinkPassword(id);
        let request = self
            .request(&endpoint)?
            .json(&LinkPasswordRequest { password });
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn set_link_expiration(
        &self,
        id: LinkId,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        let endpoint = Endpoint::LinkExpiration(id);
        let request = self
            .request(&endpoint)?
            .json(&LinkExpirationRequest { expires_at });
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn delete_link(&self, id: LinkId) -> Result<(), AppError> {
        let endpoint = Endpoint::DeleteLink(id);
        let request = self.request(&endpoint)?;
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn link_stats(&self, slug: &str) -> Result<LinkStats, AppError> {
        let endpoint = Endpoint::Stats(slug);
        let request = self.request(&endpoint)?;
        let stats: LinkStatsResponse = self.send_json(&endpoint, request).await?;
        Ok(stats.into())
    }

    async fn register(&self, registration: Registration) -> Result<(), AppError> {
        let endpoint = Endpoint::Register;
        let request = self
            .request(&endpoint)?
            .json(&RegisterRequest::from(&registration));
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn login(&self, credentials: Credentials) -> Result<(), AppError> {
        let endpoint = Endpoint::Login;
        let request = self
            .request(&endpoint)?
            .json(&LoginRequest::from(&credentials));
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), AppError> {
        let endpoint = Endpoint::Logout;
        let request = self.request(&endpoint)?;
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<UserProfile, AppError> {
        let endpoint = Endpoint::Me;
        let request = self.request(&endpoint)?;
        let user: UserResponse = self.send_json(&endpoint, request).await?;
        Ok(user.into())
    }

    async fn update_username(&self, username: &str) -> Result<(), AppError> {
        let endpoint = Endpoint::MeUsername;
        let request = self
            .request(&endpoint)?
            .json(&UpdateUsernameRequest { username });
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn update_email(&self, change: EmailChange) -> Result<(), AppError> {
        let endpoint = Endpoint::MeEmail;
        let request = self
            .request(&endpoint)?
            .json(&UpdateEmailRequest::from(&change));
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn update_password(&self, change: PasswordChange) -> Result<(), AppError> {
        let endpoint = Endpoint::MePassword;
        let request = self
            .request(&endpoint)?
            .json(&UpdatePasswordRequest::from(&change));
        self.send(&endpoint, request).await?;
        Ok(())
    }

    async fn user_links(&self) -> Result<Vec<Link>, AppError> {
        let endpoint = Endpoint::UserLinks;
        let request = self.request(&endpoint)?;
        let links: Vec<LinkResponse> = self.send_json(&endpoint, request).await?;
        Ok(links.into_iter().map(Link::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_base() {
        assert!(matches!(
            HttpGateway::new("ftp://example.com"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(HttpGateway::new("not a url"), Err(AppError::Config(_))));
    }

    #[test]
    fn test_url_joins_segments_under_base_path() {
        let gateway = HttpGateway::new("https://api.example.com/v1/").unwrap();
        let url = gateway.url(&Endpoint::LinkExpiration(9)).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/short/9/expiration");

        let gateway = HttpGateway::new("https://api.example.com").unwrap();
        let url = gateway.url(&Endpoint::Me).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/auth/me");
    }

    #[test]
    fn test_url_encodes_slug() {
        let gateway = HttpGateway::new("https://api.example.com").unwrap();
        let url = gateway.url(&Endpoint::Stats("a b/c")).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/stats/a%20b%2Fc");
    }

    #[test]
    fn test_session_roundtrip_through_jar() {
        let gateway = HttpGateway::new("https://api.example.com").unwrap();
        assert!(gateway.session().is_none());

        let session = Session::new("https://api.example.com/", vec!["session=abc".to_string()]);
        gateway.restore_session(&session);

        let exported = gateway.session().unwrap();
        assert_eq!(exported.cookies, vec!["session=abc".to_string()]);
    }

    #[test]
    fn test_session_for_other_api_is_ignored() {
        let gateway = HttpGateway::new("https://api.example.com").unwrap();
        let session = Session::new("https://other.example.com", vec!["session=abc".to_string()]);
        gateway.restore_session(&session);
        assert!(gateway.session().is_none());
    }
}
