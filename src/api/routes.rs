//! Endpoint table of the shortener API.
//!
//! Paths are expressed as segment lists so slugs are percent-encoded when
//! they are appended to the base URL.

use crate::domain::entities::LinkId;
use reqwest::Method;

/// Every endpoint the client calls.
///
/// # Endpoints
///
/// - `POST   /short`                  - Create a short link
/// - `GET    /short/{slug}`           - Resolve a short link (`password` header if protected)
/// - `POST   /click/{slug}`           - Register a click before redirecting
/// - `PATCH  /short/{id}`             - Rename the slug
/// - `PATCH  /short/{id}/password`    - Rotate or remove the link password
/// - `PATCH  /short/{id}/expiration`  - Set or clear the expiry
/// - `DELETE /short/{id}`             - Delete a link
/// - `GET    /stats/{slug}`           - Public statistics
/// - `POST   /auth/register`          - Create an account
/// - `POST   /auth/login`             - Start a cookie session
/// - `POST   /auth/logout`            - End the session
/// - `GET    /auth/me`                - Current profile
/// - `PATCH  /auth/me/username`       - Change username
/// - `PATCH  /auth/me/email`          - Change e-mail
/// - `PATCH  /auth/me/password`       - Change password
/// - `GET    /user/links`             - Links owned by the session user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    CreateLink,
    ResolveLink(&'a str),
    RegisterClick(&'a str),
    RenameLink(LinkId),
    LinkPassword(LinkId),
    LinkExpiration(LinkId),
    DeleteLink(LinkId),
    Stats(&'a str),
    Register,
    Login,
    Logout,
    Me,
    MeUsername,
    MeEmail,
    MePassword,
    UserLinks,
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Self::ResolveLink(_) | Self::Stats(_) | Self::Me | Self::UserLinks => Method::GET,
            Self::CreateLink
            | Self::RegisterClick(_)
            | Self::Register
            | Self::Login
            | Self::Logout => Method::POST,
            Self::RenameLink(_)
            | Self::LinkPassword(_)
            | Self::LinkExpiration(_)
            | Self::MeUsername
            | Self::MeEmail
            | Self::MePassword => Method::PATCH,
            Self::DeleteLink(_) => Method::DELETE,
        }
    }

    pub fn segments(&self) -> Vec<String> {
        fn fixed(parts: &[&str]) -> Vec<String> {
            parts.iter().map(|s| s.to_string()).collect()
        }

        match self {
            Self::CreateLink => fixed(&["short"]),
            Self::ResolveLink(slug) => fixed(&["short", *slug]),
            Self::RegisterClick(slug) => fixed(&["click", *slug]),
            Self::RenameLink(id) | Self::DeleteLink(id) => vec!["short".into(), id.to_string()],
            Self::LinkPassword(id) => vec!["short".into(), id.to_string(), "password".into()],
            Self::LinkExpiration(id) => vec!["short".into(), id.to_string(), "expiration".into()],
            Self::Stats(slug) => fixed(&["stats", *slug]),
            Self::Register => fixed(&["auth", "register"]),
            Self::Login => fixed(&["auth", "login"]),
            Self::Logout => fixed(&["auth", "logout"]),
            Self::Me => fixed(&["auth", "me"]),
            Self::MeUsername => fixed(&["auth", "me", "username"]),
            Self::MeEmail => fixed(&["auth", "me", "email"]),
            Self::MePassword => fixed(&["auth", "me", "password"]),
            Self::UserLinks => fixed(&["user", "links"]),
        }
    }

    /// `/`-joined path, for logging.
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_paths() {
        assert_eq!(Endpoint::CreateLink.path(), "/short");
        assert_eq!(Endpoint::ResolveLink("abc").path(), "/short/abc");
        assert_eq!(Endpoint::RegisterClick("abc").path(), "/click/abc");
        assert_eq!(Endpoint::LinkPassword(7).path(), "/short/7/password");
        assert_eq!(Endpoint::LinkExpiration(7).path(), "/short/7/expiration");
        assert_eq!(Endpoint::Stats("abc").path(), "/stats/abc");
        assert_eq!(Endpoint::UserLinks.path(), "/user/links");
    }

    #[test]
    fn test_methods() {
        assert_eq!(Endpoint::CreateLink.method(), Method::POST);
        assert_eq!(Endpoint::ResolveLink("x").method(), Method::GET);
        assert_eq!(Endpoint::RenameLink(1).method(), Method::PATCH);
        assert_eq!(Endpoint::DeleteLink(1).method(), Method::DELETE);
        assert_eq!(Endpoint::Logout.method(), Method::POST);
        assert_eq!(Endpoint::MeEmail.method(), Method::PATCH);
    }
}
