//! Error type shared by the gateway, services and CLI.

use crate::utils::validators::FieldError;
use validator::ValidationErrors;

/// Everything that can go wrong while running a command.
///
/// The variants line up with how failures are presented: validation errors
/// are listed inline next to the form, everything else ends in a popup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Form input rejected before any request was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A single free-standing field was rejected (e.g. a command argument).
    #[error("invalid {field}: {error}")]
    Field {
        field: &'static str,
        error: FieldError,
    },

    /// The API answered with a non-success status.
    #[error("API responded with {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// A protected page was requested without a valid session.
    #[error("not logged in")]
    Unauthenticated,

    /// Reading or writing the local session file failed.
    #[error("session storage error: {0}")]
    Session(String),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Broad classification used to pick popup copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    KnownApi,
    UnknownApi,
    Network,
    Unauthenticated,
    Local,
}

impl AppError {
    pub fn api(status: u16, detail: Option<String>) -> Self {
        Self::Api { status, detail }
    }

    pub fn field(field: &'static str, error: FieldError) -> Self {
        Self::Field { field, error }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn session(message: impl Into<String>) -> Self {
        Self::Session(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status for API rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The API's `detail` string, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Recognised `detail` value, if any.
    pub fn known_detail(&self) -> Option<KnownDetail> {
        self.detail().and_then(KnownDetail::parse)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthenticated) || self.status() == Some(401)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::Field { .. } => ErrorKind::Validation,
            Self::Api { .. } if self.known_detail().is_some() => ErrorKind::KnownApi,
            Self::Api { .. } => ErrorKind::UnknownApi,
            Self::Network(_) | Self::Decode(_) => ErrorKind::Network,
            Self::Unauthenticated => ErrorKind::Unauthenticated,
            Self::Session(_) | Self::Config(_) => ErrorKind::Local,
        }
    }
}

/// `detail` strings the client has tailored copy for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownDetail {
    InvalidShortUrl,
    ShortUrlExists,
    LinkNotFound,
    PasswordProtected,
    InvalidLinkPassword,
    LinkExpired,
    InvalidCredentials,
    UsernameTaken,
    EmailTaken,
    PasswordsDoNotMatch,
    NotAuthenticated,
}

impl KnownDetail {
    /// Matches a `detail` string exactly.
    ///
    /// The Portuguese strings are what the API sends for credential and
    /// registration failures.
    pub fn parse(detail: &str) -> Option<Self> {
        let known = match detail {
            "Invalid short URL" => Self::InvalidShortUrl,
            "Short URL already exists" => Self::ShortUrlExists,
            "Link not found" => Self::LinkNotFound,
            "Link is password protected" => Self::PasswordProtected,
            "Invalid password" => Self::InvalidLinkPassword,
            "Link expired" | "Link has expired" => Self::LinkExpired,
            "Invalid credentials"
            | "E-mail ou senha estão inválidos. Por favor, tente novamente." => {
                Self::InvalidCredentials
            }
            "Username already registered"
            | "Nome de usuário já registrado. Por favor, tente outro nome de usuário." => {
                Self::UsernameTaken
            }
            "Email already registered"
            | "E-mail já registrado. Por favor, tente outro e-mail." => Self::EmailTaken,
            "Passwords do not match"
            | "As senhas não coincidem. Verifique se as senhas estão iguais." => {
                Self::PasswordsDoNotMatch
            }
            "Invalid token or user not found" | "Not authenticated" => Self::NotAuthenticated,
            _ => return None,
        };
        Some(known)
    }
}
