//! Popup notices: the single surface for errors and confirmations.

use colored::Colorize;

use crate::error::{AppError, KnownDetail};
use crate::ui::messages::{Locale, Text, field_error_text};

/// What the user was doing when the popup appeared; picks the title of
/// generic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Shorten,
    Login,
    Register,
    Logout,
    LoadProfile,
    UpdateProfile,
    ManageLinks,
    Resolve,
    Stats,
}

impl Operation {
    fn failure_title(self) -> Text {
        match self {
            Self::Shorten => Text::ShortenFailedTitle,
            Self::Login => Text::LoginFailedTitle,
            Self::Register => Text::RegisterFailedTitle,
            Self::Logout => Text::LogoutFailedTitle,
            Self::LoadProfile => Text::LoadFailedTitle,
            Self::UpdateProfile | Self::ManageLinks => Text::UpdateFailedTitle,
            Self::Resolve => Text::LinkNotFoundTitle,
            Self::Stats => Text::StatsFailedTitle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub description: Option<String>,
    pub tone: Tone,
}

impl Popup {
    pub fn error(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            tone: Tone::Error,
        }
    }

    pub fn success(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            tone: Tone::Success,
        }
    }

    fn from_text(title: Text, description: Text, locale: Locale) -> Self {
        Self::error(title.get(locale), Some(description.get(locale).to_string()))
    }

    /// Chooses the popup copy for a failed operation.
    ///
    /// Known API `detail` values get tailored copy; unknown ones show the
    /// raw detail under the operation's failure title, or the generic
    /// fallback when there is no detail at all.
    pub fn for_error(op: Operation, err: &AppError, locale: Locale) -> Self {
        let fallback = || Some(Text::UnexpectedError.get(locale).to_string());

        match err {
            AppError::Field { error, .. } => Self::error(
                Text::ValidationTitle.get(locale),
                Some(field_error_text(*error, locale).to_string()),
            ),
            AppError::Validation(_) => {
                Self::from_text(Text::ValidationTitle, Text::ValidationDescription, locale)
            }
            AppError::Unauthenticated => {
                Self::from_text(Text::NotLoggedInTitle, Text::NotLoggedInDescription, locale)
            }
            AppError::Api { detail, .. } => match err.known_detail() {
                Some(known) => Self::for_known_detail(op, known, locale),
                None if op == Operation::Resolve => Self::error(
                    Text::LinkNotFoundTitle.get(locale),
                    Some(
                        detail
                            .clone()
                            .unwrap_or_else(|| Text::LinkNotFoundDescription.get(locale).to_string()),
                    ),
                ),
                None => Self::error(
                    op.failure_title().get(locale),
                    detail.clone().or_else(fallback),
                ),
            },
            AppError::Network(_) => Self::error(Text::ConnectionFailedTitle.get(locale), fallback()),
            AppError::Decode(_) => Self::error(op.failure_title().get(locale), fallback()),
            AppError::Session(message) => {
                Self::error(Text::SessionErrorTitle.get(locale), Some(message.clone()))
            }
            AppError::Config(message) => {
                Self::error(Text::ConfigErrorTitle.get(locale), Some(message.clone()))
            }
        }
    }

    fn for_known_detail(op: Operation, known: KnownDetail, locale: Locale) -> Self {
        let under_op = |description: Text| {
            Self::error(
                op.failure_title().get(locale),
                Some(description.get(locale).to_string()),
            )
        };

        match known {
            KnownDetail::InvalidShortUrl => {
                Self::from_text(Text::InvalidSlugTitle, Text::InvalidSlugDescription, locale)
            }
            KnownDetail::ShortUrlExists => {
                Self::from_text(Text::SlugTakenTitle, Text::SlugTakenDescription, locale)
            }
            KnownDetail::LinkNotFound => {
                Self::from_text(Text::LinkNotFoundTitle, Text::LinkNotFoundDescription, locale)
            }
            KnownDetail::PasswordProtected => Self::from_text(
                Text::PasswordRequiredTitle,
                Text::PasswordRequiredDescription,
                locale,
            ),
            KnownDetail::InvalidLinkPassword => Self::from_text(
                Text::InvalidLinkPasswordTitle,
                Text::InvalidLinkPasswordDescription,
                locale,
            ),
            KnownDetail::LinkExpired => {
                Self::from_text(Text::LinkExpiredTitle, Text::LinkExpiredDescription, locale)
            }
            KnownDetail::NotAuthenticated => {
                Self::from_text(Text::NotLoggedInTitle, Text::NotLoggedInDescription, locale)
            }
            KnownDetail::InvalidCredentials => under_op(Text::InvalidCredentials),
            KnownDetail::UsernameTaken => under_op(Text::UsernameTaken),
            KnownDetail::EmailTaken => under_op(Text::EmailTaken),
            KnownDetail::PasswordsDoNotMatch => under_op(Text::PasswordsDoNotMatch),
        }
    }

    /// Box lines without colour.
    pub fn lines(&self) -> Vec<String> {
        let mut body = vec![self.title.clone()];
        if let Some(description) = &self.description {
            body.push(description.clone());
        }

        let width = body.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let border = "─".repeat(width + 2);

        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(format!("┌{border}┐"));
        for line in &body {
            let pad = width - line.chars().count();
            lines.push(format!("│ {line}{} │", " ".repeat(pad)));
        }
        lines.push(format!("└{border}┘"));
        lines
    }

    /// Coloured box, ready for stderr.
    pub fn render(&self) -> String {
        let lines = self.lines();
        let last = lines.len().saturating_sub(1);
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let styled = match (self.tone, i) {
                    (Tone::Error, 1) => line.red().bold(),
                    (Tone::Success, 1) => line.green().bold(),
                    (_, i) if i == 0 || i == last => line.bright_black(),
                    _ => line.normal(),
                };
                styled.to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validators::FieldError;

    fn api(status: u16, detail: &str) -> AppError {
        AppError::api(status, Some(detail.to_string()))
    }

    #[test]
    fn test_invalid_short_url() {
        let popup = Popup::for_error(Operation::Shorten, &api(400, "Invalid short URL"), Locale::PtBr);
        assert_eq!(popup.title, "O link curto inserido é inválido!");
        assert_eq!(
            popup.description.as_deref(),
            Some("Use de 3 a 16 caracteres, apenas letras, números e hífens.")
        );
    }

    #[test]
    fn test_short_url_exists() {
        let popup = Popup::for_error(
            Operation::Shorten,
            &api(400, "Short URL already exists"),
            Locale::PtBr,
        );
        assert_eq!(popup.title, "Link encurtado já existe!");
    }

    #[test]
    fn test_unknown_detail_is_shown_verbatim() {
        let popup = Popup::for_error(Operation::Shorten, &api(422, "URL too long"), Locale::PtBr);
        assert_eq!(popup.title, "Ocorreu um erro ao encurtar o link!");
        assert_eq!(popup.description.as_deref(), Some("URL too long"));
    }

    #[test]
    fn test_missing_detail_uses_fallback() {
        let popup = Popup::for_error(Operation::Shorten, &AppError::api(500, None), Locale::PtBr);
        assert_eq!(
            popup.description.as_deref(),
            Some("Erro inesperado. Tente novamente mais tarde.")
        );
    }

    #[test]
    fn test_decode_failure_uses_fallback() {
        let popup = Popup::for_error(Operation::Stats, &AppError::decode("eof"), Locale::En);
        assert_eq!(popup.title, "Could not load the statistics");
        assert_eq!(
            popup.description.as_deref(),
            Some("Unexpected error. Please try again later.")
        );
    }

    #[test]
    fn test_unauthenticated() {
        let popup = Popup::for_error(Operation::LoadProfile, &AppError::Unauthenticated, Locale::PtBr);
        assert_eq!(popup.title, "Você não está logado");
        assert_eq!(
            popup.description.as_deref(),
            Some("Faça login para acessar seu perfil")
        );
    }

    #[test]
    fn test_credentials_error_under_login_title() {
        let popup = Popup::for_error(Operation::Login, &api(401, "Invalid credentials"), Locale::PtBr);
        assert_eq!(popup.title, "Erro no login");
        assert_eq!(
            popup.description.as_deref(),
            Some("E-mail ou senha estão inválidos. Por favor, tente novamente.")
        );
    }

    #[test]
    fn test_resolve_failure_is_link_not_found() {
        let popup = Popup::for_error(Operation::Resolve, &AppError::api(404, None), Locale::PtBr);
        assert_eq!(popup.title, "Link não encontrado");
        assert_eq!(
            popup.description.as_deref(),
            Some("O link solicitado não está disponível")
        );
    }

    #[test]
    fn test_field_error() {
        let err = AppError::field("slug", FieldError::SlugReserved);
        let popup = Popup::for_error(Operation::ManageLinks, &err, Locale::En);
        assert_eq!(popup.title, "Check the fields below");
        assert_eq!(popup.description.as_deref(), Some("This short link is reserved"));
    }

    #[test]
    fn test_box_lines_are_aligned() {
        let popup = Popup::success("Link criado", Some("encurtar.link/abc".into()));
        let lines = popup.lines();
        assert_eq!(lines.len(), 4);
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(lines[1].contains("Link criado"));
    }
}
