//! Localized user-facing copy.
//!
//! Portuguese is the product's original language; English is the default
//! for the terminal client.

use std::fmt;
use std::str::FromStr;

use crate::utils::validators::FieldError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::PtBr => "pt-BR",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported locale '{0}', expected 'en' or 'pt-BR'")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts `en`, `en-US`, `pt`, `pt-BR`, `pt_BR` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "pt" | "pt-br" => Ok(Self::PtBr),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Every piece of copy the client prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    // Popups
    InvalidSlugTitle,
    InvalidSlugDescription,
    SlugTakenTitle,
    SlugTakenDescription,
    ShortenFailedTitle,
    UnexpectedError,
    LinkNotFoundTitle,
    LinkNotFoundDescription,
    NotLoggedInTitle,
    NotLoggedInDescription,
    LoginFailedTitle,
    RegisterFailedTitle,
    InvalidCredentials,
    UsernameTaken,
    EmailTaken,
    PasswordsDoNotMatch,
    PasswordRequiredTitle,
    PasswordRequiredDescription,
    InvalidLinkPasswordTitle,
    InvalidLinkPasswordDescription,
    LinkExpiredTitle,
    LinkExpiredDescription,
    ConnectionFailedTitle,
    ValidationTitle,
    ValidationDescription,
    UpdateFailedTitle,
    LoadFailedTitle,
    StatsFailedTitle,
    LogoutFailedTitle,
    SessionErrorTitle,
    ConfigErrorTitle,

    // Success notices
    LinkCreatedTitle,
    ChangesSavedTitle,
    LoggedInTitle,
    RegisteredTitle,
    LoggedOutTitle,
    LinkDeletedTitle,

    // Page copy
    ProfileHeading,
    LinksHeading,
    StatsHeading,
    RedirectHeading,
    UsernameLabel,
    EmailLabel,
    OriginalLinkLabel,
    ShortLinkLabel,
    ClicksLabel,
    CreatedAtLabel,
    ExpiresAtLabel,
    ProtectedLabel,
    Yes,
    No,
    Never,
    Expired,
    NoLinks,
    Total,
    Cancelled,
    NotSignedIn,
    SignedInAs,

    // Prompts
    OriginalUrlPrompt,
    CustomSlugPrompt,
    LinkPasswordPrompt,
    ExpirationPrompt,
    NewSlugPrompt,
    UsernamePrompt,
    EmailPrompt,
    PasswordPrompt,
    ConfirmPasswordPrompt,
    CurrentEmailPrompt,
    NewEmailPrompt,
    ConfirmEmailPrompt,
    CurrentPasswordPrompt,
    NewPasswordPrompt,
    RememberMePrompt,
    ProceedPrompt,
    ConfirmDeletePrompt,
    ConfirmRemovePasswordPrompt,
    ConfirmClearExpirationPrompt,

    // Field errors
    UsernameLength,
    UsernameCharset,
    EmailRequired,
    EmailInvalid,
    EmailConsecutiveDots,
    EmailMismatch,
    PasswordTooShort,
    PasswordNoLetter,
    PasswordNoDigit,
    PasswordMismatch,
    SlugLength,
    SlugCharset,
    SlugReserved,
    UrlInvalid,
    UrlScheme,
    ExpirationInPast,
    ExpirationFormat,
    Required,
}

impl Text {
    pub fn get(self, locale: Locale) -> &'static str {
        let (en, pt) = self.pair();
        match locale {
            Locale::En => en,
            Locale::PtBr => pt,
        }
    }

    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Self::InvalidSlugTitle => (
                "The short link you entered is invalid!",
                "O link curto inserido é inválido!",
            ),
            Self::InvalidSlugDescription => (
                "Use 3 to 16 characters: letters, numbers and hyphens only.",
                "Use de 3 a 16 caracteres, apenas letras, números e hífens.",
            ),
            Self::SlugTakenTitle => ("Short link already exists!", "Link encurtado já existe!"),
            Self::SlugTakenDescription => (
                "The short link you entered is already in use. Please choose another one.",
                "O link curto inserido já está em uso. Por favor, escolha outro.",
            ),
            Self::ShortenFailedTitle => (
                "Something went wrong while shortening the link!",
                "Ocorreu um erro ao encurtar o link!",
            ),
            Self::UnexpectedError => (
                "Unexpected error. Please try again later.",
                "Erro inesperado. Tente novamente mais tarde.",
            ),
            Self::LinkNotFoundTitle => ("Link not found", "Link não encontrado"),
            Self::LinkNotFoundDescription => (
                "The requested link is not available",
                "O link solicitado não está disponível",
            ),
            Self::NotLoggedInTitle => ("You are not logged in", "Você não está logado"),
            Self::NotLoggedInDescription => (
                "Log in to access your profile",
                "Faça login para acessar seu perfil",
            ),
            Self::LoginFailedTitle => ("Login failed", "Erro no login"),
            Self::RegisterFailedTitle => ("Sign-up failed", "Erro no cadastro"),
            Self::InvalidCredentials => (
                "E-mail or password is invalid. Please try again.",
                "E-mail ou senha estão inválidos. Por favor, tente novamente.",
            ),
            Self::UsernameTaken => (
                "Username already registered. Please try another username.",
                "Nome de usuário já registrado. Por favor, tente outro nome de usuário.",
            ),
            Self::EmailTaken => (
                "E-mail already registered. Please try another e-mail.",
                "E-mail já registrado. Por favor, tente outro e-mail.",
            ),
            Self::PasswordsDoNotMatch => (
                "The passwords do not match. Make sure both are the same.",
                "As senhas não coincidem. Verifique se as senhas estão iguais.",
            ),
            Self::PasswordRequiredTitle => (
                "This link is password protected",
                "Este link é protegido por senha",
            ),
            Self::PasswordRequiredDescription => (
                "Enter the link password to continue.",
                "Informe a senha do link para continuar.",
            ),
            Self::InvalidLinkPasswordTitle => ("Wrong password", "Senha incorreta"),
            Self::InvalidLinkPasswordDescription => (
                "The password for this link is not correct.",
                "A senha informada para este link não está correta.",
            ),
            Self::LinkExpiredTitle => ("This link has expired", "Este link expirou"),
            Self::LinkExpiredDescription => (
                "The owner set an expiration date that has already passed.",
                "O dono do link definiu uma data de expiração que já passou.",
            ),
            Self::ConnectionFailedTitle => (
                "Could not reach the server",
                "Não foi possível conectar ao servidor",
            ),
            Self::ValidationTitle => ("Check the fields below", "Verifique os campos abaixo"),
            Self::ValidationDescription => (
                "Some fields are invalid. Nothing was sent.",
                "Alguns campos são inválidos. Nada foi enviado.",
            ),
            Self::UpdateFailedTitle => (
                "Could not save your changes",
                "Não foi possível salvar as alterações",
            ),
            Self::LoadFailedTitle => ("Could not load your data", "Erro ao carregar seus dados"),
            Self::StatsFailedTitle => (
                "Could not load the statistics",
                "Erro ao carregar as estatísticas",
            ),
            Self::LogoutFailedTitle => ("Could not log out", "Erro ao sair"),
            Self::SessionErrorTitle => (
                "Could not access the saved session",
                "Não foi possível acessar a sessão salva",
            ),
            Self::ConfigErrorTitle => ("Invalid configuration", "Configuração inválida"),

            Self::LinkCreatedTitle => ("Link shortened!", "Link encurtado com sucesso!"),
            Self::ChangesSavedTitle => ("Changes saved", "Alterações salvas"),
            Self::LoggedInTitle => ("Logged in", "Login realizado"),
            Self::RegisteredTitle => ("Account created", "Conta criada"),
            Self::LoggedOutTitle => ("Logged out", "Você saiu da sua conta"),
            Self::LinkDeletedTitle => ("Link deleted", "Link excluído"),

            Self::ProfileHeading => ("My profile", "Meu Perfil"),
            Self::LinksHeading => ("My links", "Meus Links"),
            Self::StatsHeading => ("Link information", "Informações do Link"),
            Self::RedirectHeading => (
                "Do you want to be redirected to:",
                "Você deseja ser redirecionado para o link:",
            ),
            Self::UsernameLabel => ("Username", "Nome de usuário"),
            Self::EmailLabel => ("E-mail", "E-mail"),
            Self::OriginalLinkLabel => ("Original link", "Link original"),
            Self::ShortLinkLabel => ("Short link", "Link encurtado"),
            Self::ClicksLabel => ("Clicks", "Cliques"),
            Self::CreatedAtLabel => ("Created", "Criado em"),
            Self::ExpiresAtLabel => ("Expires", "Expira em"),
            Self::ProtectedLabel => ("Password", "Senha"),
            Self::Yes => ("yes", "sim"),
            Self::No => ("no", "não"),
            Self::Never => ("never", "nunca"),
            Self::Expired => ("expired", "expirado"),
            Self::NoLinks => ("You have no links yet", "Você ainda não possui links"),
            Self::Total => ("Total", "Total"),
            Self::Cancelled => ("Cancelled", "Cancelado"),
            Self::NotSignedIn => ("Not logged in", "Não conectado"),
            Self::SignedInAs => ("Logged in as", "Conectado como"),

            Self::OriginalUrlPrompt => ("Paste your long URL", "Cole sua URL longa"),
            Self::CustomSlugPrompt => (
                "Custom short link (optional)",
                "Link curto personalizado (opcional)",
            ),
            Self::LinkPasswordPrompt => ("Link password", "Senha do link"),
            Self::ExpirationPrompt => (
                "Expiration (YYYY-MM-DD HH:MM, local time)",
                "Expiração (AAAA-MM-DD HH:MM, horário local)",
            ),
            Self::NewSlugPrompt => ("New short link", "Novo link curto"),
            Self::UsernamePrompt => ("Username", "Nome de usuário"),
            Self::EmailPrompt => ("E-mail", "E-mail"),
            Self::PasswordPrompt => ("Password", "Senha"),
            Self::ConfirmPasswordPrompt => ("Confirm password", "Confirmar senha"),
            Self::CurrentEmailPrompt => ("Current e-mail", "E-mail atual"),
            Self::NewEmailPrompt => ("New e-mail", "Novo e-mail"),
            Self::ConfirmEmailPrompt => ("Confirm new e-mail", "Confirmar novo e-mail"),
            Self::CurrentPasswordPrompt => ("Current password", "Senha atual"),
            Self::NewPasswordPrompt => ("New password", "Nova senha"),
            Self::RememberMePrompt => ("Remember me?", "Lembrar de mim?"),
            Self::ProceedPrompt => ("Proceed?", "Prosseguir?"),
            Self::ConfirmDeletePrompt => (
                "Delete this link? This cannot be undone.",
                "Excluir este link? Esta ação não pode ser desfeita.",
            ),
            Self::ConfirmRemovePasswordPrompt => (
                "Remove the password from this link?",
                "Remover a senha deste link?",
            ),
            Self::ConfirmClearExpirationPrompt => (
                "Remove the expiration from this link?",
                "Remover a expiração deste link?",
            ),

            Self::UsernameLength => (
                "Username must be 3 to 16 characters long",
                "O nome de usuário deve possuir entre 3 a 16 caracteres",
            ),
            Self::UsernameCharset => (
                "Username may only contain letters, numbers, underscores (_) or hyphens (-)",
                "O nome de usuário deve conter apenas letras, números, underlines (_) ou hífens (-)",
            ),
            Self::EmailRequired => ("E-mail is required", "O e-mail é obrigatório"),
            Self::EmailInvalid => (
                "The e-mail is not valid. Check it and try again.",
                "O e-mail inserido não é válido. Verifique se o e-mail está correto e tente novamente.",
            ),
            Self::EmailConsecutiveDots => (
                "The e-mail contains invalid characters. Check it and try again.",
                "O e-mail contém caracteres inválidos. Verifique se o e-mail está correto e tente novamente.",
            ),
            Self::EmailMismatch => ("The e-mails do not match", "Os e-mails não coincidem"),
            Self::PasswordTooShort => (
                "Password must have at least 8 characters",
                "A senha deve ter no mínimo 8 caracteres",
            ),
            Self::PasswordNoLetter => (
                "Password must contain at least one letter",
                "A senha deve conter pelo menos uma letra",
            ),
            Self::PasswordNoDigit => (
                "Password must contain at least one number",
                "A senha deve conter pelo menos um número",
            ),
            Self::PasswordMismatch => ("The passwords do not match", "As senhas não coincidem"),
            Self::SlugLength => (
                "Short link must be 3 to 16 characters long",
                "O link curto deve possuir entre 3 a 16 caracteres",
            ),
            Self::SlugCharset => (
                "Use letters, numbers, hyphens and underscores only",
                "Use apenas letras, números, hífens e underlines",
            ),
            Self::SlugReserved => (
                "This short link is reserved",
                "Este link curto é reservado",
            ),
            Self::UrlInvalid => ("Enter a valid URL", "Insira uma URL válida"),
            Self::UrlScheme => (
                "The URL must start with http:// or https://",
                "A URL deve começar com http:// ou https://",
            ),
            Self::ExpirationInPast => (
                "The expiration must be in the future",
                "A data de expiração deve estar no futuro",
            ),
            Self::ExpirationFormat => (
                "Use the format YYYY-MM-DD HH:MM",
                "Use o formato AAAA-MM-DD HH:MM",
            ),
            Self::Required => ("This field is required", "Este campo é obrigatório"),
        }
    }
}

impl From<FieldError> for Text {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::UsernameLength => Self::UsernameLength,
            FieldError::UsernameCharset => Self::UsernameCharset,
            FieldError::EmailRequired => Self::EmailRequired,
            FieldError::EmailInvalid => Self::EmailInvalid,
            FieldError::EmailConsecutiveDots => Self::EmailConsecutiveDots,
            FieldError::EmailMismatch => Self::EmailMismatch,
            FieldError::PasswordTooShort => Self::PasswordTooShort,
            FieldError::PasswordNoLetter => Self::PasswordNoLetter,
            FieldError::PasswordNoDigit => Self::PasswordNoDigit,
            FieldError::PasswordMismatch => Self::PasswordMismatch,
            FieldError::SlugLength => Self::SlugLength,
            FieldError::SlugCharset => Self::SlugCharset,
            FieldError::SlugReserved => Self::SlugReserved,
            FieldError::UrlInvalid => Self::UrlInvalid,
            FieldError::UrlScheme => Self::UrlScheme,
            FieldError::ExpirationInPast => Self::ExpirationInPast,
            FieldError::ExpirationFormat => Self::ExpirationFormat,
            FieldError::Required => Self::Required,
        }
    }
}

/// Localized message for a field error.
pub fn field_error_text(err: FieldError, locale: Locale) -> &'static str {
    Text::from(err).get(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_display_roundtrip() {
        for locale in [Locale::En, Locale::PtBr] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_portuguese_copy() {
        assert_eq!(
            Text::UnexpectedError.get(Locale::PtBr),
            "Erro inesperado. Tente novamente mais tarde."
        );
        assert_eq!(
            field_error_text(FieldError::PasswordNoDigit, Locale::PtBr),
            "A senha deve conter pelo menos um número"
        );
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(Text::LinkNotFoundTitle.get(Locale::default()), "Link not found");
    }
}
