use super::{RED, RESET};
use std::fmt::{Debug, Display, Formatter, Result};

/// Describes an error, and allows adding contextual help text.
///
/// # Examples
///
/// ```
/// use folio::Error;
///
/// Error::build("missing template")
///     .with_name("invoice")
///     .with_help("add the template with `.add_template`");
/// ```
///
/// When printed with `println!("{:#}", error)` the [`Error`] produces this
/// output:
///
/// ```text
/// error: missing template
///   = help: add the template with `.add_template`
/// ```
pub struct Error {
    /// Describes the cause of the [`Error`].
    reason: String,
    /// Additional information to display with the [`Error`].
    help: Option<String>,
    /// The name of the template that the [`Error`] comes from.
    name: Option<String>,
}

impl Error {
    /// Create a new [`Error`] with the given reason text.
    ///
    /// The additional fields may be populated using the various methods
    /// defined on `Error`.
    pub fn build<T>(reason: T) -> Self
    where
        T: Into<String>,
    {
        Error {
            reason: reason.into(),
            help: None,
            name: None,
        }
    }

    /// Set the reason text, which is a short summary of the [`Error`].
    pub fn with_reason<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.reason = text.into();

        self
    }

    /// Set the name text, which is the name of the template that the
    /// [`Error`] is related to.
    pub fn with_name<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.name = Some(text.into());

        self
    }

    /// Set the help text, which is contextual information to accompany the
    /// reason text.
    pub fn with_help<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.help = Some(text.into());

        self
    }

    /// Return the name of the template that the error is related to.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Error")
            .field("reason", &self.reason)
            .field("name", &self.name)
            .field("help", &self.help)
            .finish()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let header = format!("{RED}error{RESET}");
        write!(f, "{header}: {}", self.reason)?;

        if f.alternate() {
            if let Some(help) = &self.help {
                write!(f, "\n  = help: {help}")?;
            }
        }

        Ok(())
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.reason == other.reason && self.help == other.help && self.name == other.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let error = Error::build("missing template")
            .with_name("invoice")
            .with_help("add it first");

        assert_eq!(error.get_name(), Some("invoice"));
        assert!(error.to_string().contains("missing template"));
    }

    #[test]
    fn test_display_alternate_shows_help() {
        let error = Error::build("missing template").with_help("add it first");

        assert!(format!("{error:#}").contains("= help: add it first"));
        assert!(!format!("{error}").contains("help"));
    }
}
