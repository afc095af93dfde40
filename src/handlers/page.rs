//! Data every rendered page needs

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::{CurrentUser, Flash, FlashMessage};

/// Navigation and flash state shared by all templates
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub user: Option<CurrentUser>,
    pub flash: Option<FlashMessage>,
}

impl PageContext {
    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(CurrentUser::is_admin)
    }

    pub fn username(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.username.as_str())
    }

    /// Show `flash` instead of whatever arrived with the request
    pub fn with_flash(mut self, flash: FlashMessage) -> Self {
        self.flash = Some(flash);
        self
    }
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Flash(flash) = Flash::from_request_parts(parts, state).await?;

        Ok(Self {
            user: parts.extensions.get::<CurrentUser>().cloned(),
            flash,
        })
    }
}

/// One `<option>` of a filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// Options for `values`, marking the one equal to `current`
pub fn select_options<I, T>(values: I, current: Option<&str>) -> Vec<SelectOption>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| {
            let value = value.as_ref().to_string();
            let selected = current == Some(value.as_str());
            SelectOption { value, selected }
        })
        .collect()
}
