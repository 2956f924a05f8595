//! Rendering context - provides theme and locale to components

use crate::i18n::Locale;
use crate::theme::Theme;

/// Context passed down the component tree during rendering
#[derive(Clone)]
pub struct RenderContext<'a> {
    /// Current theme
    pub theme: &'a Theme,

    /// Locale for formatting dates and labels
    pub locale: &'a Locale,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context from a theme
    pub fn new(theme: &'a Theme) -> Self {
        RenderContext {
            theme,
            locale: &theme.locale,
        }
    }

    /// Create a child context with a different locale
    pub fn with_locale(&self, locale: &'a Locale) -> Self {
        RenderContext {
            theme: self.theme,
            locale,
        }
    }
}

/// Hook trait for accessing theme from context
pub trait UseTheme {
    fn use_theme<'a>(&self, ctx: &'a RenderContext) -> &'a Theme {
        ctx.theme
    }
}

/// Hook trait for accessing locale from context
pub trait UseLocale {
    fn use_locale<'a>(&self, ctx: &'a RenderContext) -> &'a Locale {
        ctx.locale
    }
}

impl<T> UseTheme for T {}
impl<T> UseLocale for T {}
