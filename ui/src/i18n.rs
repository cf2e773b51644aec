//! Localized UI strings.
//!
//! Bundles live in `i18n/<locale>/ecotrack_ui.ftl` and are embedded at
//! compile time. `en-US` is the fallback every other locale must cover.
//! Call [`init`] once at startup, then look strings up with [`t!`](crate::t).

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `fl!` against the shared loader.
///
/// ```ignore
/// t!("log-saved", kg = "1.2", category = "Transport")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match the bundle file stem, which is what `fl!` checks keys against.
const DOMAIN: &str = "ecotrack_ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the user's preferred languages. Safe to call again.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = select(&requested) {
            tracing::warn!("locale selection failed ({err}); using {FALLBACK}");
        }
        tracing::debug!(lang = %current_language(), "locale selected");
    });
}

/// Tag of the locale the loader is serving right now.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Switch locale at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!("ignoring unparseable locale tag {tag:?}");
        return Ok(());
    };
    select(&[lang])
}

/// Bundles are rebuilt on every selection, so isolation is switched off each
/// time. Amounts and categories are shown exactly as the backend sent them.
fn select(requested: &[LanguageIdentifier]) -> Result<(), I18nEmbedError> {
    let result = i18n_embed::select(&*LOADER, &Localizations, requested).map(|_| ());
    LOADER.set_use_isolating(false);
    result
}

/// Embedded locale tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    /// Tests that switch locale share one loader; hold this while they run.
    static LOCALE_LOCK: Mutex<()> = Mutex::new(());

    pub(crate) fn english() -> MutexGuard<'static, ()> {
        let guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        set_language("en-US").unwrap();
        guard
    }

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn lookup_and_current_language_follow_switches() {
        let _guard = english();
        assert_eq!(current_language(), "en-US");
        assert_eq!(crate::t!("nav-dashboard"), "Dashboard");

        set_language("es-ES").unwrap();
        assert_eq!(current_language(), "es-ES");
        assert_ne!(crate::t!("log-failed"), "Could not log entry");

        set_language("en-US").unwrap();
    }

    #[test]
    fn unknown_locale_keeps_fallback_strings() {
        let _guard = english();
        let _ = set_language("zz-ZZ");
        assert_eq!(crate::t!("log-failed"), "Could not log entry");
        let _ = set_language("not a tag");
        assert_eq!(crate::t!("log-failed"), "Could not log entry");
    }

    #[test]
    fn arguments_are_not_wrapped_in_isolation_marks() {
        let _guard = english();
        assert_eq!(
            crate::t!("log-saved", kg = "1.2", category = "Transport"),
            "Saved 1.2 kg CO₂ (Transport)"
        );
    }
}
