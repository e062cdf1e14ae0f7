// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Languages the catalog ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Japanese,
    English,
}

/// Language used when neither the config nor the OS picks one.
pub const DEFAULT_LANGUAGE: Language = Language::Japanese;

/// Table consulted for unrecognized language codes.
pub const FALLBACK_LANGUAGE: Language = Language::English;

impl Language {
    pub const ALL: [Language; 2] = [Language::Japanese, Language::English];

    pub fn code(self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }

    /// Parses a BCP-47 code, matching on the primary language subtag only
    /// (`en-US` and `ja-JP` resolve like `en` and `ja`).
    pub fn from_code(code: &str) -> Option<Self> {
        let id: LanguageIdentifier = code.replace('_', "-").parse().ok()?;
        match id.language.as_str() {
            "ja" => Some(Language::Japanese),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Catalog key of the menu entry selecting this language.
    pub fn menu_key(self) -> &'static str {
        match self {
            Language::Japanese => "menu-lang-ja",
            Language::English => "menu-lang-en",
        }
    }
}

pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("languages", &self.bundles.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::with_language(DEFAULT_LANGUAGE)
    }
}

impl I18n {
    /// Builds the catalog and starts in the configured language, or in
    /// [`DEFAULT_LANGUAGE`] when none (or an unknown one) is configured.
    pub fn new(config_lang: Option<&str>) -> Self {
        let language = resolve_language(config_lang);
        Self::with_language(language)
    }

    pub fn with_language(language: Language) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(file_language) = filename.strip_suffix(".ftl").and_then(Language::from_code)
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
                log::error!("{filename}: {} syntax error(s) in catalog", errors.len());
                partial
            });

            let locale: LanguageIdentifier = file_language.code().parse().unwrap_or_default();
            let mut bundle = FluentBundle::new(vec![locale]);
            // Keep formatted strings byte-exact (no FSI/PDI marks around placeables).
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::error!("{filename}: {} duplicate message(s) in catalog", errors.len());
            }
            bundles.insert(file_language, bundle);
        }

        Self {
            bundles,
            current: language,
        }
    }

    pub fn language(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        self.current = language;
    }

    /// Looks up `key` for an arbitrary language code.
    ///
    /// Unknown codes fall back to the English table; keys missing from the
    /// resolved table are echoed back unchanged.
    pub fn lookup(&self, language: &str, key: &str) -> String {
        let language = Language::from_code(language).unwrap_or(FALLBACK_LANGUAGE);
        self.format(language, key, None)
    }

    /// Translates `key` in the active language.
    pub fn tr(&self, key: &str) -> String {
        self.format(self.current, key, None)
    }

    /// Translates `key` in the active language, filling Fluent variables.
    pub fn tr_with_args(&self, key: &str, args: &FluentArgs) -> String {
        self.format(self.current, key, Some(args))
    }

    fn format(&self, language: Language, key: &str, args: Option<&FluentArgs>) -> String {
        let Some(bundle) = self.bundles.get(&language) else {
            return key.to_string();
        };
        let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
            return key.to_string();
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            log::debug!("formatting {key} in {}: {errors:?}", language.code());
        }
        value.into_owned()
    }
}

fn resolve_language(config_lang: Option<&str>) -> Language {
    config_lang
        .and_then(Language::from_code)
        .unwrap_or(DEFAULT_LANGUAGE)
}
