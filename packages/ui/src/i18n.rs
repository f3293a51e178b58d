use serde::{Deserialize, Serialize};

use crate::dom::{ContentShape, Document, Query};
use crate::SiteConfig;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    De,
    Fr,
    En,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::De, Lang::Fr, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::De => "de",
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    /// Short label shown on language controls.
    pub fn label(self) -> &'static str {
        match self {
            Lang::De => "DE",
            Lang::Fr => "FR",
            Lang::En => "EN",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Lang::De => "Deutsch",
            Lang::Fr => "Français",
            Lang::En => "English",
        }
    }

    /// Attribute holding this language's text variant on a localizable element.
    pub fn data_attr(self) -> &'static str {
        match self {
            Lang::De => "data-de",
            Lang::Fr => "data-fr",
            Lang::En => "data-en",
        }
    }

    /// Parse a language code. Region subtags are ignored (`de-CH` is German).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(|c: char| c == '-' || c == '_').next()?;
        match primary.to_ascii_lowercase().as_str() {
            "de" => Some(Lang::De),
            "fr" => Some(Lang::Fr),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

/// How visitors pick a language. A site uses exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SwitchMode {
    /// One button per language.
    Selector { languages: Vec<Lang> },
    /// A single control flipping between two languages.
    Toggle { pair: [Lang; 2] },
}

impl Default for SwitchMode {
    fn default() -> Self {
        SwitchMode::Selector {
            languages: Lang::ALL.to_vec(),
        }
    }
}

impl SwitchMode {
    pub fn languages(&self) -> &[Lang] {
        match self {
            SwitchMode::Selector { languages } => languages.as_slice(),
            SwitchMode::Toggle { pair } => pair.as_slice(),
        }
    }

    pub fn supports(&self, lang: Lang) -> bool {
        self.languages().contains(&lang)
    }

    /// The language after `current` in switcher order, wrapping around.
    ///
    /// For a toggle this is the complement. An unknown or unsupported current
    /// language moves to the first configured one.
    pub fn next_after(&self, current: Option<Lang>) -> Option<Lang> {
        let languages = self.languages();
        let position = current.and_then(|lang| languages.iter().position(|l| *l == lang));
        match position {
            Some(index) => languages.get((index + 1) % languages.len()).copied(),
            None => languages.first().copied(),
        }
    }
}

/// Accessible label for a toggle that switches to `target`.
pub fn toggle_aria_label(target: Lang) -> String {
    format!("Switch language to {}", target.native_name())
}

/// Owns the active language and rewrites localizable elements to match it.
#[derive(Debug, Clone)]
pub struct LocalizationSwitcher {
    mode: SwitchMode,
    active: String,
    button_class: String,
    toggle_id: String,
    active_class: String,
}

impl LocalizationSwitcher {
    /// Starts on the configured default. The rendered markup already shows it.
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            mode: config.languages.switcher.clone(),
            active: config.languages.default_lang.code().to_string(),
            button_class: config.languages.button_class.clone(),
            toggle_id: config.languages.toggle_id.clone(),
            active_class: config.active_class.clone(),
        }
    }

    pub fn mode(&self) -> &SwitchMode {
        &self.mode
    }

    /// The last code applied, verbatim.
    pub fn active_code(&self) -> &str {
        &self.active
    }

    pub fn active(&self) -> Option<Lang> {
        Lang::from_code(&self.active)
    }

    /// Switch the page to `code`.
    ///
    /// Codes no element carries a variant for leave the content untouched but
    /// still update the `lang` attribute and control states.
    pub fn set_language<D: Document>(&mut self, doc: &D, code: &str) {
        doc.set_document_lang(code);
        self.localize(doc, code);
        self.sync_controls(doc, code);
        self.active = code.to_string();
    }

    /// Selector click: switch unless `code` is empty or already active.
    pub fn select<D: Document>(&mut self, doc: &D, code: &str) -> bool {
        if code.is_empty() || code == self.active {
            return false;
        }
        self.set_language(doc, code);
        true
    }

    /// Toggle click: flip to the other language.
    pub fn toggle<D: Document>(&mut self, doc: &D) -> Option<Lang> {
        let next = self.mode.next_after(self.active())?;
        self.set_language(doc, next.code());
        Some(next)
    }

    fn localize<D: Document>(&self, doc: &D, code: &str) {
        let variant_attr = format!("data-{}", code.to_ascii_lowercase());
        let localizable = Lang::ALL.map(Lang::data_attr);

        for element in doc.query(Query::AnyAttr(&localizable)) {
            let Some(variant) = doc.attr(&element, &variant_attr) else {
                continue;
            };
            if variant.is_empty() {
                continue;
            }
            match doc.content_shape(&element) {
                ContentShape::SingleText => doc.set_text(&element, &variant),
                ContentShape::Mixed => doc.set_markup(&element, &variant),
            }
        }
    }

    fn sync_controls<D: Document>(&self, doc: &D, code: &str) {
        for button in doc.query(Query::Class(&self.button_class)) {
            let selected = doc.attr(&button, "data-lang").as_deref() == Some(code);
            doc.set_class(&button, &self.active_class, selected);
        }

        if !matches!(self.mode, SwitchMode::Toggle { .. }) {
            return;
        }
        let Some(toggle) = doc.element_by_id(&self.toggle_id) else {
            return;
        };
        if let Some(next) = self.mode.next_after(Lang::from_code(code)) {
            doc.set_text(&toggle, next.label());
            doc.set_attr(&toggle, "aria-label", &toggle_aria_label(next));
            doc.set_attr(&toggle, "data-lang", next.code());
        }
    }
}
