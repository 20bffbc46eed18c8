use std::fmt;

pub const LANGUAGE_STORAGE_KEY: &str = "preferred-language";

pub const TITLE_JA: &str = "まつりのあと | 札幌すごいAIまつり";
pub const TITLE_EN: &str = "After the Festival | Sapporo Sugoi AI Festival";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ja, Language::En];

    pub fn parse(value: &str) -> Result<Self, LanguageParseError> {
        match value {
            "ja" => Ok(Language::Ja),
            "en" => Ok(Language::En),
            other => Err(LanguageParseError {
                found: other.to_string(),
            }),
        }
    }

    /// Resolves a stored preference. Anything but an exact `ja`/`en` falls
    /// back to the default language.
    pub fn from_persisted(raw: Option<&str>) -> Self {
        raw.and_then(|value| Self::parse(value).ok())
            .unwrap_or_default()
    }

    pub fn from_content_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.content_id() == id)
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Language::Ja => TITLE_JA,
            Language::En => TITLE_EN,
        }
    }

    pub fn content_id(self) -> &'static str {
        match self {
            Language::Ja => "content-ja",
            Language::En => "content-en",
        }
    }

    pub fn switch_id(self) -> &'static str {
        match self {
            Language::Ja => "lang-ja",
            Language::En => "lang-en",
        }
    }

    pub fn result_registry_id(self) -> &'static str {
        match self {
            Language::Ja => "result-data-ja",
            Language::En => "result-data-en",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageParseError {
    pub found: String,
}

impl fmt::Display for LanguageParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language '{}', expected ja or en", self.found)
    }
}

impl std::error::Error for LanguageParseError {}
