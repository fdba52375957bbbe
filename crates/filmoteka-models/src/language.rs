/// Display language of the application.
///
/// The selected language persists as its short code under a dedicated
/// storage key; unknown stored codes fall back to the default on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ukrainian,
    English,
    French,
    Russian,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Ukrainian,
        Language::English,
        Language::French,
        Language::Russian,
    ];

    /// Short code used for persistence and the `lang` command.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ukrainian => "uk",
            Language::English => "en",
            Language::French => "fr",
            Language::Russian => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "uk" => Some(Language::Ukrainian),
            "en" => Some(Language::English),
            "fr" => Some(Language::French),
            "ru" => Some(Language::Russian),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Ukrainian
    }
}
