use std::fmt;

/// Caption languages offered for selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    #[default]
    #[value(name = "es")]
    Spanish,
    #[value(name = "en")]
    English,
    #[value(name = "fr")]
    French,
    #[value(name = "de")]
    German,
    #[value(name = "it")]
    Italian,
    #[value(name = "pt")]
    Portuguese,
}

impl Language {
    /// Selector order
    pub const ALL: [Language; 6] = [
        Language::Spanish,
        Language::English,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Spanish => "Español",
            Language::English => "Inglés",
            Language::French => "Francés",
            Language::German => "Alemán",
            Language::Italian => "Italiano",
            Language::Portuguese => "Portugués",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|l| l.code().eq_ignore_ascii_case(code))
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|l| l.display_name() == name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code())
    }
}
