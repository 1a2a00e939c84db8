use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of supported output languages for model feedback.
///
/// The language name is substituted verbatim into the system prompt; it is
/// the only runtime-configurable request parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLanguage {
    #[default]
    English,
    Ukrainian,
    Russian,
    Spanish,
    French,
    German,
}

impl OutputLanguage {
    pub const ALL: [OutputLanguage; 6] = [
        OutputLanguage::English,
        OutputLanguage::Ukrainian,
        OutputLanguage::Russian,
        OutputLanguage::Spanish,
        OutputLanguage::French,
        OutputLanguage::German,
    ];

    /// The name as it appears in the prompt and the language selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLanguage::English => "English",
            OutputLanguage::Ukrainian => "Ukrainian",
            OutputLanguage::Russian => "Russian",
            OutputLanguage::Spanish => "Spanish",
            OutputLanguage::French => "French",
            OutputLanguage::German => "German",
        }
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
