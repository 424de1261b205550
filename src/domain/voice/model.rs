use serde::{Deserialize, Serialize};

/// A validated voice choice plus the language tag derived from its name
///
/// Google voice names embed the locale as a prefix ("en-US-Wavenet-F"), so the
/// language code is just the first two hyphen-delimited segments rejoined.
/// Names with fewer segments are used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceSelection {
    pub name: String,
    pub language_code: String,
}

impl VoiceSelection {
    pub fn from_name(name: &str) -> Self {
        let language_code = name.split('-').take(2).collect::<Vec<_>>().join("-");
        Self {
            name: name.to_string(),
            language_code,
        }
    }
}

impl std::fmt::Display for VoiceSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.language_code)
    }
}
