//! Script detection
//!
//! Quotes are either Latin or Devanagari; a single Devanagari code point is
//! enough to switch the font list.

/// Scripts the font catalog covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
    #[default]
    Latin,
    Devanagari,
}

impl Script {
    /// Script of a single character, if it is one we distinguish
    pub fn of_char(c: char) -> Option<Self> {
        match c as u32 {
            0x0900..=0x097F => Some(Self::Devanagari),
            _ => None,
        }
    }
}

impl From<Script> for rustybuzz::Script {
    fn from(script: Script) -> Self {
        match script {
            Script::Latin => rustybuzz::script::LATIN,
            Script::Devanagari => rustybuzz::script::DEVANAGARI,
        }
    }
}

/// Detect the script of a quote
pub fn detect_script(text: &str) -> Script {
    text.chars()
        .find_map(Script::of_char)
        .unwrap_or(Script::Latin)
}
