//! Text cleanup applied to each extracted block before aggregation.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: whitespace collapse only
    Minimal,
    /// Standard cleanup: NFC + ligatures + replacement char removal
    #[default]
    Standard,
    /// Aggressive cleanup: Standard + hyphenation repair + PUA removal
    Aggressive,
}

/// Options for block cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Remove Private Use Area (PUA) characters
    pub remove_pua: bool,

    /// Re-join words hyphenated across line breaks
    pub fix_hyphenation: bool,

    /// Keep blank-line runs inside a block as paragraph delimiters
    pub preserve_paragraph_breaks: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: false,
            fix_ligatures: false,
            remove_replacement_char: false,
            remove_pua: false,
            fix_hyphenation: false,
            preserve_paragraph_breaks: false,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            remove_replacement_char: true,
            ..Self::minimal()
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            remove_pua: true,
            fix_hyphenation: true,
            ..Self::standard()
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    whitespace_regex: Regex,
    paragraph_break_regex: Regex,
    hyphenation_regex: Regex,
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            whitespace_regex: Regex::new(r"\s+").expect("valid whitespace regex"),
            paragraph_break_regex: Regex::new(r"\n[ \t\r\x0C]*\n\s*")
                .expect("valid paragraph break regex"),
            hyphenation_regex: Regex::new(r"([a-zA-Z])-[ \t]*\r?\n\s*([a-z])")
                .expect("valid hyphenation regex"),
            ligature_map: vec![
                ("\u{FB00}", "ff"),  // ﬀ
                ("\u{FB01}", "fi"),  // ﬁ
                ("\u{FB02}", "fl"),  // ﬂ
                ("\u{FB03}", "ffi"), // ﬃ
                ("\u{FB04}", "ffl"), // ﬄ
                ("\u{FB05}", "st"),  // ﬅ
                ("\u{FB06}", "st"),  // ﬆ
            ],
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Get the pipeline options.
    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Clean one block.
    ///
    /// The result has no leading or trailing whitespace, and contains no
    /// whitespace other than single spaces (plus `"\n\n"` between inner
    /// paragraphs when breaks are preserved).
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.remove_pua {
            result = remove_pua_chars(&result);
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        // Must run while line breaks still exist
        if self.options.fix_hyphenation {
            result = self
                .hyphenation_regex
                .replace_all(&result, "$1$2")
                .into_owned();
        }

        if self.options.preserve_paragraph_breaks {
            self.paragraph_break_regex
                .split(&result)
                .map(|part| self.collapse(part))
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n")
        } else {
            self.collapse(&result)
        }
    }

    fn collapse(&self, text: &str) -> String {
        self.whitespace_regex
            .replace_all(text.trim(), " ")
            .into_owned()
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}

fn remove_pua_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            !(0xE000..=0xF8FF).contains(&code)
                && !(0xF0000..=0xFFFFD).contains(&code)
                && !(0x100000..=0x10FFFD).contains(&code)
        })
        .collect()
}
