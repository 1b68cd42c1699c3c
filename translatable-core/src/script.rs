//! Script detection used to adjust presentation (text direction, font size).
//!
//! Classification looks only at Unicode ranges. A single right-to-left character anywhere in
//! the text is enough to flag it: mixed fragments such as a Hebrew phrase with Latin
//! punctuation or verse numbers must still render right-to-left.

/// Dominant direction of a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScriptClass {
    #[default]
    Ltr,
    Rtl,
}

impl ScriptClass {
    /// Value for an HTML `dir` attribute.
    pub fn html_dir(self) -> &'static str {
        match self {
            ScriptClass::Ltr => "ltr",
            ScriptClass::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == ScriptClass::Rtl
    }
}

/// Right-to-left scripts recognised by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RtlScript {
    Hebrew,
    Arabic,
    Syriac,
    Thaana,
    Nko,
    Samaritan,
    Mandaic,
}

impl RtlScript {
    pub fn name(self) -> &'static str {
        match self {
            RtlScript::Hebrew => "hebrew",
            RtlScript::Arabic => "arabic",
            RtlScript::Syriac => "syriac",
            RtlScript::Thaana => "thaana",
            RtlScript::Nko => "nko",
            RtlScript::Samaritan => "samaritan",
            RtlScript::Mandaic => "mandaic",
        }
    }

    fn of(c: char) -> Option<RtlScript> {
        match c {
            '\u{0590}'..='\u{05FF}' | '\u{FB1D}'..='\u{FB4F}' => Some(RtlScript::Hebrew),
            '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}' => Some(RtlScript::Arabic),
            '\u{0700}'..='\u{074F}' => Some(RtlScript::Syriac),
            '\u{0780}'..='\u{07BF}' => Some(RtlScript::Thaana),
            '\u{07C0}'..='\u{07FF}' => Some(RtlScript::Nko),
            '\u{0800}'..='\u{083F}' => Some(RtlScript::Samaritan),
            '\u{0840}'..='\u{085F}' => Some(RtlScript::Mandaic),
            _ => None,
        }
    }
}

/// First right-to-left script found in `text`, skipping whitespace and punctuation.
pub fn detect_rtl_script(text: &str) -> Option<RtlScript> {
    text.chars()
        .filter(|c| !c.is_whitespace() && !c.is_ascii_punctuation())
        .find_map(RtlScript::of)
}

/// Classify `text` as right-to-left if any right-to-left character is present.
pub fn classify(text: &str) -> ScriptClass {
    match detect_rtl_script(text) {
        Some(_) => ScriptClass::Rtl,
        None => ScriptClass::Ltr,
    }
}

/// Whether `text` contains Hebrew characters.
pub fn is_hebrew(text: &str) -> bool {
    text.chars()
        .any(|c| RtlScript::of(c) == Some(RtlScript::Hebrew))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hebrew() {
        assert!(is_hebrew("שלום"));
        assert!(!is_hebrew("hello"));
        assert!(!is_hebrew(""));
    }

    #[test]
    fn test_is_hebrew_in_mixed_text() {
        assert!(is_hebrew("Genesis 1:1 בְּרֵאשִׁית"));
    }

    #[test]
    fn test_arabic_is_rtl_but_not_hebrew() {
        let text = "مرحبا";
        assert_eq!(classify(text), ScriptClass::Rtl);
        assert_eq!(detect_rtl_script(text), Some(RtlScript::Arabic));
        assert!(!is_hebrew(text));
    }

    #[test]
    fn test_first_match_policy() {
        // One Hebrew letter in otherwise Latin text still flags the text
        assert_eq!(classify("mostly latin text א"), ScriptClass::Rtl);
        assert_eq!(
            detect_rtl_script("ܐ then א"),
            Some(RtlScript::Syriac)
        );
    }

    #[test]
    fn test_ltr_defaults() {
        assert_eq!(classify(""), ScriptClass::Ltr);
        assert_eq!(classify("  \n\t"), ScriptClass::Ltr);
        assert_eq!(classify("Привет, мир!"), ScriptClass::Ltr);
        assert_eq!(ScriptClass::default(), ScriptClass::Ltr);
    }

    #[test]
    fn test_html_dir() {
        assert_eq!(classify("שלום").html_dir(), "rtl");
        assert_eq!(classify("hello").html_dir(), "ltr");
    }
}
