//! Vocalization and cantillation marks of the Arabic and Hebrew scripts.

use ttm_core::{MarkFunction, MarkPosition};
use ttm_core::MarkFunction::{Cantillation, Gemination, Other, Vowel};
use ttm_core::MarkPosition::{Above, Below, Inline};

/// Name, placement and role of one combining mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkInfo {
    /// Conventional name.
    pub name: &'static str,
    /// Placement relative to the base letter.
    pub position: MarkPosition,
    /// Linguistic role.
    pub function: MarkFunction,
}

const fn mark(name: &'static str, position: MarkPosition, function: MarkFunction) -> MarkInfo {
    MarkInfo {
        name,
        position,
        function,
    }
}

/// True for the Arabic tashkīl and Qur'anic annotation marks.
#[must_use]
pub fn is_arabic_mark(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06DC}'
        | '\u{06DF}'..='\u{06E4}'
        | '\u{06E7}'
        | '\u{06E8}'
        | '\u{06EA}'..='\u{06ED}')
}

/// True for Hebrew niqqud, cantillation and in-word punctuation marks.
#[must_use]
pub fn is_hebrew_mark(c: char) -> bool {
    matches!(c, '\u{0591}'..='\u{05C7}')
}

/// True for the Hebrew cantillation accents (taʿamei ha-miqra).
#[must_use]
pub fn is_hebrew_cantillation(c: char) -> bool {
    matches!(c, '\u{0591}'..='\u{05AF}')
}

/// Describes an Arabic mark. Unnamed marks in the range come back as
/// generic annotations.
#[must_use]
pub fn describe_arabic(c: char) -> MarkInfo {
    match c {
        '\u{064B}' => mark("fathatan", Above, Vowel),
        '\u{064C}' => mark("dammatan", Above, Vowel),
        '\u{064D}' => mark("kasratan", Below, Vowel),
        '\u{064E}' => mark("fatha", Above, Vowel),
        '\u{064F}' => mark("damma", Above, Vowel),
        '\u{0650}' => mark("kasra", Below, Vowel),
        '\u{0651}' => mark("shadda", Above, Gemination),
        '\u{0652}' => mark("sukun", Above, Other),
        '\u{0653}' => mark("maddah", Above, Other),
        '\u{0654}' => mark("hamza above", Above, Other),
        '\u{0655}' => mark("hamza below", Below, Other),
        '\u{0656}' => mark("subscript alef", Below, Vowel),
        '\u{0670}' => mark("superscript alef", Above, Vowel),
        '\u{0610}'..='\u{061A}' => mark("honorific sign", Above, Other),
        '\u{06E3}' | '\u{06EA}' | '\u{06ED}' => mark("quranic annotation", Below, Other),
        _ => mark("quranic annotation", Above, Other),
    }
}

/// Describes a Hebrew mark.
#[must_use]
pub fn describe_hebrew(c: char) -> MarkInfo {
    match c {
        '\u{0591}' => mark("etnahta", Below, Cantillation),
        '\u{0592}' => mark("segol accent", Above, Cantillation),
        '\u{0593}' => mark("shalshelet", Above, Cantillation),
        '\u{0594}' => mark("zaqef qatan", Above, Cantillation),
        '\u{0595}' => mark("zaqef gadol", Above, Cantillation),
        '\u{0596}' => mark("tipeha", Below, Cantillation),
        '\u{0597}' => mark("revia", Above, Cantillation),
        '\u{0598}' => mark("zarqa", Above, Cantillation),
        '\u{0599}' => mark("pashta", Above, Cantillation),
        '\u{059A}' => mark("yetiv", Below, Cantillation),
        '\u{059B}' => mark("tevir", Below, Cantillation),
        '\u{059C}' => mark("geresh", Above, Cantillation),
        '\u{059D}' => mark("geresh muqdam", Above, Cantillation),
        '\u{059E}' => mark("gershayim", Above, Cantillation),
        '\u{059F}' => mark("qarney para", Above, Cantillation),
        '\u{05A0}' => mark("telisha gedola", Above, Cantillation),
        '\u{05A1}' => mark("pazer", Above, Cantillation),
        '\u{05A2}' => mark("atnah hafukh", Below, Cantillation),
        '\u{05A3}' => mark("munah", Below, Cantillation),
        '\u{05A4}' => mark("mahapakh", Below, Cantillation),
        '\u{05A5}' => mark("merkha", Below, Cantillation),
        '\u{05A6}' => mark("merkha kefula", Below, Cantillation),
        '\u{05A7}' => mark("darga", Below, Cantillation),
        '\u{05A8}' => mark("qadma", Above, Cantillation),
        '\u{05A9}' => mark("telisha qetana", Above, Cantillation),
        '\u{05AA}' => mark("yerah ben yomo", Below, Cantillation),
        '\u{05AB}' => mark("ole", Above, Cantillation),
        '\u{05AC}' => mark("iluy", Above, Cantillation),
        '\u{05AD}' => mark("dehi", Below, Cantillation),
        '\u{05AE}' => mark("zinor", Above, Cantillation),
        '\u{05AF}' => mark("masora circle", Above, Cantillation),
        '\u{05B0}' => mark("sheva", Below, Vowel),
        '\u{05B1}' => mark("hataf segol", Below, Vowel),
        '\u{05B2}' => mark("hataf patah", Below, Vowel),
        '\u{05B3}' => mark("hataf qamats", Below, Vowel),
        '\u{05B4}' => mark("hiriq", Below, Vowel),
        '\u{05B5}' => mark("tsere", Below, Vowel),
        '\u{05B6}' => mark("segol", Below, Vowel),
        '\u{05B7}' => mark("patah", Below, Vowel),
        '\u{05B8}' => mark("qamats", Below, Vowel),
        '\u{05B9}' => mark("holam", Above, Vowel),
        '\u{05BA}' => mark("holam haser for vav", Above, Vowel),
        '\u{05BB}' => mark("qubuts", Below, Vowel),
        '\u{05BC}' => mark("dagesh", Inline, Gemination),
        '\u{05BD}' => mark("meteg", Below, Other),
        '\u{05BE}' => mark("maqaf", Inline, Other),
        '\u{05BF}' => mark("rafe", Above, Other),
        '\u{05C0}' => mark("paseq", Inline, Other),
        '\u{05C1}' => mark("shin dot", Above, Other),
        '\u{05C2}' => mark("sin dot", Above, Other),
        '\u{05C3}' => mark("sof pasuq", Inline, Other),
        '\u{05C4}' => mark("upper dot", Above, Other),
        '\u{05C5}' => mark("lower dot", Below, Other),
        '\u{05C6}' => mark("nun hafukha", Inline, Other),
        '\u{05C7}' => mark("qamats qatan", Below, Vowel),
        _ => mark("hebrew mark", Above, Other),
    }
}

/// Folds Hebrew final letter forms onto their medial forms.
#[must_use]
pub fn fold_hebrew_final(c: char) -> char {
    match c {
        'ך' => 'כ',
        'ם' => 'מ',
        'ן' => 'נ',
        'ף' => 'פ',
        'ץ' => 'צ',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_range_boundaries() {
        assert!(is_arabic_mark('\u{064E}'));
        assert!(is_arabic_mark('\u{0670}'));
        assert!(is_arabic_mark('\u{06ED}'));
        assert!(!is_arabic_mark('\u{06E9}'));
        assert!(!is_arabic_mark('ك'));
    }

    #[test]
    fn hebrew_cantillation_is_a_subrange() {
        assert!(is_hebrew_cantillation('\u{0591}'));
        assert!(!is_hebrew_cantillation('\u{05B0}'));
        assert!(is_hebrew_mark('\u{05C7}'));
        assert!(!is_hebrew_mark('א'));
    }

    #[test]
    fn named_marks() {
        assert_eq!(describe_arabic('\u{0651}').function, MarkFunction::Gemination);
        assert_eq!(describe_arabic('\u{0650}').position, MarkPosition::Below);
        assert_eq!(describe_hebrew('\u{05BC}').position, MarkPosition::Inline);
        assert_eq!(describe_hebrew('\u{05B9}').name, "holam");
        assert_eq!(describe_hebrew('\u{0596}').function, MarkFunction::Cantillation);
    }

    #[test]
    fn final_forms_fold() {
        let folded: String = "מלך".chars().map(fold_hebrew_final).collect();
        assert_eq!(folded, "מלכ");
    }
}
