//! Language catalogue with typological features.

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::error::Error;

macro_rules! languages {
    ($( $(#[$doc:meta])* $variant:ident => $code:literal, $name:literal; )+) => {
        /// Catalogued languages, keyed by ISO 639 code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(into = "&'static str")]
        pub enum Language {
            $( $(#[$doc])* $variant, )+
        }

        impl Language {
            /// Every catalogued language.
            pub const ALL: &'static [Language] = &[ $( Language::$variant, )+ ];

            /// ISO 639 code.
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $( Language::$variant => $code, )+
                }
            }

            /// English name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Language::$variant => $name, )+
                }
            }

            /// Looks a language up by code.
            #[must_use]
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some(Language::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

languages! {
    /// Semitic.
    Arabic => "ar", "Arabic";
    /// Semitic.
    Hebrew => "he", "Hebrew";
    /// Semitic.
    Aramaic => "arc", "Aramaic";
    /// Semitic.
    Amharic => "am", "Amharic";
    /// Semitic.
    Tigrinya => "ti", "Tigrinya";
    /// Semitic.
    Maltese => "mt", "Maltese";
    /// Semitic.
    Syriac => "syc", "Syriac";
    /// Indo-European.
    Portuguese => "pt", "Portuguese";
    /// Indo-European.
    English => "en", "English";
    /// Indo-European.
    Spanish => "es", "Spanish";
    /// Indo-European.
    French => "fr", "French";
    /// Indo-European.
    German => "de", "German";
    /// Indo-European.
    Russian => "ru", "Russian";
    /// Indo-European.
    Hindi => "hi", "Hindi";
    /// Indo-European.
    Persian => "fa", "Persian";
    /// Indo-European.
    Greek => "el", "Greek";
    /// Indo-European.
    Latin => "la", "Latin";
    /// Indo-European.
    Sanskrit => "sa", "Sanskrit";
    /// Sino-Tibetan.
    Chinese => "zh", "Chinese";
    /// Turkic.
    Turkish => "tr", "Turkish";
    /// Japonic.
    Japanese => "ja", "Japanese";
    /// Koreanic.
    Korean => "ko", "Korean";
    /// Austronesian.
    Malay => "ms", "Malay";
    /// Dravidian.
    Tamil => "ta", "Tamil";
}

impl Language {
    /// Typological features, for the languages that have them recorded.
    #[must_use]
    pub fn features(self) -> Option<LanguageFeatures> {
        use MorphologicalType::{Agglutinative, Fusional, Introflective, Isolating};
        use WritingDirection::{Ltr, Rtl};

        let f = |morphological_type, writing_direction, script, description| LanguageFeatures {
            language: self,
            morphological_type,
            writing_direction,
            has_consonantal_root: false,
            has_diacritics: false,
            has_tonal_system: false,
            script,
            description,
        };

        let features = match self {
            Self::Arabic => LanguageFeatures {
                has_consonantal_root: true,
                has_diacritics: true,
                ..f(
                    Introflective,
                    Rtl,
                    "Arabic",
                    "Arabic: introflective Semitic with trilateral roots and tashkīl",
                )
            },
            Self::Hebrew => LanguageFeatures {
                has_consonantal_root: true,
                has_diacritics: true,
                ..f(
                    Introflective,
                    Rtl,
                    "Hebrew",
                    "Hebrew: introflective Semitic with trilateral roots and niqqud",
                )
            },
            Self::Portuguese => LanguageFeatures {
                has_diacritics: true,
                ..f(
                    Fusional,
                    Ltr,
                    "Latin",
                    "Portuguese: fusional Romance with rich verbal morphology",
                )
            },
            Self::English => f(
                Fusional,
                Ltr,
                "Latin",
                "English: weakly fusional Germanic with analytic tendencies",
            ),
            Self::Russian => f(
                Fusional,
                Ltr,
                "Cyrillic",
                "Russian: fusional Slavic with aspectual pairs and cases",
            ),
            Self::Chinese => LanguageFeatures {
                has_tonal_system: true,
                ..f(
                    Isolating,
                    Ltr,
                    "Hanzi",
                    "Mandarin Chinese: isolating Sino-Tibetan with lexical tone",
                )
            },
            Self::Sanskrit => LanguageFeatures {
                has_diacritics: true,
                ..f(
                    Fusional,
                    Ltr,
                    "Devanagari",
                    "Sanskrit: Pāṇinian system with sandhi and rich derivation",
                )
            },
            Self::Turkish => f(
                Agglutinative,
                Ltr,
                "Latin",
                "Turkish: agglutinative Turkic with vowel harmony",
            ),
            Self::Japanese => f(
                Agglutinative,
                Ltr,
                "Kana/Kanji",
                "Japanese: agglutinative with mixed writing systems",
            ),
            Self::Persian => LanguageFeatures {
                has_diacritics: true,
                ..f(
                    Fusional,
                    Rtl,
                    "Arabic",
                    "Persian: Indo-European written in Arabic script",
                )
            },
            _ => return None,
        };
        Some(features)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Error> {
        Self::from_code(code).ok_or_else(|| Error::UnknownLanguage(code.to_owned()))
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.code()
    }
}

/// Morphological typology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphologicalType {
    /// One morpheme per word (Chinese).
    Isolating,
    /// Chains of single-function affixes (Turkish).
    Agglutinative,
    /// Affixes fusing several functions (Russian).
    Fusional,
    /// Words built from many bound morphemes.
    Polysynthetic,
    /// Non-concatenative root-and-pattern morphology (Semitic).
    Introflective,
}

/// Direction of writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WritingDirection {
    /// Left to right.
    #[serde(rename = "left-to-right")]
    Ltr,
    /// Right to left.
    #[serde(rename = "right-to-left")]
    Rtl,
    /// Top to bottom.
    #[serde(rename = "top-to-bottom")]
    Ttb,
}

/// Typological and structural features of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageFeatures {
    /// The language described.
    pub language: Language,
    /// Morphological typology.
    pub morphological_type: MorphologicalType,
    /// Direction of writing.
    pub writing_direction: WritingDirection,
    /// Whether words derive from consonantal roots.
    pub has_consonantal_root: bool,
    /// Whether the script uses diacritical marks.
    pub has_diacritics: bool,
    /// Whether the language has lexical tone.
    pub has_tonal_system: bool,
    /// Name of the writing system.
    pub script: &'static str,
    /// One-line description.
    pub description: &'static str,
}
