//! Arabic derivational patterns (awzān).
//!
//! Each pattern is written with the placeholder radicals ف ع ل. A vocalized
//! form matches a pattern when substituting the root's three radicals for
//! the placeholders reproduces the form exactly.

/// One Form I pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wazn {
    /// The pattern spelled with ف ع ل, used as its name.
    pub name: &'static str,
    /// `"verb"` or `"noun"`.
    pub category: &'static str,
    /// What the pattern derives.
    pub description: &'static str,
}

/// Known Form I patterns.
pub const ARABIC_PATTERNS: &[Wazn] = &[
    Wazn {
        name: "فَعَلَ",
        category: "verb",
        description: "Form I perfective active",
    },
    Wazn {
        name: "فَعِلَ",
        category: "verb",
        description: "Form I perfective active (medial kasra)",
    },
    Wazn {
        name: "فَاعِل",
        category: "noun",
        description: "active participle",
    },
    Wazn {
        name: "مَفْعُول",
        category: "noun",
        description: "passive participle",
    },
    Wazn {
        name: "فِعَال",
        category: "noun",
        description: "verbal noun",
    },
    Wazn {
        name: "فِعَالَة",
        category: "noun",
        description: "verbal noun (feminine)",
    },
    Wazn {
        name: "فَعْلَة",
        category: "noun",
        description: "instance noun",
    },
    Wazn {
        name: "فُعُول",
        category: "noun",
        description: "broken plural",
    },
    Wazn {
        name: "فُعُل",
        category: "noun",
        description: "broken plural",
    },
    Wazn {
        name: "مَفْعَل",
        category: "noun",
        description: "noun of place",
    },
    Wazn {
        name: "مَفْعَلَة",
        category: "noun",
        description: "noun of place (feminine)",
    },
];

const PLACEHOLDERS: [char; 3] = ['\u{0641}', '\u{0639}', '\u{0644}'];

/// Fills a pattern with three radicals.
#[must_use]
pub fn apply(pattern: &str, radicals: [char; 3]) -> String {
    pattern
        .chars()
        .map(|c| match PLACEHOLDERS.iter().position(|p| *p == c) {
            Some(index) => radicals[index],
            None => c,
        })
        .collect()
}

/// Finds the pattern that `form` instantiates for `radicals`.
#[must_use]
pub fn identify(form: &str, radicals: &[char]) -> Option<&'static Wazn> {
    let radicals: [char; 3] = radicals.try_into().ok()?;
    ARABIC_PATTERNS
        .iter()
        .find(|wazn| apply(wazn.name, radicals) == form)
}
