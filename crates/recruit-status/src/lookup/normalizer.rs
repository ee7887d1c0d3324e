/// Canonical comparison form of an identity field: lowercased, with every `.`
/// and `,` removed, then trimmed at both ends. Inner whitespace is kept as-is.
pub fn normalize(value: &str) -> String {
    let lowered = value.to_lowercase();
    let stripped = lowered.replace(['.', ','], "");
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_drops_periods_and_commas() {
        assert_eq!(normalize("John.Doe, Jr."), "johndoe jr");
        assert_eq!(normalize("John. Doe, Jr."), normalize("john doe jr"));
    }

    #[test]
    fn keeps_other_punctuation() {
        assert_eq!(normalize("O'Neil-Smith"), "o'neil-smith");
        assert_ne!(normalize("ab-cd"), normalize("abcd"));
    }

    #[test]
    fn trims_edges_only() {
        assert_eq!(normalize("  ab  cd  "), "ab  cd");
        assert_eq!(normalize("\tab\n"), "ab");
    }

    #[test]
    fn trims_after_stripping() {
        assert_eq!(normalize("budi ."), "budi");
        assert_eq!(normalize(", budi"), "budi");
    }

    #[test]
    fn empty_and_separator_only_are_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  .,  "), "");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "",
            "  Budi Santoso  ",
            "M. Fikri, S.Kom.",
            "ÅSA.Ö, ",
            "tab\tinside",
            " . , . ",
            "Straße",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn lowercases_beyond_ascii() {
        assert_eq!(normalize("ÇAĞRI"), "çağri");
    }

    mod properties {
        use super::super::normalize;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_is_idempotent(value in any::<String>()) {
                let once = normalize(&value);
                prop_assert_eq!(normalize(&once), once);
            }

            #[test]
            fn output_has_no_separators_or_edge_whitespace(value in any::<String>()) {
                let out = normalize(&value);
                prop_assert!(!out.contains(['.', ',']));
                prop_assert_eq!(out.trim(), out.as_str());
            }
        }
    }
}
