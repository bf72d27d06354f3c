//! Property tests for fretes-core.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "round-trips".
//!
//! Run with: `cargo test --test properties`

use proptest::prelude::*;

use fretes_core::{
    Cnpj, Cpf, DocumentoKind, clean_digits, format_cnpj, format_cpf, validate_cnpj, validate_cpf,
    validate_documento,
};

/// Expected check digit for a weighted mod-11 sum, per the official rule.
fn mod11(sum: u32) -> u32 {
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

/// Complete a 9-digit base into a full CPF by deriving both check digits.
fn complete_cpf(base: &[u32]) -> String {
    let mut digits = base.to_vec();

    let first = mod11(
        digits
            .iter()
            .enumerate()
            .map(|(i, d)| d * (10 - i as u32))
            .sum(),
    );
    digits.push(first);

    let second = mod11(
        digits
            .iter()
            .enumerate()
            .map(|(i, d)| d * (11 - i as u32))
            .sum(),
    );
    digits.push(second);

    digits
        .iter()
        .map(|d| char::from_digit(*d, 10).unwrap())
        .collect()
}

/// Complete a 12-digit base into a full CNPJ by deriving both check digits.
fn complete_cnpj(base: &[u32]) -> String {
    const WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    let mut digits = base.to_vec();

    let first = mod11(digits.iter().zip(WEIGHTS_FIRST).map(|(d, w)| d * w).sum());
    digits.push(first);

    let second = mod11(digits.iter().zip(WEIGHTS_SECOND).map(|(d, w)| d * w).sum());
    digits.push(second);

    digits
        .iter()
        .map(|d| char::from_digit(*d, 10).unwrap())
        .collect()
}

proptest! {
    /// PROPERTY: `clean_digits` keeps only digits and preserves their order.
    #[test]
    fn property_clean_digits_keeps_only_digits_in_order(s in "(?s).{0,64}") {
        let cleaned = clean_digits(&s);
        prop_assert!(cleaned.chars().all(|c| c.is_ascii_digit()));

        // Every cleaned digit appears in the input, in the same order.
        let mut remaining = cleaned.chars().peekable();
        for c in s.chars() {
            if remaining.peek() == Some(&c) {
                remaining.next();
            }
        }
        prop_assert!(remaining.peek().is_none());
    }

    /// PROPERTY: `clean_digits` is idempotent.
    #[test]
    fn property_clean_digits_idempotent(s in "(?s).{0,64}") {
        let once = clean_digits(&s);
        prop_assert_eq!(clean_digits(&once), once);
    }

    /// PROPERTY: all-identical digit sequences never validate.
    #[test]
    fn property_repeated_digit_sequences_rejected(d in 0..=9u32) {
        let digit = char::from_digit(d, 10).unwrap();
        let cpf: String = std::iter::repeat_n(digit, 11).collect();
        let cnpj: String = std::iter::repeat_n(digit, 14).collect();

        prop_assert!(!validate_cpf(&cpf));
        prop_assert!(!validate_cnpj(&cnpj));
    }

    /// PROPERTY: a CPF synthesized with the official check-digit rule
    /// validates, parses, and round-trips through formatting.
    #[test]
    fn property_generated_cpf_validates(
        base in proptest::collection::vec(0..=9u32, 9),
    ) {
        // An all-identical base always completes to a repeated-digit
        // sequence, which is rejected by design.
        prop_assume!(base.windows(2).any(|pair| pair[0] != pair[1]));

        let cpf = complete_cpf(&base);
        prop_assert!(validate_cpf(&cpf));
        prop_assert!(Cpf::parse(&cpf).is_ok());
        prop_assert_eq!(clean_digits(&format_cpf(&cpf)), cpf.clone());

        // The punctuated form validates too.
        prop_assert!(validate_cpf(&format_cpf(&cpf)));
    }

    /// PROPERTY: a CNPJ synthesized with the official check-digit rule
    /// validates, parses, and round-trips through formatting.
    #[test]
    fn property_generated_cnpj_validates(
        base in proptest::collection::vec(0..=9u32, 12),
    ) {
        // The all-zero base completes to fourteen zeros, which is
        // rejected as a repeated-digit sequence.
        prop_assume!(base.iter().any(|&d| d != 0));

        let cnpj = complete_cnpj(&base);
        prop_assert!(validate_cnpj(&cnpj));
        prop_assert!(Cnpj::parse(&cnpj).is_ok());
        prop_assert_eq!(clean_digits(&format_cnpj(&cnpj)), cnpj.clone());
        prop_assert!(validate_cnpj(&format_cnpj(&cnpj)));
    }

    /// PROPERTY: tampering with a check digit invalidates a generated CPF.
    #[test]
    fn property_tampered_cpf_check_digit_fails(
        base in proptest::collection::vec(0..=9u32, 9),
        bump in 1..=9u32,
    ) {
        prop_assume!(base.windows(2).any(|pair| pair[0] != pair[1]));

        let cpf = complete_cpf(&base);
        let mut digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
        digits[10] = (digits[10] + bump) % 10;

        let tampered: String = digits
            .iter()
            .map(|d| char::from_digit(*d, 10).unwrap())
            .collect();
        prop_assert!(!validate_cpf(&tampered));
    }

    /// PROPERTY: the classifier is total and its kind follows the cleaned
    /// digit count; UNKNOWN is never valid.
    #[test]
    fn property_classifier_total_and_consistent(s in "(?s).{0,64}") {
        let report = validate_documento(&s);
        let digits = clean_digits(&s).len();

        let expected_kind = match digits {
            11 => DocumentoKind::Cpf,
            14 => DocumentoKind::Cnpj,
            _ => DocumentoKind::Unknown,
        };
        prop_assert_eq!(report.kind, expected_kind);

        if report.kind == DocumentoKind::Unknown {
            prop_assert!(!report.is_valid);
        }
    }

    /// PROPERTY: formatting leaves input with the wrong digit count
    /// unchanged.
    #[test]
    fn property_format_wrong_length_unchanged(s in "(?s).{0,32}") {
        let digits = clean_digits(&s).len();

        if digits != 11 {
            prop_assert_eq!(format_cpf(&s), s.clone());
        }
        if digits != 14 {
            prop_assert_eq!(format_cnpj(&s), s.clone());
        }
    }
}
