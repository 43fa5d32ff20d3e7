//! Behaviour of the public validators and the built-in catalog
use serde_json::json;
use string_validators::{
    Catalog, Format, is_array, is_external, is_string, patterns, valid_alphabets, valid_bank,
    valid_chinese_name, valid_email, valid_id_card, valid_lower_case, valid_phone,
    valid_upper_case, valid_url,
};

#[test]
fn test_chinese_name_lengths() {
    let ideograph = "李";
    for n in 0..=6 {
        let name = ideograph.repeat(n);
        assert_eq!(valid_chinese_name(&name), (2..=4).contains(&n), "length {}", n);
    }
    assert!(!valid_chinese_name("李a"));
    assert!(!valid_chinese_name("Li Lei"));
}

#[test]
fn test_phone_examples() {
    assert!(valid_phone("13800138000"));
    assert!(!valid_phone("12345678901"));
    assert!(!valid_phone("1380013800"));
    assert!(!valid_phone("+8613800138000"));
    assert!(!valid_phone(" 13800138000"));
}

#[test]
fn test_phone_prefix_table_is_exhaustive() {
    for second in 0u8..=9 {
        for third in 0u8..=9 {
            let number = format!("1{}{}12345678", second, third);
            let allowed = patterns::DEFAULT_PHONE_PREFIXES
                .iter()
                .any(|(s, thirds)| *s == second && thirds.contains(&third));
            assert_eq!(valid_phone(&number), allowed, "{}", number);
        }
    }
}

#[test]
fn test_email_examples() {
    assert!(valid_email("user@example.com"));
    assert!(!valid_email("not-an-email"));
    assert!(valid_email("a.b+c@sub.example.co"));
}

#[test]
fn test_id_card_structure_only() {
    assert!(valid_id_card("110101199005151234"));
    assert!(!valid_id_card("110101199013151234"));
    // Same number with every possible check character
    for check in ['0', '5', '9', 'X', 'x'] {
        let number = format!("11010119900515123{}", check);
        assert!(valid_id_card(&number), "{}", number);
    }
    assert!(!valid_id_card("11010119900515123Y"));
}

#[test]
fn test_bank_examples() {
    assert!(valid_bank("622202123456789012"));
    assert!(!valid_bank("022202123456789012"));
    assert!(!valid_bank("12345"));
}

#[test]
fn test_external_examples() {
    assert!(is_external("https://example.com"));
    assert!(!is_external("/local/path"));
    assert!(is_external("tel:+11234567890"));
}

#[test]
fn test_url_tld_whitelist() {
    assert!(valid_url("https://example.com"));
    assert!(valid_url("https://example.museum/collection"));
    assert!(valid_url("http://example.de"));
    assert!(!valid_url("https://example.xyz"));
    assert!(!valid_url("https://example.app"));
}

#[test]
fn test_case_examples() {
    assert!(!valid_lower_case(""));
    assert!(valid_lower_case("abc"));
    assert!(valid_upper_case("ABC"));
    assert!(valid_alphabets("AbC"));
    assert!(!valid_alphabets("abc1"));
}

#[test]
fn test_type_predicates() {
    assert!(is_string(&json!("x")));
    assert!(!is_string(&json!(5)));
    assert!(is_array(&json!([])));
    assert!(!is_array(&json!({})));
    assert!(!is_array(&json!("abc")));
}

#[test]
fn test_catalog_is_deterministic() {
    let catalog = Catalog::builtin();
    let inputs = ["", "abc", "13800138000", "https://example.com", "张三", "x@y.zz"];
    for format in Format::ALL {
        for input in inputs {
            let first = catalog.check(format, input);
            assert_eq!(first, catalog.check(format, input), "{} {:?}", format, input);
        }
    }
}

#[test]
fn test_catalog_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                (0..100).all(|_| Catalog::builtin().check(Format::Phone, "13800138000"))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("thread"));
    }
}

#[test]
fn test_rule_sources_are_exposed() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.rule(Format::Email).as_str(), patterns::EMAIL_PATTERN);
    assert_eq!(catalog.rule(Format::IdCard).as_str(), patterns::ID_CARD_PATTERN);
    assert_eq!(catalog.rule(Format::Phone).as_str(), patterns::PHONE.as_str());
}
