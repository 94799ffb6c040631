use extkit::codec::{EnumCodec, VariantInput};
use extkit::ExtkitError;

extkit::described_enum! {
    pub enum Ones {
        Zero = 0,
        One = 1,
        Two = 2,
        Three = 3,
        Four = 4,
        Five = 5,
        Six = 6,
        Seven = 7,
        Eight = 8 => "eight",
    }
}

extkit::described_enum! {
    pub enum Greek {
        Alpha = 0 => "alpha",
        Beta = 1 => "beta",
        Gamma = 2,
        Delta = 3,
        Zeta = 5,
        Omicron = 15,
    }
}

extkit::described_enum! {
    pub enum DurationUnit {
        Days,
        Weeks,
        Months,
    }
}

#[test]
fn test_every_variant_round_trips() {
    for info in Ones::VARIANTS {
        assert_eq!(Ones::from_name(info.name).unwrap(), info.variant);
        assert_eq!(Ones::from_int_value(info.value).unwrap(), info.variant);
        assert_eq!(
            Ones::to_description(info.name).unwrap(),
            info.resolved_description()
        );
    }
}

#[test]
fn test_extension_queries() {
    assert_eq!(Ones::Eight.to_int(), 8);
    assert_eq!(Ones::Eight.name(), "Eight");
    assert_eq!(Ones::Eight.description(), "eight");
    assert_eq!(DurationUnit::Days.description(), DurationUnit::Days.name());
    assert_eq!(Ones::count(), 9);
}

#[test]
fn test_dictionary_by_value() {
    let dictionary = Ones::to_dictionary_by_value();
    assert_eq!(dictionary.len(), Ones::count());
    assert_eq!(dictionary[&8], "Eight");
    assert_eq!(dictionary[&0], "Zero");
}

#[test]
fn test_sorted_map_by_name() {
    let map = Ones::to_sorted_map_by_name();
    let names: Vec<&str> = map.keys().copied().collect();
    assert_eq!(names.first(), Some(&"Eight"));
    assert_eq!(names.last(), Some(&"Zero"));
    assert_eq!(map["Three"], 3);
}

#[test]
fn test_ordered_name_list() {
    let list = Ones::to_ordered_name_list();
    assert_eq!(list.len(), Ones::count());
    assert_eq!(
        list,
        vec!["Eight", "Five", "Four", "One", "Seven", "Six", "Three", "Two", "Zero"]
    );
}

#[test]
fn test_description_map_by_value() {
    let map = Ones::to_description_map_by_value();
    assert_eq!(map[&8], "eight");
    assert_eq!(map[&7], "Seven");
}

#[test]
fn test_description_list_keeps_declaration_order() {
    let list = Ones::to_description_list();
    assert_eq!(list[0], "Zero");
    assert_eq!(list[8], "eight");
}

#[test]
fn test_from_description() {
    assert_eq!(Ones::from_description("eight"), Ones::Eight);
    assert_eq!(Ones::from_description("eighty"), Ones::Zero);
    assert_eq!(Ones::from_description_or("eighty", Ones::One), Ones::One);
    assert_eq!(Ones::find_by_description("eighty"), None);
}

#[test]
fn test_to_description() {
    assert_eq!(Ones::to_description("Eight").unwrap(), "eight");
    assert_eq!(DurationUnit::to_description("Days").unwrap(), "Days");
    assert!(matches!(
        DurationUnit::to_description("Years"),
        Err(ExtkitError::InvalidArgument { .. })
    ));
}

#[test]
fn test_from_int_value() {
    assert_eq!(Greek::from_int_value(2).unwrap(), Greek::Gamma);
    assert!(matches!(
        Greek::from_int_value(99),
        Err(ExtkitError::InvalidArgument { message }) if message.contains("99")
    ));
    assert_eq!(Greek::from_int_value_or(99, Greek::Zeta), Greek::Zeta);
}

#[test]
fn test_from_name_is_case_sensitive() {
    assert_eq!(Greek::from_name("Gamma").unwrap(), Greek::Gamma);
    assert!(Greek::from_name("gamma").is_err());
    assert!(Greek::from_name("Cat").is_err());
}

#[test]
fn test_try_from_name() {
    assert_eq!(Greek::try_from_name("gAmMa", None), Some(Greek::Gamma));
    assert_eq!(Greek::try_from_name("Cat", None), None);
    assert_eq!(Greek::try_from_name("Cat", Some(Greek::Delta)), Some(Greek::Delta));
}

#[test]
fn test_to_enum() {
    assert_eq!(Greek::to_enum(Some("beta"), Greek::Alpha), Greek::Beta);
    assert_eq!(Greek::to_enum(Some("nope"), Greek::Alpha), Greek::Alpha);
    assert_eq!(Greek::to_enum(None, Greek::Zeta), Greek::Zeta);
}

#[test]
fn test_parse_to_variants() {
    let parsed = Greek::parse_to_variants("alpha, beta, zeta, omicron").unwrap();
    assert_eq!(
        parsed,
        vec![Greek::Alpha, Greek::Beta, Greek::Zeta, Greek::Omicron]
    );

    let parsed = Greek::parse_to_variants("Delta;gamma").unwrap();
    assert_eq!(parsed, vec![Greek::Delta, Greek::Gamma]);
}

#[test]
fn test_parse_to_variants_single_variant() {
    let parsed = Greek::parse_to_variants(VariantInput::Variant(Greek::Beta)).unwrap();
    assert_eq!(parsed, vec![Greek::Beta]);
}

#[test]
fn test_parse_to_variants_failures() {
    assert!(matches!(
        Greek::parse_to_variants(""),
        Err(ExtkitError::InvalidArgument { .. })
    ));
    assert!(Greek::parse_to_variants(None::<&str>).is_err());
    assert!(Greek::parse_to_variants("alpha, cat").is_err());
}

#[test]
fn test_from_unknown_description_found_first() {
    let unknown = Greek::from_unknown(Greek::Zeta, &["apple", "beta", "Gamma"]);
    assert_eq!(unknown, Greek::Beta);
}

#[test]
fn test_from_unknown_name_found_first() {
    let unknown = Greek::from_unknown(Greek::Zeta, &["apple", "Beta", "gamma"]);
    assert_eq!(unknown, Greek::Beta);
}

#[test]
fn test_from_unknown_no_match() {
    let unknown = Greek::from_unknown(Greek::Zeta, &["apple", "berry", "Cherry"]);
    assert_eq!(unknown, Greek::Zeta);
}

extkit::described_enum! {
    pub enum Clash {
        Apple = 0,
        Pear = 1 => "apple",
    }
}

#[test]
fn test_from_unknown_checks_descriptions_before_names() {
    // "apple" is Apple's name but Pear's description
    assert_eq!(Clash::from_unknown(Clash::Apple, &["apple"]), Clash::Pear);
}

#[test]
fn test_from_unknown_finishes_each_candidate_before_the_next() {
    // "APPLE" only matches by name, and it comes first
    assert_eq!(Clash::from_unknown(Clash::Pear, &["APPLE", "apple"]), Clash::Apple);
    assert_eq!(Clash::from_unknown(Clash::Apple, &["kiwi", "pear"]), Clash::Pear);
}

#[test]
fn test_from_description_prefers_tag_over_earlier_name() {
    assert_eq!(Clash::from_description("apple"), Clash::Pear);
    assert_eq!(Clash::find_by_description("Apple"), Some(Clash::Apple));
}
