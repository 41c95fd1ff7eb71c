use nameforge::utils::naming::{increment_names, to_slug};

#[test]
fn increments_greatest_entry() {
    assert_eq!(
        increment_names(&["vol001", "vol002"], 1),
        Some("vol003".to_string())
    );
}

#[test]
fn zero_pads_to_three_digits() {
    assert_eq!(increment_names(&["web006"], 1), Some("web007".to_string()));
    assert_eq!(increment_names(&["web000"], 7), Some("web007".to_string()));
}

#[test]
fn wraps_at_one_hundred_not_one_thousand() {
    // 099 + 1 = 100, which wraps to 000
    assert_eq!(
        increment_names(&["host001", "host099"], 1),
        Some("host000".to_string())
    );
}

#[test]
fn tie_break_is_lexicographic_not_numeric() {
    // "vol100" sorts after "vol099" and wins despite renormalizing to 0
    assert_eq!(
        increment_names(&["vol100", "vol099"], 1),
        Some("vol001".to_string())
    );
    // step 0 exposes the renormalization on its own
    assert_eq!(
        increment_names(&["vol100", "vol099"], 0),
        Some("vol000".to_string())
    );
}

#[test]
fn candidate_choice_ignores_suffix_magnitude() {
    // "b002" > "a009" lexicographically, so the numerically smaller suffix wins
    assert_eq!(
        increment_names(&["a009", "b002"], 1),
        Some("b003".to_string())
    );
}

#[test]
fn negative_step_normalizes_into_range() {
    assert_eq!(
        increment_names(&["node005"], -10),
        Some("node095".to_string())
    );
}

#[test]
fn step_zero_renormalizes_large_suffixes() {
    assert_eq!(increment_names(&["rack205"], 0), Some("rack005".to_string()));
}

#[test]
fn no_candidate_yields_none() {
    assert_eq!(increment_names(&["alpha", "beta"], 1), None);
    assert_eq!(increment_names::<&str>(&[], 1), None);
}

#[test]
fn names_without_digit_suffix_are_skipped() {
    // "zzz" sorts last but carries no suffix; the scan falls through to "srv010"
    assert_eq!(
        increment_names(&["srv010", "zzz"], 1),
        Some("srv011".to_string())
    );
}

#[test]
fn short_all_digit_names_are_not_candidates() {
    assert_eq!(increment_names(&["12"], 1), None);
    assert_eq!(increment_names(&["7"], 1), None);
    // length 3 is the cutoff; an all-digit 3-char name has an empty stem
    assert_eq!(increment_names(&["123"], 1), Some("024".to_string()));
}

#[test]
fn multibyte_stems_are_not_sliced_mid_codepoint() {
    assert_eq!(
        increment_names(&["münchen001"], 1),
        Some("münchen002".to_string())
    );
    assert_eq!(increment_names(&["müller"], 1), None);
}

#[test]
fn inverse_step_round_trips_modulo_100() {
    let forward = increment_names(&["db042"], 7).unwrap();
    assert_eq!(forward, "db049");
    assert_eq!(increment_names(&[forward], -7), Some("db042".to_string()));
}

#[test]
fn slug_basic_ascii() {
    assert_eq!(to_slug("My Cool Volume"), "my-cool-volume");
    assert_eq!(to_slug("hello_world"), "hello-world");
    assert_eq!(to_slug("Foo-Bar"), "foo-bar");
}

#[test]
fn slug_collapses_and_trims() {
    assert_eq!(to_slug("--Hello__World--"), "hello-world");
    assert_eq!(to_slug("  A   B  C  "), "a-b-c");
}

#[test]
fn slug_transliterates_diacritics() {
    assert_eq!(to_slug("Déjà Vu!"), "deja-vu");
    assert_eq!(to_slug("Smörgåsbord"), "smorgasbord");
}

#[test]
fn slug_empty_defaults() {
    assert_eq!(to_slug(""), "default");
    assert_eq!(to_slug("!!!"), "default");
}
