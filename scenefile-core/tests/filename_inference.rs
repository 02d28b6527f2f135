use proptest::prelude::*;
use scenefile_core::naming::{FilenameDescriptor, FilenameTemplate, UNDETERMINED_VERSION};
use scenefile_core::{Discipline, NamingError};

#[test]
fn test_from_existing_reads_every_field() {
    let descriptor = FilenameDescriptor::from_existing("char_spk_amputee_RIG_012_aw.mb");

    assert_eq!(descriptor.description, "char_spk_amputee");
    assert_eq!(descriptor.discipline, Discipline::Rig);
    assert_eq!(descriptor.version, 12);
    assert_eq!(descriptor.initials, "aw");
    assert_eq!(descriptor.optional, None);
    assert_eq!(descriptor.extension, "mb");
}

#[test]
fn test_rightmost_discipline_wins() {
    let descriptor = FilenameDescriptor::from_existing("char_mdl_rig_v003.ma");
    assert_eq!(descriptor.discipline, Discipline::Rig);
    assert_eq!(descriptor.discipline.code(), "RIG");
    assert_eq!(descriptor.version, 3);
}

#[test]
fn test_initials_never_taken_from_discipline() {
    let descriptor = FilenameDescriptor::from_existing("char_rig_aw_v2.ma");
    assert_eq!(descriptor.initials, "aw");
    assert_eq!(descriptor.version, 2);
}

#[test]
fn test_bare_numbers_use_rightmost_run() {
    assert_eq!(FilenameDescriptor::from_existing("asset_12_aw_45.ma").version, 45);
}

#[test]
fn test_no_number_means_undetermined() {
    let descriptor = FilenameDescriptor::from_existing("char_santa_aw.ma");
    assert_eq!(descriptor.version, UNDETERMINED_VERSION);
    assert!(!descriptor.has_version());
    assert_eq!(
        descriptor.try_render(),
        Err(NamingError::UndeterminedVersion(UNDETERMINED_VERSION))
    );
}

/// Known limitation: without a `v` marker, unrelated numbers such as a plate
/// resolution are read as the version.
#[test]
fn test_bare_number_fallback_misreads_resolution() {
    assert_eq!(FilenameDescriptor::from_existing("plate_1920_1080.ma").version, 1080);
    assert_eq!(FilenameDescriptor::from_existing("plate_1920_1080_v004.ma").version, 4);
}

#[test]
fn test_render_without_optional_has_no_double_separator() {
    let descriptor = FilenameDescriptor::new("foo", Discipline::Mdl, 1, "aw");
    let filename = descriptor.render();
    assert_eq!(filename, "foo_MDL_001_aw.ma");
    assert!(!filename.contains("__"));
}

#[test]
fn test_render_with_custom_template() {
    let template = FilenameTemplate::new(
        "{DESCRIPTION}.{DISCIPLINE}.v{VERSION}.{INITIALS}.{OPTIONAL}.{EXT}",
    )
    .unwrap();
    let descriptor = FilenameDescriptor::new("balloon", Discipline::Lgt, 42, "jd");
    assert_eq!(descriptor.render_with(&template), "balloon.LGT.v042.jd.ma");
    assert_eq!(
        descriptor.clone().with_optional("beauty").render_with(&template),
        "balloon.LGT.v042.jd.beauty.ma"
    );
}

#[test]
fn test_increment_chain() {
    let mut descriptor = FilenameDescriptor::new("foo", Discipline::Anim, 5, "aw");
    descriptor.increment(None, 1);
    assert_eq!(descriptor.version, 6);
    descriptor.increment(Some(10), 1).increment(None, 2);
    assert_eq!(descriptor.version, 12);
    assert_eq!(descriptor.render(), "foo_ANIM_012_aw.ma");
}

fn description_strategy() -> impl Strategy<Value = String> {
    // Lower-case words that cannot spell a discipline code or initials token.
    prop::collection::vec("[bcdhjkquwyz]{3,6}", 1..3).prop_map(|words| words.join("_"))
}

fn discipline_strategy() -> impl Strategy<Value = Discipline> {
    prop::sample::select(Discipline::ALL.to_vec())
}

proptest! {
    #[test]
    fn explicit_marker_beats_other_numbers(
        description in description_strategy(),
        before in 0u32..5000,
        after in 0u32..5000,
        version in 0i64..1000,
    ) {
        let filename = format!("{description}_{before}_v{version:03}_{after}.ma");
        prop_assert_eq!(FilenameDescriptor::from_existing(&filename).version, version);
    }

    #[test]
    fn rightmost_bare_number_is_the_version(
        description in description_strategy(),
        numbers in prop::collection::vec(0u32..100_000, 1..5),
    ) {
        let joined: Vec<String> = numbers.iter().map(u32::to_string).collect();
        let filename = format!("{description}_{}.ma", joined.join("_"));
        let expected = i64::from(*numbers.last().unwrap());
        prop_assert_eq!(FilenameDescriptor::from_existing(&filename).version, expected);
    }

    #[test]
    fn render_round_trips_inferred_fields(
        description in description_strategy(),
        discipline in discipline_strategy(),
        version in 0i64..1000,
        initials in "[bcdhjkquwyz]{2}",
    ) {
        let original =
            FilenameDescriptor::new(description.clone(), discipline, version, initials.clone());
        let reparsed = FilenameDescriptor::from_existing(&original.render());

        prop_assert_eq!(reparsed.discipline, discipline);
        prop_assert_eq!(reparsed.version, version);
        prop_assert_eq!(&reparsed.initials, &initials);
        prop_assert_eq!(&reparsed.description, &description);
        prop_assert_eq!(reparsed.render(), original.render());
    }
}
