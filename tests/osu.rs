use std::{collections::BTreeMap, panic};

use rosu_skills::{Difficulty, HitObject, Pos, SkillKind, SkillRatings, TimelineError};

use self::common::*;

mod common;

const OSU_SKILLS: [SkillKind; 5] = [
    SkillKind::Aim,
    SkillKind::AimNoSliders,
    SkillKind::Reading,
    SkillKind::Cognition,
    SkillKind::Flashlight,
];

fn calculate(mods: u32) -> SkillRatings {
    Difficulty::new()
        .mods(mods)
        .ar(9.0)
        .calculate(&osu_fixture())
        .unwrap()
}

macro_rules! gating {
    ( $( $( $mods:ident )+ => [ $( $kind:ident ),* ] ; )* ) => {
        $(
            let mods = 0 $( + $mods )*;
            let ratings = calculate(mods);
            let rated = [$( SkillKind::$kind, )*];

            for kind in OSU_SKILLS {
                let rating = ratings.get(kind);

                if rated.contains(&kind) {
                    assert!(rating > 0.0, "{kind:?} should be rated for mods {mods}");
                } else {
                    assert!(rating.abs() < f64::EPSILON, "{kind:?} should be zero for mods {mods}: {rating}");
                }
            }
        )*
    };
}

macro_rules! reference_values {
    ( $( $( $mods:ident )+ => {
        aim: $aim:expr,
        aim_no_sliders: $aim_no_sliders:expr,
        reading: $reading:expr,
        cognition: $cognition:expr,
        flashlight: $flashlight:expr $( , )?
    } ;)* ) => {
        $(
            let mods = 0 $( + $mods )*;
            let ratings = calculate(mods);

            let expected = [
                (SkillKind::Aim, $aim),
                (SkillKind::AimNoSliders, $aim_no_sliders),
                (SkillKind::Reading, $reading),
                (SkillKind::Cognition, $cognition),
                (SkillKind::Flashlight, $flashlight),
            ];

            for (kind, value) in expected {
                if panic::catch_unwind(|| assert_eq_float(ratings.get(kind), value)).is_err() {
                    panic!("{kind:?} differs for mods {mods}");
                }
            }
        )*
    };
}

#[test]
fn fixture_reproduces_reference_values() {
    reference_values! {
        NM => {
            aim: 2430.9882716564193,
            aim_no_sliders: 2399.8469137686493,
            reading: 0.62441913545531,
            cognition: 0.0,
            flashlight: 0.0,
        };
        HD => {
            aim: 2430.9882716564193,
            aim_no_sliders: 2399.8469137686493,
            reading: 1.4838073405775245,
            cognition: 75.07597912380416,
            flashlight: 0.0,
        };
        DT => {
            aim: 4048.1544980365825,
            aim_no_sliders: 4001.791566969975,
            reading: 0.6903072526805857,
            cognition: 0.0,
            flashlight: 0.0,
        };
        FL => {
            aim: 2430.9882716564193,
            aim_no_sliders: 2399.8469137686493,
            reading: 0.62441913545531,
            cognition: 8.706133868165809,
            flashlight: 104.41416455635175,
        };
        HD FL => {
            aim: 2430.9882716564193,
            aim_no_sliders: 2399.8469137686493,
            reading: 1.4838073405775245,
            cognition: 75.07597912380416,
            flashlight: 183.90211361773524,
        };
    }
}

#[test]
fn fixture_has_fifty_objects() {
    assert_eq!(osu_fixture().len(), FIXTURE_LEN);
}

#[test]
fn fixture_is_deterministic() {
    for mods in [NM, HD, DT, FL, HD + FL] {
        let first = calculate(mods);
        let second = calculate(mods);

        assert_eq!(first, second, "mods {mods}");
        assert_finite_non_negative(&first);
    }
}

#[test]
fn mods_gate_skills() {
    gating! {
        NM => [Aim, AimNoSliders, Reading];
        HD => [Aim, AimNoSliders, Reading, Cognition];
        FL => [Aim, AimNoSliders, Reading, Cognition, Flashlight];
        HD FL => [Aim, AimNoSliders, Reading, Cognition, Flashlight];
    };
}

#[test]
fn every_skill_is_always_reported() {
    let ratings = calculate(NM);

    assert_eq!(ratings.len(), OSU_SKILLS.len());
    assert!(OSU_SKILLS.iter().all(|&kind| ratings.contains(kind)));
    assert!(!ratings.contains(SkillKind::Stamina));
}

#[test]
fn hidden_adds_cognition() {
    let with_hidden = calculate(HD + FL);
    let without_hidden = calculate(FL);

    assert!(with_hidden.get(SkillKind::Cognition) > without_hidden.get(SkillKind::Cognition));
}

#[test]
fn faster_is_harder_to_aim() {
    let nomod = calculate(NM);
    let double_time = calculate(DT);

    assert!(double_time.get(SkillKind::Aim) > nomod.get(SkillKind::Aim));
}

#[test]
fn multiplier_scales_ratings() {
    let hit_objects = osu_fixture();
    let base = Difficulty::new().mods(FL).calculate(&hit_objects).unwrap();

    let scaled = Difficulty::new()
        .mods(FL)
        .multiplier(2.0)
        .calculate(&hit_objects)
        .unwrap();

    for kind in OSU_SKILLS {
        assert!((scaled.get(kind) - 2.0 * base.get(kind)).abs() < 1e-9);
    }
}

#[test]
fn short_timelines_rate_zero() {
    let single = [HitObject::circle(Pos::new(256.0, 192.0), 1000.0, 32.0)];

    for hit_objects in [&[][..], &single[..]] {
        let ratings = Difficulty::new().mods(HD + FL).calculate(hit_objects).unwrap();

        assert_eq!(ratings.len(), OSU_SKILLS.len());

        for (_, &rating) in &ratings {
            assert!(rating.abs() < f64::EPSILON);
        }
    }
}

#[test]
fn duplicate_timestamps_stay_finite() {
    let hit_objects: Vec<_> = (0..20_u32)
        .map(|i| HitObject::circle(Pos::new(100.0 * (i % 3) as f32, 50.0), 1000.0, 32.0))
        .collect();

    let ratings = Difficulty::new()
        .mods(HD + FL)
        .calculate(&hit_objects)
        .unwrap();

    assert_finite_non_negative(&ratings);
}

#[test]
fn rejects_malformed_timelines() {
    let unordered = [
        HitObject::circle(Pos::default(), 500.0, 32.0),
        HitObject::circle(Pos::default(), 400.0, 32.0),
    ];

    assert!(matches!(
        Difficulty::new().calculate(&unordered),
        Err(TimelineError::Unordered { idx: 1, .. })
    ));

    let non_finite = [HitObject::circle(Pos::default(), f64::INFINITY, 32.0)];

    assert_eq!(
        Difficulty::new().calculate(&non_finite),
        Err(TimelineError::NonFiniteTime { idx: 0 })
    );

    assert!(matches!(
        Difficulty::new().clock_rate(-1.0).calculate(&osu_fixture()),
        Err(TimelineError::InvalidClockRate(_))
    ));

    let mut nan_pos = osu_fixture();
    nan_pos[4].pos = Pos::new(f32::NAN, 0.0);

    assert_eq!(
        Difficulty::new().calculate(&nan_pos),
        Err(TimelineError::NonFinitePosition { idx: 4 })
    );

    assert!(matches!(
        Difficulty::new().multiplier(-1.0).calculate(&osu_fixture()),
        Err(TimelineError::InvalidMultiplier(_))
    ));
}

#[test]
fn named_ratings() {
    let map: BTreeMap<&str, f64> = calculate(FL).into();

    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        ["aim", "aim_no_sliders", "cognition", "flashlight", "reading"]
    );
}
