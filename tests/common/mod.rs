#![allow(dead_code)]

use rosu_skills::{HitObject, Pos, SkillRatings, SliderNodeKind, SliderPath, TaikoObject};

pub const NM: u32 = 0;
pub const HD: u32 = 1 << 3;
pub const DT: u32 = 1 << 6;
pub const FL: u32 = 1 << 10;

pub const FIXTURE_LEN: usize = 50;

const RADIUS: f64 = 36.48;

/// Fifty objects mixing jumps, short bursts, a slider with its nodes, and a
/// spinner.
pub fn osu_fixture() -> Vec<HitObject> {
    let mut hit_objects = Vec::with_capacity(FIXTURE_LEN + 2);
    let mut time = 500.0;

    for i in 0_u32.. {
        if hit_objects.len() >= FIXTURE_LEN {
            break;
        }

        let angle = f64::from(i) * 2.1;
        let pos = Pos::new(
            (256.0 + 160.0 * angle.cos()) as f32,
            (192.0 + 120.0 * angle.sin()) as f32,
        );

        match i {
            5 | 17 | 29 => {
                let end_pos = pos + Pos::new(80.0, 0.0);
                let end_time = time + 300.0;

                let path = SliderPath {
                    end_pos,
                    length: 80.0,
                    repeats: 0,
                };

                let tick = pos + Pos::new(40.0, 0.0);

                hit_objects.push(HitObject::slider(pos, time, end_time, RADIUS, path));
                hit_objects.push(HitObject::slider_node(
                    tick,
                    time + 150.0,
                    RADIUS,
                    SliderNodeKind::Tick,
                ));
                hit_objects.push(HitObject::slider_node(
                    end_pos,
                    end_time,
                    RADIUS,
                    SliderNodeKind::Tail,
                ));

                time = end_time + 150.0;
            }
            23 => {
                let center = Pos::new(256.0, 192.0);
                hit_objects.push(HitObject::spinner(center, time, time + 1000.0, RADIUS));

                time += 1200.0;
            }
            _ => {
                hit_objects.push(HitObject::circle(pos, time, RADIUS));

                // Every fourth object starts a short burst
                time += if i % 4 == 3 { 75.0 } else { 150.0 };
            }
        }
    }

    hit_objects.truncate(FIXTURE_LEN);

    hit_objects
}

/// Colour patterns of varying shape at 180 bpm 1/4.
pub fn taiko_fixture() -> Vec<TaikoObject> {
    const PATTERN: &str = "dkddkdkkddddkkkdkdkdkkdd";

    PATTERN
        .chars()
        .cycle()
        .take(96)
        .zip(0_u32..)
        .map(|(c, i)| {
            let start_time = 1000.0 + 83.0 * f64::from(i);

            match c {
                'k' => TaikoObject::rim(start_time),
                _ => TaikoObject::center(start_time),
            }
        })
        .collect()
}

pub fn assert_finite_non_negative(ratings: &SkillRatings) {
    for (kind, &rating) in ratings {
        assert!(
            rating.is_finite() && rating >= 0.0,
            "{kind:?} is not finite and non-negative: {rating}"
        );
    }
}

/// Asserts that `actual` matches the recorded `expected` value up to a
/// relative error of [`RELATIVE_TOLERANCE`].
pub fn assert_eq_float(actual: f64, expected: f64) {
    let tolerance = RELATIVE_TOLERANCE * expected.abs().max(1.0);

    assert!(
        (actual - expected).abs() < tolerance,
        "{actual} != {expected}"
    );
}

pub const RELATIVE_TOLERANCE: f64 = 1e-6;
