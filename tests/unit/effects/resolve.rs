use super::*;
use crate::effects::config::{HorizontalEntrance, VerticalEntrance};

const VIEWPORT: Size = Size::new(400.0, 200.0);

fn horizontal(effect: SlideEffect) -> EffectVariant {
    EffectVariant::SlideHorizontal {
        duration_ms: 200,
        out_dark_alpha_factor: 0.75,
        entrance: HorizontalEntrance::FromEnd,
        effect,
    }
}

fn vertical(effect: SlideEffect) -> EffectVariant {
    EffectVariant::SlideVertical {
        duration_ms: 300,
        out_dark_alpha_factor: 0.6,
        entrance: VerticalEntrance::FromBottom,
        effect,
    }
}

#[test]
fn none_is_identity_for_any_input() {
    for direction in [NavDirection::Push, NavDirection::Pop] {
        for role in [ContentRole::Entering, ContentRole::Exiting] {
            for value in [-1.0, 0.0, 0.3, 1.0] {
                let fx = resolve(EffectVariant::None, direction, role, value, VIEWPORT);
                assert!(fx.is_identity());
            }
        }
    }
}

#[test]
fn fade_round_trip() {
    let fade = EffectVariant::fade();
    for direction in [NavDirection::Push, NavDirection::Pop] {
        let enter = Motion::plan(fade, direction, ContentRole::Entering);
        assert_eq!(enter.describe(enter.start, VIEWPORT).opacity, 0.0);
        assert_eq!(enter.describe(enter.end, VIEWPORT).opacity, 1.0);

        let exit = Motion::plan(fade, direction, ContentRole::Exiting);
        assert_eq!(exit.describe(exit.start, VIEWPORT).opacity, 1.0);
        assert_eq!(exit.describe(exit.end, VIEWPORT).opacity, 0.5);
        assert_eq!(exit.describe(exit.end, VIEWPORT).offset, Vec2::ZERO);
    }
}

#[test]
fn slide_phase_table() {
    assert_eq!(
        SlidePhase::select(NavDirection::Push, ContentRole::Entering),
        SlidePhase::In
    );
    assert_eq!(
        SlidePhase::select(NavDirection::Pop, ContentRole::Exiting),
        SlidePhase::In
    );
    assert_eq!(
        SlidePhase::select(NavDirection::Push, ContentRole::Exiting),
        SlidePhase::Out
    );
    assert_eq!(
        SlidePhase::select(NavDirection::Pop, ContentRole::Entering),
        SlidePhase::Out
    );
}

#[test]
fn in_sub_case_is_shared_by_push_entering_and_pop_exiting() {
    let variant = horizontal(SlideEffect::CoverPush);
    for p in [0.0, 0.25, 0.5, 1.0] {
        let push_enter = resolve(variant, NavDirection::Push, ContentRole::Entering, p, VIEWPORT);
        let pop_exit = resolve(variant, NavDirection::Pop, ContentRole::Exiting, p, VIEWPORT);
        assert_eq!(push_enter, pop_exit);
        assert_eq!(push_enter.offset, Vec2::new(400.0 * p, 0.0));
        assert_eq!(push_enter.overlay_alpha, 0.0);
    }
}

#[test]
fn in_sub_case_displacement_flips_with_direction() {
    let variant = horizontal(SlideEffect::CoverPush);
    let push = Motion::plan(variant, NavDirection::Push, ContentRole::Entering);
    let pop = Motion::plan(variant, NavDirection::Pop, ContentRole::Exiting);

    let travel = |m: &Motion| {
        m.describe(m.end, VIEWPORT).offset.x - m.describe(m.start, VIEWPORT).offset.x
    };
    // Push slides in from the trailing edge toward rest, pop slides back out to it.
    assert_eq!(travel(&push), -400.0);
    assert_eq!(travel(&pop), 400.0);
}

#[test]
fn from_start_mirrors_the_offset() {
    let variant = EffectVariant::SlideHorizontal {
        duration_ms: 200,
        out_dark_alpha_factor: 0.75,
        entrance: HorizontalEntrance::FromStart,
        effect: SlideEffect::Push,
    };
    let fx = resolve(variant, NavDirection::Push, ContentRole::Entering, 1.0, VIEWPORT);
    assert_eq!(fx.offset, Vec2::new(-400.0, 0.0));
}

#[test]
fn out_sub_case_scales_by_effect() {
    let at_end = |variant| {
        resolve(variant, NavDirection::Push, ContentRole::Exiting, -1.0, VIEWPORT).offset
    };
    assert_eq!(at_end(horizontal(SlideEffect::Push)), Vec2::new(-400.0, 0.0));
    assert_eq!(at_end(horizontal(SlideEffect::CoverPush)), Vec2::new(-200.0, 0.0));
    assert_eq!(at_end(horizontal(SlideEffect::Cover)), Vec2::ZERO);
    assert_eq!(at_end(vertical(SlideEffect::Push)), Vec2::new(0.0, -200.0));
    assert_eq!(at_end(vertical(SlideEffect::CoverPush)), Vec2::new(0.0, -50.0));
    assert_eq!(at_end(vertical(SlideEffect::Cover)), Vec2::ZERO);
}

#[test]
fn out_sub_case_darkens_only_below_zero() {
    let variant = horizontal(SlideEffect::Cover);
    let motion = Motion::plan(variant, NavDirection::Push, ContentRole::Exiting);
    assert_eq!((motion.start, motion.end), (0.0, -1.0));
    assert_eq!(motion.describe(0.0, VIEWPORT).overlay_alpha, 0.0);
    assert_eq!(motion.describe(-0.5, VIEWPORT).overlay_alpha, 0.375);
    assert_eq!(motion.describe(-1.0, VIEWPORT).overlay_alpha, 0.75);

    let pop = Motion::plan(variant, NavDirection::Pop, ContentRole::Entering);
    assert_eq!((pop.start, pop.end), (-1.0, 0.0));
    assert_eq!(pop.slide_phase(), Some(SlidePhase::Out));
    assert_eq!(pop.describe(pop.end, VIEWPORT).overlay_alpha, 0.0);
}

#[test]
fn motion_spec_carries_variant_duration() {
    let m = Motion::plan(vertical(SlideEffect::Push), NavDirection::Pop, ContentRole::Entering);
    assert_eq!(m.spec, AnimSpec::linear(300));
    assert_eq!(Motion::identity().spec, AnimSpec::snap());
}

#[test]
fn identity_transform_is_affine_identity() {
    assert_eq!(EffectDescription::IDENTITY.transform(), Affine::IDENTITY);
    let fx = EffectDescription {
        offset: Vec2::new(12.0, -3.0),
        ..EffectDescription::default()
    };
    assert_eq!(fx.transform(), Affine::translate(Vec2::new(12.0, -3.0)));
}
