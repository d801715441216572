use scene_core::{ease, Easing};

const EPS: f32 = 1e-6;

#[test]
fn every_easing_starts_at_zero_and_ends_at_one() {
    for e in Easing::ALL {
        assert!(e.apply(0.0).abs() < EPS, "{e} at 0 = {}", e.apply(0.0));
        assert!((e.apply(1.0) - 1.0).abs() < EPS, "{e} at 1 = {}", e.apply(1.0));
    }
}

#[test]
fn every_easing_is_non_decreasing_over_unit_interval() {
    for e in Easing::ALL {
        let mut prev = e.apply(0.0);
        for i in 1..=100 {
            let v = e.apply(i as f32 / 100.0);
            assert!(v + EPS >= prev, "{e} decreases at step {i}");
            prev = v;
        }
    }
}

#[test]
fn quadratic_curves_match_reference_values() {
    assert!((Easing::InQuad.apply(0.5) - 0.25).abs() < EPS);
    assert!((Easing::OutQuad.apply(0.5) - 0.75).abs() < EPS);
    assert!((Easing::InOutQuad.apply(0.25) - 0.125).abs() < EPS);
    assert!((Easing::InOutQuad.apply(0.75) - 0.875).abs() < EPS);
}

#[test]
fn higher_power_curves_match_reference_values() {
    let cases = [
        (Easing::InCubic, 0.015625, 0.421875),
        (Easing::OutCubic, 0.578125, 0.984375),
        (Easing::InOutCubic, 0.0625, 0.9375),
        (Easing::InQuart, 0.00390625, 0.31640625),
        (Easing::OutQuart, 0.68359375, 0.99609375),
        (Easing::InOutQuart, 0.03125, 0.96875),
        (Easing::InQuint, 0.0009765625, 0.2373046875),
        (Easing::OutQuint, 0.7626953125, 0.9990234375),
        (Easing::InOutQuint, 0.015625, 0.984375),
    ];
    for (kind, at_quarter, at_three_quarters) in cases {
        assert!((kind.apply(0.25) - at_quarter).abs() < EPS, "{kind} at 0.25");
        assert!((kind.apply(0.75) - at_three_quarters).abs() < EPS, "{kind} at 0.75");
    }
}

#[test]
fn in_out_curves_pass_through_midpoint() {
    for e in [
        Easing::InOutQuad,
        Easing::InOutCubic,
        Easing::InOutQuart,
        Easing::InOutQuint,
    ] {
        assert!((e.apply(0.5) - 0.5).abs() < EPS, "{e} at 0.5 = {}", e.apply(0.5));
    }
}

#[test]
fn higher_powers_start_slower() {
    let t = 0.3;
    assert!(Easing::InQuad.apply(t) > Easing::InCubic.apply(t));
    assert!(Easing::InCubic.apply(t) > Easing::InQuart.apply(t));
    assert!(Easing::InQuart.apply(t) > Easing::InQuint.apply(t));
    assert!(Easing::OutQuint.apply(t) > Easing::OutQuad.apply(t));
}

#[test]
fn out_of_range_input_is_extrapolated() {
    assert!((Easing::Linear.apply(1.5) - 1.5).abs() < EPS);
    assert!((Easing::InQuad.apply(2.0) - 4.0).abs() < EPS);
    assert!((Easing::InCubic.apply(-1.0) + 1.0).abs() < EPS);
}

#[test]
fn linear_easing_leaves_small_speeds_untouched() {
    assert_eq!(ease(Easing::Linear, 0.05), 0.05);
}

#[test]
fn names_round_trip_through_from_str() {
    for e in Easing::ALL {
        let parsed: Easing = e.name().parse().expect("known name");
        assert_eq!(parsed, e);
    }
    assert!("ease-sideways".parse::<Easing>().is_err());
    assert_eq!(Easing::default(), Easing::Linear);
}
