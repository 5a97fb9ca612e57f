use timegraph::{
    Easing, FillMode, PlaybackDirection, Region, TimingNodeDef, TimingParamsDef, TimingTree,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9
}

fn leaf(name: &str, timing: TimingParamsDef) -> TimingNodeDef {
    TimingNodeDef::animation().named(name).timing(timing)
}

fn collect(tree: &TimingTree, time: f64) -> Vec<(String, f64)> {
    let mut out = Vec::new();
    tree.sample(time, |name, fraction| out.push((name.to_owned(), fraction)));
    out
}

fn alternating_both() -> TimingTree {
    let def = leaf(
        "a",
        TimingParamsDef::default()
            .duration(1.0)
            .iterations(2.0)
            .direction(PlaybackDirection::Alternate)
            .fill(FillMode::Both),
    );
    TimingTree::build(&def).unwrap()
}

#[test]
fn alternating_leaf_with_fill_both() {
    let tree = alternating_both();
    assert_eq!(collect(&tree, 0.0), [("a".to_owned(), 0.0)]);
    assert_eq!(collect(&tree, 0.5), [("a".to_owned(), 0.5)]);
    assert_eq!(collect(&tree, 1.5), [("a".to_owned(), 0.5)]);

    // The active end is inclusive, and the last iteration runs reversed.
    let end = tree.sample_active(2.0);
    assert_eq!(end.len(), 1);
    assert_eq!(end[0].region, Region::During);
    assert_eq!(end[0].fraction, 0.0);

    // Past the end the value is held and still reported.
    let after = tree.sample_active(2.5);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].region, Region::After);
    assert_eq!(after[0].fraction, 0.0);
}

#[test]
fn normal_direction_clamps_to_one_after_the_end() {
    let def = leaf(
        "a",
        TimingParamsDef::default()
            .duration(1.0)
            .iterations(2.0)
            .fill(FillMode::Both),
    );
    let tree = TimingTree::build(&def).unwrap();
    assert_eq!(collect(&tree, 2.0), [("a".to_owned(), 1.0)]);
    let after = tree.sample_active(7.0);
    assert_eq!(after[0].region, Region::After);
    assert_eq!(after[0].fraction, 1.0);
}

#[test]
fn alternation_is_symmetric_around_iteration_boundary() {
    let tree = alternating_both();
    for u in [0.125, 0.25, 0.375, 0.5, 0.75] {
        let before = collect(&tree, 1.0 - u)[0].1;
        let after = collect(&tree, 1.0 + u)[0].1;
        assert!(approx(before, after), "u={u}: {before} vs {after}");
    }
}

#[test]
fn third_alternate_iteration_repeats_the_first() {
    let def = leaf(
        "a",
        TimingParamsDef::default()
            .duration(1.0)
            .iterations(3.0)
            .direction(PlaybackDirection::Alternate)
            .easing("ease")
            .fill(FillMode::Both),
    );
    let tree = TimingTree::build(&def).unwrap();
    let ease = Easing::parse("ease");
    let at = |t: f64| collect(&tree, t)[0].1;

    for u in [0.1, 0.3, 0.45, 0.8] {
        let first = at(u);
        assert!(approx(first, ease.apply(u)), "u={u}");
        assert!(approx(at(2.0 + u), first), "u={u}: {} vs {first}", at(2.0 + u));
        assert!(approx(at(1.0 + u), ease.apply(1.0 - u)), "u={u}");
    }

    // The final boundary folds back into iteration 2, which runs forwards.
    let end = tree.sample_active(3.0);
    assert_eq!(end[0].region, Region::During);
    assert_eq!(end[0].fraction, 1.0);
    let after = tree.sample_active(4.0);
    assert_eq!(after[0].region, Region::After);
    assert_eq!(after[0].fraction, 1.0);
}

#[test]
fn second_sequence_child_starts_at_local_zero() {
    let def = TimingNodeDef::sequence(vec![
        leaf("a", TimingParamsDef::default().duration(3.0)),
        leaf("b", TimingParamsDef::default().duration(3.0)),
    ])
    .named("s");
    let tree = TimingTree::build(&def).unwrap();
    let s = tree.node_by_name("s").unwrap();
    let b = tree.node_by_name("b").unwrap();
    assert_eq!(tree.durations(s).iteration, 6.0);

    let outer = tree.transform(s, 3.0, 0.0);
    assert_eq!(outer.child_time, 3.0);
    let a_total = tree.durations(tree.node_by_name("a").unwrap()).total;
    assert_eq!(a_total, 3.0);
    let second = tree.transform(b, outer.child_time, a_total);
    assert_eq!(second.region, Region::During);
    assert_eq!(second.fraction, 0.0);
    assert_eq!(second.child_time, 0.0);

    assert_eq!(
        collect(&tree, 3.0),
        [
            ("s".to_owned(), 0.5),
            ("a".to_owned(), 1.0),
            ("b".to_owned(), 0.0)
        ]
    );
}

#[test]
fn region_boundaries_are_inclusive_at_both_ends() {
    let def = leaf(
        "a",
        TimingParamsDef::default()
            .duration(2.0)
            .start_delay(1.0)
            .fill(FillMode::None),
    );
    let tree = TimingTree::build(&def).unwrap();
    assert!(collect(&tree, 0.999).is_empty());
    assert_eq!(collect(&tree, 1.0), [("a".to_owned(), 0.0)]);
    assert_eq!(collect(&tree, 3.0), [("a".to_owned(), 1.0)]);
    assert!(collect(&tree, 3.001).is_empty());
}

#[test]
fn fractions_stay_in_unit_range_for_monotone_easings() {
    let def = TimingNodeDef::parallel(vec![
        leaf(
            "ease",
            TimingParamsDef::default()
                .duration(1.5)
                .iterations(2.5)
                .easing("ease-in-out"),
        ),
        leaf(
            "rev",
            TimingParamsDef::default()
                .duration(0.75)
                .iterations(3.0)
                .direction(PlaybackDirection::AlternateReverse)
                .easing("ease-out"),
        ),
        leaf(
            "step",
            TimingParamsDef::default()
                .duration(2.0)
                .playback_rate(0.5)
                .iteration_start(0.25)
                .fill(FillMode::Both),
        ),
    ])
    .named("p");
    let tree = TimingTree::build(&def).unwrap();
    for i in 0..=120 {
        let t = f64::from(i) * 0.05;
        for s in tree.sample_active(t) {
            assert!(
                (-1e-9..=1.0 + 1e-9).contains(&s.fraction),
                "{} at t={t}: {}",
                s.name,
                s.fraction
            );
        }
    }
}

#[test]
fn nested_groups_scale_child_time() {
    let def = TimingNodeDef::sequence(vec![leaf(
        "inner",
        TimingParamsDef::default().duration(4.0),
    )])
    .named("outer")
    .timing(TimingParamsDef::default().playback_rate(2.0));
    let tree = TimingTree::build(&def).unwrap();
    let outer = tree.node_by_name("outer").unwrap();
    assert_eq!(tree.durations(outer).active, 2.0);
    // Halfway through the parent's active interval is halfway through the child.
    assert_eq!(
        collect(&tree, 1.0),
        [("outer".to_owned(), 0.5), ("inner".to_owned(), 0.5)]
    );
}

#[test]
fn build_rejects_unknown_types_and_zero_rates() {
    let mut bad_type = leaf("a", TimingParamsDef::default());
    bad_type.kind = "keyframes".to_owned();
    let err = TimingTree::build(&bad_type).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("keyframes"));

    let zero_rate = leaf("a", TimingParamsDef::default().playback_rate(0.0));
    assert!(TimingTree::build(&zero_rate).unwrap_err().is_configuration());

    let bad_duration = TimingNodeDef::from_json(
        r#"{"name":"a","type":"animation","timing":{"duration":"forever"}}"#,
    )
    .unwrap();
    assert!(TimingTree::build(&bad_duration).unwrap_err().is_configuration());
}
