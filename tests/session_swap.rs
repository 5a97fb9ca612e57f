use std::sync::atomic::{AtomicBool, Ordering};

use timegraph::{TimingContext, presets};

#[test]
fn readers_never_observe_a_partial_swap() {
    let staggered = presets::preset("test").unwrap();
    let container = presets::preset("container").unwrap();
    let ctx = TimingContext::new(&container).unwrap();
    let done = AtomicBool::new(false);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let mut seen = 0usize;
                while !done.load(Ordering::Relaxed) || seen == 0 {
                    let tree = ctx.current();
                    let names = tree.names();
                    assert!(names.len() == 3 || names.len() == 13, "{names:?}");
                    for t in [0.0, 1.5, 3.0, 4.5, 9.0] {
                        for sample in tree.sample_active(t) {
                            assert!(names.contains(&sample.name));
                        }
                    }
                    seen += 1;
                }
            });
        }

        for i in 0..50 {
            let def = if i % 2 == 0 { &staggered } else { &container };
            ctx.load(def).unwrap();
        }
        done.store(true, Ordering::Relaxed);
    });

    // The last load (i = 49) was the container tree.
    assert_eq!(ctx.names(), ["container", "a", "b"]);
}

#[test]
fn failed_json_load_keeps_current_tree() {
    let ctx = TimingContext::new(&presets::preset("container").unwrap()).unwrap();
    let before = ctx.current();

    let err = ctx
        .load_json(include_str!("data/invalid_type.json"))
        .unwrap_err();
    assert!(err.is_configuration());
    assert!(std::sync::Arc::ptr_eq(&before, &ctx.current()));

    let tree = ctx.load_json(include_str!("data/staggered.json")).unwrap();
    assert!(std::sync::Arc::ptr_eq(&tree, &ctx.current()));
    assert_eq!(ctx.names().len(), 13);
}
