use timegraph::{TimingTree, presets};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let def = presets::preset("container").ok_or_else(|| anyhow::anyhow!("missing preset"))?;
    let tree = TimingTree::build(&def)?;

    for t in [0.0, 1.0, 1.5, 2.0, 3.5, 4.5, 6.0] {
        let mut line = format!("t={t:>4.1}:");
        tree.sample(t, |name, fraction| line.push_str(&format!(" {name}={fraction:.3}")));
        println!("{line}");
    }

    Ok(())
}
