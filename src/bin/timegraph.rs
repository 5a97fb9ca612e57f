use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "timegraph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List declared node names in order.
    Names(SourceArgs),
    /// Print the progress of every active named node at one time.
    Sample(SampleArgs),
    /// Sample the tree once per pixel column and write graph data as JSON.
    Graph(GraphArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Input timing tree JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Built-in preset name ("test" or "container").
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Sample time in seconds.
    #[arg(long, allow_negative_numbers = true)]
    time: f64,

    /// Emit JSON (node index, name, region, fraction) instead of plain lines.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct GraphArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Graph width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Horizontal pixels per second.
    #[arg(long, default_value_t = 60.0)]
    pixels_per_second: f64,

    /// Padding on each side, in pixels.
    #[arg(long, default_value_t = 20)]
    border_padding: u32,

    /// Worker threads (defaults to rayon's choice).
    #[arg(long)]
    threads: Option<usize>,

    /// Output JSON path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Names(args) => cmd_names(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Graph(args) => cmd_graph(args),
    }
}

fn read_tree_json(path: &Path) -> anyhow::Result<timegraph::TimingNodeDef> {
    let f = File::open(path).with_context(|| format!("open timing tree '{}'", path.display()))?;
    let r = BufReader::new(f);
    let def: timegraph::TimingNodeDef =
        serde_json::from_reader(r).with_context(|| "parse timing tree JSON")?;
    Ok(def)
}

fn load_tree(source: &SourceArgs) -> anyhow::Result<timegraph::TimingTree> {
    let def = match (&source.in_path, &source.preset) {
        (Some(path), _) => read_tree_json(path)?,
        (None, Some(name)) => timegraph::presets::preset(name).with_context(|| {
            format!(
                "unknown preset '{name}' (available: {})",
                timegraph::presets::names().join(", ")
            )
        })?,
        (None, None) => anyhow::bail!("either --in or --preset is required"),
    };
    Ok(timegraph::TimingTree::build(&def)?)
}

fn cmd_names(args: SourceArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args)?;
    for name in tree.names() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args.source)?;
    if args.json {
        let samples = tree.sample_active(args.time);
        println!("{}", serde_json::to_string_pretty(&samples)?);
    } else {
        tree.sample(args.time, |name, fraction| println!("{name}\t{fraction}"));
    }
    Ok(())
}

fn cmd_graph(args: GraphArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args.source)?;
    let opts = timegraph::GraphOpts {
        width_px: args.width,
        border_padding_px: args.border_padding,
        pixels_per_second: args.pixels_per_second,
        threads: args.threads,
    };
    let data = timegraph::sample_graph(&tree, &opts)?;
    let json = serde_json::to_string_pretty(&data)?;

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("write graph '{}'", path.display()))?;
            eprintln!(
                "wrote {} ({} columns, {} series)",
                path.display(),
                data.times.len(),
                data.series.len()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
