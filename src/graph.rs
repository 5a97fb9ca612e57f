//! Graph data: the tree sampled once per pixel column, one series per declared name.

use rayon::prelude::*;

use crate::{
    foundation::error::{TimegraphError, TimegraphResult},
    tree::TimingTree,
    walk::ActiveSample,
};

/// Pixel layout of a graph sampling run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GraphOpts {
    pub width_px: u32,
    pub border_padding_px: u32,
    pub pixels_per_second: f64,
    /// Worker threads for column sampling. `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for GraphOpts {
    fn default() -> Self {
        Self {
            width_px: 800,
            border_padding_px: 20,
            pixels_per_second: 60.0,
            threads: None,
        }
    }
}

/// Sampled progress of one named node across every column.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GraphSeries {
    pub name: String,
    /// `None` where the node was inactive.
    pub values: Vec<Option<f64>>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GraphData {
    /// Pixel x of the first column.
    pub start_x: u32,
    /// Sample time of each column.
    pub times: Vec<f64>,
    /// Pixel x of each whole-second gridline.
    pub second_marks: Vec<u32>,
    /// One series per declared name, in name-index order.
    pub series: Vec<GraphSeries>,
}

impl GraphData {
    pub fn series(&self, name: &str) -> Option<&GraphSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Sample `tree` once per pixel column between the border paddings.
#[tracing::instrument(skip(tree), fields(nodes = tree.len()))]
pub fn sample_graph(tree: &TimingTree, opts: &GraphOpts) -> TimegraphResult<GraphData> {
    if !(opts.pixels_per_second.is_finite() && opts.pixels_per_second > 0.0) {
        return Err(TimegraphError::configuration(format!(
            "graph pixels_per_second must be a positive number, got {}",
            opts.pixels_per_second
        )));
    }

    let pad = opts.border_padding_px;
    let columns: Vec<u32> = match opts.width_px.checked_sub(pad) {
        Some(end) if end >= pad => (pad..=end).collect(),
        _ => Vec::new(),
    };
    let second_marks = second_marks(&columns, pad, opts.pixels_per_second)?;
    let times: Vec<f64> = columns
        .iter()
        .map(|&x| f64::from(x - pad) / opts.pixels_per_second)
        .collect();

    let pool = build_thread_pool(opts.threads)?;
    let per_column: Vec<Vec<ActiveSample>> =
        pool.install(|| times.par_iter().map(|&t| tree.sample_active(t)).collect());

    let mut series: Vec<GraphSeries> = tree
        .names()
        .iter()
        .map(|name| GraphSeries {
            name: name.clone(),
            values: vec![None; columns.len()],
        })
        .collect();
    for (col, samples) in per_column.iter().enumerate() {
        for sample in samples {
            if let Some(i) = tree.name_index(&sample.name) {
                series[i].values[col] = Some(sample.fraction);
            }
        }
    }

    tracing::debug!(
        columns = columns.len(),
        series = series.len(),
        "graph sampled"
    );

    Ok(GraphData {
        start_x: pad,
        times,
        second_marks,
        series,
    })
}

/// Pixel x of every whole second within `columns`. At most one mark per column.
fn second_marks(columns: &[u32], pad: u32, pixels_per_second: f64) -> TimegraphResult<Vec<u32>> {
    let Some(&last) = columns.last() else {
        return Ok(Vec::new());
    };
    let seconds = (f64::from(last - pad) / pixels_per_second).floor();
    if seconds + 1.0 > columns.len() as f64 {
        return Err(TimegraphError::configuration(format!(
            "graph pixels_per_second {pixels_per_second} places more than one second mark per column"
        )));
    }
    let n = seconds as u32;
    Ok((0..=n)
        .map(|k| pad + (f64::from(k) * pixels_per_second) as u32)
        .collect())
}

fn build_thread_pool(threads: Option<usize>) -> TimegraphResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TimegraphError::configuration(
            "graph 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TimegraphError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}
