use crate::chart::{Figure, Layout, Trace};
use crate::config::{ChartConfig, CurveSpec};

/// Builds a scatter trace for one curve, pairing abscissa and ordinate
/// values. Mismatched lengths truncate to the shorter side so a partial
/// curve still renders.
pub(crate) fn build_trace(spec: &CurveSpec, xs: &[f64], ys: &[f64]) -> Trace {
    let n = xs.len().min(ys.len());
    let label = if spec.label.is_empty() {
        &spec.name
    } else {
        &spec.label
    };
    Trace::scatter(label, &spec.color, xs[..n].to_vec(), ys[..n].to_vec())
}

pub(crate) fn assemble_figure(chart: &ChartConfig, traces: Vec<Trace>) -> Figure {
    Figure {
        data: traces,
        layout: Layout::titled(&chart.title, &chart.xaxis_title, &chart.yaxis_title),
    }
}
