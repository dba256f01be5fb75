//! Serializable subset of the Plotly figure schema used by the chart
//! page: scatter line traces plus a titled layout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub line: LineStyle,
}

impl Trace {
    pub fn scatter(name: &str, color: &str, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            kind: "scatter".to_string(),
            mode: "lines".to_string(),
            line: LineStyle {
                color: color.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

impl Layout {
    pub fn titled(title: &str, xaxis: &str, yaxis: &str) -> Self {
        Self {
            title: Title {
                text: title.to_string(),
            },
            xaxis: Axis {
                title: Title {
                    text: xaxis.to_string(),
                },
            },
            yaxis: Axis {
                title: Title {
                    text: yaxis.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

/// Renders a self-contained chart page. Plotly is loaded from its CDN
/// and the figure JSON is inlined into the page.
pub fn render_page(figure: &Figure) -> Result<String, serde_json::Error> {
    let figure_json = serde_json::to_string(figure)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  body {{ margin: 0; font-family: sans-serif; }}
  #chart {{ width: 100vw; height: 100vh; }}
</style>
</head>
<body>
<div id="chart"></div>
<script>
  const figure = {figure_json};
  Plotly.newPlot("chart", figure.data, figure.layout, {{responsive: true}});
</script>
</body>
</html>
"#,
        title = figure.layout.title.text,
        figure_json = figure_json,
    ))
}

#[cfg(test)]
mod tests {
    use super::{Figure, Layout, Trace, render_page};

    fn demo_figure() -> Figure {
        Figure {
            data: vec![Trace::scatter(
                "Gaussian #1",
                "red",
                vec![-1.0, 0.0, 1.0],
                vec![0.5, 1.0, 0.5],
            )],
            layout: Layout::titled("Database Data", "Abscissa", "Ordinate"),
        }
    }

    #[test]
    fn trace_serializes_to_plotly_schema() {
        let figure = demo_figure();
        let json = serde_json::to_value(&figure).expect("serialize figure");

        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["data"][0]["mode"], "lines");
        assert_eq!(json["data"][0]["name"], "Gaussian #1");
        assert_eq!(json["data"][0]["line"]["color"], "red");
        assert_eq!(json["layout"]["title"]["text"], "Database Data");
        assert_eq!(json["layout"]["xaxis"]["title"]["text"], "Abscissa");
        assert_eq!(json["layout"]["yaxis"]["title"]["text"], "Ordinate");
    }

    #[test]
    fn page_embeds_figure_and_plotly() {
        let page = render_page(&demo_figure()).expect("render page");
        assert!(page.contains("cdn.plot.ly"));
        assert!(page.contains("Plotly.newPlot"));
        assert!(page.contains("\"Gaussian #1\""));
        assert!(page.contains("<title>Database Data</title>"));
    }
}
