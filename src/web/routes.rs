use salvo::prelude::*;

use crate::web::handlers::{
    chart::{abscissa_values, chart_json, chart_page, curve_values, list_curves},
    health::{get_status, health_check},
};
use crate::web::metrics::metrics_endpoint;

pub fn create_router() -> Router {
    Router::new()
        .get(chart_page)
        .push(Router::with_path("health").get(health_check))
        .push(Router::with_path("status").get(get_status))
        .push(Router::with_path("metrics").get(metrics_endpoint))
        .push(
            Router::with_path("api")
                .push(Router::with_path("chart").get(chart_json))
                .push(Router::with_path("abscissa").get(abscissa_values))
                .push(Router::with_path("curves").get(list_curves))
                .push(Router::with_path("curves/{name}").get(curve_values)),
        )
}
