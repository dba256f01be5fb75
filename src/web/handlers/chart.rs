use salvo::prelude::*;
use serde_json::json;

use crate::chart::render_page;
use crate::web::metrics::Metrics;
use crate::web::web_state;

fn render_error(res: &mut Response, status: StatusCode, message: &str) {
    res.status_code(status);
    res.render(Json(json!({ "error": message })));
}

#[handler]
pub async fn chart_page(res: &mut Response) {
    Metrics::chart_page_request();
    let figure = match web_state().dataset.load_chart().await {
        Ok(figure) => figure,
        Err(err) => {
            Metrics::db_error();
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("database error: {}", err),
            );
            return;
        }
    };

    match render_page(&figure) {
        Ok(page) => {
            res.render(Text::Html(page));
        }
        Err(err) => {
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("render error: {}", err),
            );
        }
    }
}

#[handler]
pub async fn chart_json(res: &mut Response) {
    Metrics::api_request();
    match web_state().dataset.load_chart().await {
        Ok(figure) => {
            res.render(Json(figure));
        }
        Err(err) => {
            Metrics::db_error();
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("database error: {}", err),
            );
        }
    }
}

#[handler]
pub async fn abscissa_values(res: &mut Response) {
    Metrics::api_request();
    match web_state().dataset.abscissa_values().await {
        Ok(values) => {
            res.render(Json(json!({
                "count": values.len(),
                "values": values,
            })));
        }
        Err(err) => {
            Metrics::db_error();
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("database error: {}", err),
            );
        }
    }
}

#[handler]
pub async fn list_curves(res: &mut Response) {
    Metrics::api_request();
    match web_state().dataset.stored_curves().await {
        Ok(curves) => {
            res.render(Json(json!({
                "count": curves.len(),
                "curves": curves,
            })));
        }
        Err(err) => {
            Metrics::db_error();
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("database error: {}", err),
            );
        }
    }
}

#[handler]
pub async fn curve_values(req: &mut Request, res: &mut Response) {
    Metrics::api_request();
    let name = match req.param::<String>("name") {
        Some(v) if !v.is_empty() => v,
        _ => {
            render_error(res, StatusCode::BAD_REQUEST, "missing curve name");
            return;
        }
    };

    match web_state().dataset.curve_values(&name).await {
        Ok(values) if values.is_empty() => {
            render_error(
                res,
                StatusCode::NOT_FOUND,
                &format!("no samples stored for curve '{}'", name),
            );
        }
        Ok(values) => {
            res.render(Json(json!({
                "curve": name,
                "count": values.len(),
                "values": values,
            })));
        }
        Err(err) => {
            Metrics::db_error();
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("database error: {}", err),
            );
        }
    }
}
