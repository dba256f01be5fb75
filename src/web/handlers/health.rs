use salvo::prelude::*;
use serde_json::json;

use crate::web::web_state;

#[handler]
pub async fn health_check(res: &mut Response) {
    res.render(Json(json!({ "status": "ok" })));
}

#[handler]
pub async fn get_status(res: &mut Response) {
    let state = web_state();
    let uptime_seconds = state.started_at.elapsed().as_secs();

    let abscissa_rows = state
        .db_manager
        .abscissa_store()
        .count_samples()
        .await
        .unwrap_or(-1);
    let ordinate_rows = state
        .db_manager
        .ordinate_store()
        .count_samples()
        .await
        .unwrap_or(-1);

    res.render(Json(json!({
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": uptime_seconds,
        "database": {
            "path": state.db_manager.sqlite_path(),
            "abscissa_rows": abscissa_rows,
            "ordinate_rows": ordinate_rows,
        },
    })));
}
