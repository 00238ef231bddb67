//! Shopping entry routes. `/entry/:id` accepts POST as a create, matching older clients; the id there is ignored.

use crate::handlers::entry::{
    create, delete as delete_handler, list, mark_done, mark_undone, read, update,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn entry_routes(state: AppState) -> Router {
    Router::new()
        .route("/entries", get(list).post(create))
        .route(
            "/entry/:id",
            get(read).post(create).patch(update).delete(delete_handler),
        )
        .route("/entry/:id/done", post(mark_done).delete(mark_undone))
        .with_state(state)
}
