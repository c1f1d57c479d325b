use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::config::{apply_security_headers, create_cors_layer};
use crate::handlers::{self, dashboard, events, organisations, reports, skills, volunteers};

pub fn create_routes(pool: SqlitePool) -> Router {
    let router = Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/volunteers", get(volunteers::list_volunteers))
        .route(
            "/volunteers/new",
            get(volunteers::new_volunteer_form).post(volunteers::create_volunteer),
        )
        .route("/volunteers/search", get(volunteers::search_by_skill))
        .route("/volunteers/:volunteer_id", get(volunteers::get_volunteer))
        .route(
            "/volunteers/:volunteer_id/update_phone",
            get(volunteers::update_phone_form).post(volunteers::update_phone),
        )
        .route("/organisations", get(organisations::list_organisations))
        .route("/organisations/:org_id", get(organisations::get_organisation))
        .route(
            "/organisations/:org_id/volunteers",
            get(organisations::volunteers_for_events),
        )
        .route("/events", get(events::list_events))
        .route("/events/:event_id", get(events::get_event))
        .route("/events/:event_id/delete", post(events::delete_event))
        .route("/skills", get(skills::list_skills))
        .route("/reports/event-statistics", get(reports::event_statistics))
        .route("/reports/volunteer-profiles", get(reports::volunteer_profiles))
        .route("/reports/skill-distribution", get(reports::skill_distribution))
        .route("/reports/organisation-summary", get(reports::organisation_summary))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(pool);

    apply_security_headers(router)
}
