pub mod health;

#[cfg(test)]
mod round_trip;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::auth::{self, mfa, users};
use crate::communications::{calendar::CalendarEvent, notifications::Notification, reports::Report};
use crate::crud::{handlers as crud, Child, Record};
use crate::insights::{admin, dashboard, evidence};
use crate::records::{
    assignments::TrainingMenuAssignment,
    career::{CareerGoal, CareerPath, Milestone},
    documents::Document,
    evaluations::Evaluation,
    evidence::DigitalEvidence,
    growth::IntegratedGrowth,
    japanese::{JapaneseLearningRecord, JapaneseProficiency},
    messages::Message,
    progress::WorkerProgress,
    simulator::SimulatorTraining,
    skills::{SkillTraining, SpecificSkillTransition},
    support::PreDepartureSupport,
};
use crate::state::AppState;
use crate::training::{
    courses::{Training, TrainingEnrollment},
    menus::{self, TrainingMenu},
    replay,
    sessions::{self, KpiScore, OperationLog, TrainingSession},
    unity,
};
use crate::uploads;
use crate::workers::{handlers as workers, models::Worker};

/// `GET/POST <base>` and `GET/PUT/DELETE <base>/:record_id` for records
/// scoped to the parent id captured in `base`.
///
/// Parameter names sharing a path prefix must agree, so every parent segment
/// is spelled the same way across routes.
fn nested<R: Child>(router: Router<AppState>, base: &str) -> Router<AppState> {
    router
        .route(base, get(crud::list_children::<R>).post(crud::create_child::<R>))
        .route(
            &format!("{base}/:record_id"),
            get(crud::get_child::<R>)
                .put(crud::update_child::<R>)
                .delete(crud::delete_child::<R>),
        )
}

fn by_id<R: Record>(router: Router<AppState>, path: &str) -> Router<AppState> {
    router.route(
        path,
        get(crud::get::<R>).put(crud::update::<R>).delete(crud::delete::<R>),
    )
}

fn worker_routes(router: Router<AppState>) -> Router<AppState> {
    let router = router.route("/workers", get(workers::list_workers).post(crud::create::<Worker>));
    let router = by_id::<Worker>(router, "/workers/:worker_id");

    let router = nested::<WorkerProgress>(router, "/workers/:worker_id/progress");
    let router = nested::<Document>(router, "/workers/:worker_id/documents");
    let router = nested::<Evaluation>(router, "/workers/:worker_id/evaluations");
    let router = nested::<Message>(router, "/workers/:worker_id/messages");
    let router = nested::<JapaneseProficiency>(router, "/workers/:worker_id/japanese-proficiency");
    let router = nested::<SkillTraining>(router, "/workers/:worker_id/skill-training");
    let router = nested::<JapaneseLearningRecord>(router, "/workers/:worker_id/japanese-learning");
    let router = nested::<PreDepartureSupport>(router, "/workers/:worker_id/pre-departure-support");
    let router = nested::<DigitalEvidence>(router, "/workers/:worker_id/digital-evidence");
    let router = nested::<CareerGoal>(router, "/workers/:worker_id/career-goals");
    let router = nested::<CareerPath>(router, "/workers/:worker_id/career-paths");
    let router = nested::<Milestone>(router, "/workers/:worker_id/milestones");
    let router = nested::<IntegratedGrowth>(router, "/workers/:worker_id/integrated-growth");
    let router = nested::<SpecificSkillTransition>(router, "/workers/:worker_id/specific-skill-transition");
    let router = nested::<SimulatorTraining>(router, "/workers/:worker_id/simulator-training");
    let router = nested::<TrainingMenuAssignment>(router, "/workers/:worker_id/training-menu-assignments");
    let router = nested::<CalendarEvent>(router, "/workers/:worker_id/calendar");
    nested::<Notification>(router, "/workers/:worker_id/notifications")
        .route(
            "/workers/:worker_id/reports",
            get(crud::list_children::<Report>).post(crud::create_child::<Report>),
        )
        .route(
            "/workers/:worker_id/training-sessions",
            get(sessions::list_worker_training_sessions),
        )
        .route(
            "/workers/:worker_id/dashboard/integrated",
            get(dashboard::integrated_dashboard),
        )
        .route("/workers/:worker_id/evidence-report", get(evidence::evidence_report))
}

fn communication_routes(router: Router<AppState>) -> Router<AppState> {
    let router = router
        .route(
            "/calendar",
            get(crud::list_orphans::<CalendarEvent>).post(crud::create_orphan::<CalendarEvent>),
        )
        .route(
            "/notifications",
            get(crud::list_orphans::<Notification>).post(crud::create_orphan::<Notification>),
        )
        .route(
            "/reports",
            get(crud::list_orphans::<Report>).post(crud::create_orphan::<Report>),
        );
    by_id::<Report>(router, "/reports/:id")
}

fn training_routes(router: Router<AppState>) -> Router<AppState> {
    let router = router.route("/trainings", get(crud::list::<Training>).post(crud::create::<Training>));
    let router = by_id::<Training>(router, "/trainings/:training_id");
    let router = nested::<TrainingEnrollment>(router, "/trainings/:training_id/enrollments");

    let router = router.route(
        "/training-menus",
        get(menus::list_training_menus).post(crud::create::<TrainingMenu>),
    );
    let router = by_id::<TrainingMenu>(router, "/training-menus/:id");

    let router = router.route(
        "/training-sessions",
        get(sessions::list_training_sessions).post(crud::create::<TrainingSession>),
    );
    let router = by_id::<TrainingSession>(router, "/training-sessions/:session_id");

    router
        .route(
            "/training-sessions/:session_id/kpi-scores",
            get(crud::list_children::<KpiScore>).post(crud::create_child::<KpiScore>),
        )
        .route(
            "/training-sessions/:session_id/operation-logs",
            get(crud::list_children::<OperationLog>).post(crud::create_child::<OperationLog>),
        )
        .route("/unity/training-session", post(unity::submit_training_session))
        .route("/unity/command", post(unity::handle_command))
        .route("/replay/:session_id", get(replay::get_replay))
}

fn upload_routes(router: Router<AppState>, max_upload_bytes: usize) -> Router<AppState> {
    router
        .route(
            "/workers/screenshot",
            post(uploads::upload_screenshot).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/workers/:worker_id/documents/upload",
            post(uploads::upload_document).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}

fn account_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/admin/summary", get(admin::summary))
        .route("/auth/login", post(auth::handlers::login))
        .route("/auth/current", get(auth::handlers::current))
        .route("/auth/logout", post(auth::handlers::logout))
        .route("/auth/csrf-token", get(auth::handlers::csrf_token))
        .route("/auth/mfa/setup", post(mfa::setup))
        .route("/auth/mfa/enable", post(mfa::enable))
        .route("/auth/mfa/disable", post(mfa::disable))
        .route("/auth/mfa/backup-codes", post(mfa::backup_codes))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    let api = Router::new().route("/health", get(health::health_handler));
    let api = worker_routes(api);
    let api = communication_routes(api);
    let api = training_routes(api);
    let api = upload_routes(api, max_upload_bytes);
    let api = account_routes(api);

    Router::new().nest("/api", api).with_state(state)
}
