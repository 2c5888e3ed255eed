use crate::cli::ServeArgs;
use crate::infra::{AppState, DemoPlatform};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use recruit_ai::config::AppConfig;
use recruit_ai::dashboard::state::DashboardState;
use recruit_ai::error::AppError;
use recruit_ai::telemetry;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let platform = Arc::new(DemoPlatform::seeded());
    let dashboard =
        DashboardState::with_sample_reports(platform, config.dashboard.sample_reports)
            .with_page_size(config.dashboard.page_size);
    let shared = Arc::new(Mutex::new(dashboard));

    let app = with_dashboard_routes(shared)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "recruiter dashboard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
