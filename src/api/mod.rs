use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::models::relationships::FriendshipMode;
use crate::settings::AppSettings;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::routing::get;
use sqlx::{Pool, Sqlite};
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

pub mod catalog;
pub mod films;
pub mod users;

pub struct RequestContext {
    pub db: Pool<Sqlite>,
    pub friendship_mode: FriendshipMode,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(users::router())
        .merge(films::router())
        .merge(catalog::router())
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router().with_state(state);

    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        friendship_mode = %settings.friendship_mode,
        "Listening for requests"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn index() -> &'static str {
    "Running filmorate-service v0.1"
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
            friendship_mode: state.friendship_mode,
        })
    }
}

impl Context for RequestContext {
    fn db(&self) -> &Pool<Sqlite> {
        &self.db
    }

    fn friendship_mode(&self) -> FriendshipMode {
        self.friendship_mode
    }
}
