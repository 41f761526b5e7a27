// member-client/tests/common/mod.rs
// In-process mock of the /miembros backend

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use tokio::sync::mpsc::UnboundedReceiver;

use member_client::{
    ChannelView, ClientConfig, Member, MemberFormController, MemberPayload, OneshotHttpClient,
    ViewEvent,
};

/// One request as the backend saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

#[derive(Debug, Default)]
pub struct MockBackend {
    members: Mutex<HashMap<i64, Member>>,
    next_id: Mutex<i64>,
    requests: Mutex<Vec<Recorded>>,
    forced: Mutex<Option<(StatusCode, String)>>,
    delays: Mutex<HashMap<i64, Duration>>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: Mutex::new(1),
            ..Default::default()
        })
    }

    pub fn router(self: &Arc<Self>) -> Router {
        Router::new()
            .route("/miembros/crear", post(create))
            .route("/miembros/{id}", get(fetch))
            .route("/miembros/actualizar/{id}", put(update))
            .route("/miembros/eliminar/{id}", delete(remove))
            .with_state(Arc::clone(self))
    }

    pub fn seed(&self, first_name: &str, last_name: &str, email: &str, active: bool) -> i64 {
        self.insert(MemberPayload {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            active,
        })
        .id
    }

    pub fn member(&self, id: i64) -> Option<Member> {
        self.members.lock().unwrap().get(&id).cloned()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Every subsequent request answers with this status and body.
    pub fn force_response(&self, status: StatusCode, body: &str) {
        *self.forced.lock().unwrap() = Some((status, body.to_string()));
    }

    /// Delay the GET for one id.
    pub fn delay_fetch(&self, id: i64, delay: Duration) {
        self.delays.lock().unwrap().insert(id, delay);
    }

    fn insert(&self, payload: MemberPayload) -> Member {
        let mut next = self.next_id.lock().unwrap();
        let member = Member {
            id: *next,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            active: payload.active,
        };
        *next += 1;
        self.members.lock().unwrap().insert(member.id, member.clone());
        member
    }

    fn record(&self, method: Method, uri: &Uri, body: Option<&str>) {
        self.requests.lock().unwrap().push(Recorded {
            method,
            path: uri.path().to_string(),
            body: body.map(str::to_string),
        });
    }

    fn forced(&self) -> Option<Response> {
        self.forced
            .lock()
            .unwrap()
            .clone()
            .map(|(status, body)| (status, body).into_response())
    }
}

type Db = State<Arc<MockBackend>>;

async fn create(State(db): Db, uri: Uri, body: String) -> Response {
    db.record(Method::POST, &uri, Some(&body));
    if let Some(forced) = db.forced() {
        return forced;
    }
    match serde_json::from_str::<MemberPayload>(&body) {
        Ok(payload) => (StatusCode::CREATED, Json(db.insert(payload))).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

async fn fetch(State(db): Db, uri: Uri, Path(id): Path<String>) -> Response {
    db.record(Method::GET, &uri, None);
    if let Some(forced) = db.forced() {
        return forced;
    }
    let Ok(id) = id.parse::<i64>() else {
        return (StatusCode::BAD_REQUEST, "id must be a number").into_response();
    };
    let delay = db.delays.lock().unwrap().get(&id).copied();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    match db.member(id) {
        Some(member) => Json(member).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "status": 404,
                "error": "Not Found",
                "message": format!("El miembro con ID {id} no existe"),
            })),
        )
            .into_response(),
    }
}

/// Only non-empty text fields overwrite stored values.
async fn update(State(db): Db, uri: Uri, Path(id): Path<String>, body: String) -> Response {
    db.record(Method::PUT, &uri, Some(&body));
    if let Some(forced) = db.forced() {
        return forced;
    }
    let Ok(id) = id.parse::<i64>() else {
        return (StatusCode::BAD_REQUEST, "id must be a number").into_response();
    };
    let payload: MemberPayload = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    if payload.is_blank() {
        return (
            StatusCode::BAD_REQUEST,
            "Debes proporcionar al menos un campo válido para actualizar.",
        )
            .into_response();
    }

    let mut members = db.members.lock().unwrap();
    let Some(existing) = members.get_mut(&id) else {
        return (StatusCode::NOT_FOUND, "Miembro no encontrado.").into_response();
    };
    if !payload.first_name.is_empty() {
        existing.first_name = payload.first_name;
    }
    if !payload.last_name.is_empty() {
        existing.last_name = payload.last_name;
    }
    if !payload.email.is_empty() {
        existing.email = payload.email;
    }
    existing.active = payload.active;
    Json(existing.clone()).into_response()
}

async fn remove(State(db): Db, uri: Uri, Path(id): Path<String>) -> Response {
    db.record(Method::DELETE, &uri, None);
    if let Some(forced) = db.forced() {
        return forced;
    }
    let Ok(id) = id.parse::<i64>() else {
        return (StatusCode::BAD_REQUEST, "id must be a number").into_response();
    };
    match db.members.lock().unwrap().remove(&id) {
        Some(_) => "Miembro eliminado correctamente.".into_response(),
        None => (StatusCode::NOT_FOUND, "Miembro no encontrado.").into_response(),
    }
}

pub type TestController = MemberFormController<OneshotHttpClient, ChannelView>;

/// Controller wired to the mock through the in-process transport.
pub fn controller(
    backend: &Arc<MockBackend>,
    config: &ClientConfig,
) -> (TestController, UnboundedReceiver<ViewEvent>) {
    let http = OneshotHttpClient::new(backend.router()).with_base_path("/miembros");
    let (view, rx) = ChannelView::channel();
    (MemberFormController::new(http, Arc::new(view), config), rx)
}

/// Everything the view has received so far.
pub fn drain(rx: &mut UnboundedReceiver<ViewEvent>) -> Vec<ViewEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
