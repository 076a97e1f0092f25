#![allow(dead_code)]

//! In-memory stand-in for the shortener API, served over real HTTP.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use shortener_client::infrastructure::http::HttpGateway;

pub const SESSION_COOKIE: &str = "session";
pub const CREATED_AT: &str = "2025-01-01T10:00:00";

#[derive(Debug, Clone)]
pub struct StoredUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct StoredLink {
    pub id: i64,
    pub owner: Option<String>,
    pub original_url: String,
    pub slug: String,
    pub clicks: u64,
    pub password: Option<String>,
    pub expires_at: Option<String>,
}

impl StoredLink {
    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "original_url": self.original_url,
            "short_url": self.slug,
            "clicks": self.clicks,
            "created_at": CREATED_AT,
            "has_password": self.password.is_some(),
            "expires_at": self.expires_at,
        })
    }
}

#[derive(Debug, Default)]
pub struct Store {
    pub users: Vec<StoredUser>,
    /// Session token to user e-mail.
    pub sessions: HashMap<String, String>,
    pub links: Vec<StoredLink>,
    next_id: i64,
    next_token: u64,
}

impl Store {
    fn user(&self, email: &str) -> Option<&StoredUser> {
        self.users.iter().find(|u| u.email == email)
    }

    fn link_by_slug(&mut self, slug: &str) -> Option<&mut StoredLink> {
        self.links.iter_mut().find(|l| l.slug == slug)
    }

    fn slug_taken(&self, slug: &str) -> bool {
        self.links.iter().any(|l| l.slug == slug)
    }
}

pub type Shared = Arc<Mutex<Store>>;

pub struct FakeApi {
    pub base_url: String,
    pub store: Shared,
}

impl FakeApi {
    pub fn gateway(&self) -> Arc<HttpGateway> {
        Arc::new(HttpGateway::new(&self.base_url).unwrap())
    }

    pub fn add_user(&self, username: &str, email: &str, password: &str) {
        self.store.lock().unwrap().users.push(StoredUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });
    }

    pub fn add_link(&self, owner: Option<&str>, slug: &str, url: &str, password: Option<&str>) -> i64 {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.links.push(StoredLink {
            id,
            owner: owner.map(str::to_string),
            original_url: url.to_string(),
            slug: slug.to_string(),
            clicks: 0,
            password: password.map(str::to_string),
            expires_at: None,
        });
        id
    }

    pub fn link(&self, slug: &str) -> Option<StoredLink> {
        self.store
            .lock()
            .unwrap()
            .links
            .iter()
            .find(|l| l.slug == slug)
            .cloned()
    }

    pub fn session_count(&self) -> usize {
        self.store.lock().unwrap().sessions.len()
    }
}

/// Starts the fake API on an ephemeral port.
pub async fn spawn_api() -> FakeApi {
    let store: Shared = Arc::default();
    let app = router(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeApi {
        base_url: format!("http://{addr}"),
        store,
    }
}

fn router(store: Shared) -> Router {
    Router::new()
        .route("/short", post(create_link))
        .route("/short/{key}", get(resolve_link).patch(rename_link).delete(delete_link))
        .route("/short/{key}/password", patch(set_password))
        .route("/short/{key}/expiration", patch(set_expiration))
        .route("/click/{slug}", post(register_click))
        .route("/stats/{slug}", get(stats))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
        .route("/auth/me/username", patch(update_username))
        .route("/auth/me/email", patch(update_email))
        .route("/auth/me/password", patch(update_password))
        .route("/user/links", get(user_links))
        .with_state(store)
}

struct ApiError(StatusCode, &'static str);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "detail": self.1 }))).into_response()
    }
}

type ApiResult = Result<Response, ApiError>;

const NOT_AUTHENTICATED: ApiError = ApiError(StatusCode::UNAUTHORIZED, "Invalid token or user not found");
const NOT_FOUND: ApiError = ApiError(StatusCode::NOT_FOUND, "Link not found");

fn ok(body: Value) -> ApiResult {
    Ok(Json(body).into_response())
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

fn session_email(store: &Store, headers: &HeaderMap) -> Result<String, ApiError> {
    session_token(headers)
        .and_then(|token| store.sessions.get(&token).cloned())
        .ok_or(NOT_AUTHENTICATED)
}

fn owned_link<'a>(store: &'a mut Store, email: &str, id: &str) -> Result<&'a mut StoredLink, ApiError> {
    let id: i64 = id.parse().map_err(|_| NOT_FOUND)?;
    store
        .links
        .iter_mut()
        .find(|l| l.id == id && l.owner.as_deref() == Some(email))
        .ok_or(NOT_FOUND)
}

fn str_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}

async fn create_link(State(store): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> ApiResult {
    let mut store = store.lock().unwrap();
    let owner = session_token(&headers).and_then(|t| store.sessions.get(&t).cloned());
    let original_url = str_field(&body, "original_url").unwrap_or_default().to_string();

    store.next_id += 1;
    let id = store.next_id;
    let slug = match str_field(&body, "short_url") {
        Some(slug) if slug.len() < 3 => return Err(ApiError(StatusCode::BAD_REQUEST, "Invalid short URL")),
        Some(slug) if store.slug_taken(slug) => {
            return Err(ApiError(StatusCode::BAD_REQUEST, "Short URL already exists"));
        }
        Some(slug) => slug.to_string(),
        None => format!("gen{id}"),
    };

    let link = StoredLink {
        id,
        owner,
        original_url,
        slug,
        clicks: 0,
        password: str_field(&body, "password").map(str::to_string),
        expires_at: str_field(&body, "expires_at").map(str::to_string),
    };
    let response = json!({
        "id": link.id,
        "original_url": link.original_url,
        "short_url": link.slug,
        "created_at": CREATED_AT,
    });
    store.links.push(link);
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn resolve_link(State(store): State<Shared>, Path(slug): Path<String>, headers: HeaderMap) -> ApiResult {
    let mut store = store.lock().unwrap();
    let link = store.link_by_slug(&slug).ok_or(NOT_FOUND)?;

    if let Some(expected) = &link.password {
        let sent = headers.get("password").and_then(|v| v.to_str().ok());
        match sent {
            None => return Err(ApiError(StatusCode::UNAUTHORIZED, "Link is password protected")),
            Some(sent) if sent != expected => {
                return Err(ApiError(StatusCode::UNAUTHORIZED, "Invalid password"));
            }
            Some(_) => {}
        }
    }

    ok(json!({
        "original_url": link.original_url,
        "short_url": link.slug,
        "created_at": CREATED_AT,
    }))
}

async fn register_click(State(store): State<Shared>, Path(slug): Path<String>) -> ApiResult {
    let mut store = store.lock().unwrap();
    let link = store.link_by_slug(&slug).ok_or(NOT_FOUND)?;
    link.clicks += 1;
    ok(json!({ "clicks": link.clicks }))
}

async fn stats(State(store): State<Shared>, Path(slug): Path<String>) -> ApiResult {
    let mut store = store.lock().unwrap();
    let link = store.link_by_slug(&slug).ok_or(NOT_FOUND)?;
    ok(json!({
        "original_url": link.original_url,
        "short_url": link.slug,
        "clicks": link.clicks,
        "created_at": CREATED_AT,
    }))
}

async fn rename_link(
    State(store): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut store = store.lock().unwrap();
    let email = session_email(&store, &headers)?;
    let slug = str_field(&body, "short_url").unwrap_or_default().to_string();
    if store.slug_taken(&slug) {
        return Err(ApiError(StatusCode::BAD_REQUEST, "Short URL already exists"));
    }
    owned_link(&mut store, &email, &id)?.slug = slug;
    ok(json!({}))
}

async fn set_password(
    State(store): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut store = store.lock().unwrap();
    let email = session_email(&store, &headers)?;
    owned_link(&mut store, &email, &id)?.password = str_field(&body, "password").map(str::to_string);
    ok(json!({}))
}

async fn set_expiration(
    State(store): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut store = store.lock().unwrap();
    let email = session_email(&store, &headers)?;
    owned_link(&mut store, &email, &id)?.expires_at = str_field(&body, "expires_at").map(str::to_string);
    ok(json!({}))
}

async fn delete_link(State(store): State<Shared>, Path(id): Path<String>, headers: HeaderMap) -> ApiResult {
    let mut store = store.lock().unwrap();
    let email = session_email(&store, &headers)?;
    let id = owned_link(&mut store, &email, &id)?.id;
    store.links.retain(|l| l.id != id);
    ok(json!({}))
}

async fn register(State(store): State<Shared>, Json(body): Json<Value>) -> ApiResult {
    let mut store = store.lock().unwrap();
    let username = str_field(&body, "username").unwrap_or_default();
    let email = str_field(&body, "email").unwrap_or_default();
    let password = str_field(&body, "password").unwrap_or_default();

    if str_field(&body, "confirm_password") != Some(password) {
        return Err(ApiError(
            StatusCode::BAD_REQUEST,
            "As senhas não coincidem. Verifique se as senhas estão iguais.",
        ));
    }
    if store.users.iter().any(|u| u.username == username) {
        return Err(ApiError(
            StatusCode::CONFLICT,
            "Nome de usuário já registrado. Por favor, tente outro nome de usuário.",
        ));
    }
    if store.user(email).is_some() {
        return Err(ApiError(
            StatusCode::CONFLICT,
            "E-mail já registrado. Por favor, tente outro e-mail.",
        ));
    }

    store.users.push(StoredUser {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    });
    Ok((StatusCode::CREATED, Json(json!({ "username": username, "email": email }))).into_response())
}

async fn login(State(store): State<Shared>, Json(body): Json<Value>) -> ApiResult {
    let mut store = store.lock().unwrap();
    let email = str_field(&body, "email").unwrap_or_default().to_string();
    let password = str_field(&body, "password").unwrap_or_default();

    let valid = store.user(&email).is_some_and(|u| u.password == password);
    if !valid {
        return Err(ApiError(
            StatusCode::UNAUTHORIZED,
            "E-mail ou senha estão inválidos. Por favor, tente novamente.",
        ));
    }

    store.next_token += 1;
    let token = format!("tok{}", store.next_token);
    store.sessions.insert(token.clone(), email);

    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly");
    Ok(([(header::SET_COOKIE, cookie)], Json(json!({ "message": "ok" }))).into_response())
}

async fn logout(State(store): State<Shared>, headers: HeaderMap) -> ApiResult {
    let mut store = store.lock().unwrap();
    let token = session_token(&headers).ok_or(NOT_AUTHENTICATED)?;
    store.sessions.remove(&token).ok_or(NOT_AUTHENTICATED)?;

    let cookie = format!("{SESSION_COOKIE}=; Path=/; Max-Age=0");
    Ok(([(header::SET_COOKIE, cookie)], Json(json!({}))).into_response())
}

async fn me(State(store): State<Shared>, headers: HeaderMap) -> ApiResult {
    let store = store.lock().unwrap();
    let email = session_email(&store, &headers)?;
    let user = store.user(&email).ok_or(NOT_AUTHENTICATED)?;
    ok(json!({ "username": user.username, "email": user.email }))
}

async fn update_username(State(store): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> ApiResult {
    let mut store = store.lock().unwrap();
    let email = session_email(&store, &headers)?;
    let username = str_field(&body, "username").unwrap_or_default().to_string();
    if store.users.iter().any(|u| u.username == username) {
        return Err(ApiError(StatusCode::CONFLICT, "Username already registered"));
    }
    if let Some(user) = store.users.iter_mut().find(|u| u.email == email) {
        user.username = username;
    }
    ok(json!({}))
}

async fn update_email(State(store): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> ApiResult {
    let mut store = store.lock().unwrap();
    let email = session_email(&store, &headers)?;
    if str_field(&body, "current_email") != Some(email.as_str()) {
        return Err(ApiError(StatusCode::BAD_REQUEST, "Invalid credentials"));
    }
    let new_email = str_field(&body, "new_email").unwrap_or_default().to_string();

    if let Some(user) = store.users.iter_mut().find(|u| u.email == email) {
        user.email = new_email.clone();
    }
    for owner in store.sessions.values_mut().filter(|e| **e == email) {
        *owner = new_email.clone();
    }
    for link in store.links.iter_mut().filter(|l| l.owner.as_deref() == Some(email.as_str())) {
        link.owner = Some(new_email.clone());
    }
    ok(json!({}))
}

async fn update_password(State(store): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> ApiResult {
    let mut store = store.lock().unwrap();
    let email = session_email(&store, &headers)?;
    let user = store
        .users
        .iter_mut()
        .find(|u| u.email == email)
        .ok_or(NOT_AUTHENTICATED)?;
    if str_field(&body, "current_password") != Some(user.password.as_str()) {
        return Err(ApiError(StatusCode::BAD_REQUEST, "Invalid credentials"));
    }
    user.password = str_field(&body, "new_password").unwrap_or_default().to_string();
    ok(json!({}))
}

async fn user_links(State(store): State<Shared>, headers: HeaderMap) -> ApiResult {
    let store = store.lock().unwrap();
    let email = session_email(&store, &headers)?;
    let links: Vec<Value> = store
        .links
        .iter()
        .filter(|l| l.owner.as_deref() == Some(email.as_str()))
        .map(StoredLink::to_json)
        .collect();
    ok(Value::Array(links))
}
