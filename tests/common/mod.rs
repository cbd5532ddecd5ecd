#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::get,
};
use prodcredits::genius::{GeniusApi, Throttle};
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";

/// Canned Genius data served by [`MockGenius::start`].
#[derive(Default, Clone)]
pub struct MockGenius {
    /// Primary artists of the search hits, in hit order.
    pub hits: Vec<(u64, String)>,
    /// Catalog pages; every page past the last one is empty.
    pub pages: Vec<Vec<u64>>,
    pub songs: HashMap<u64, Value>,
    pub fail_search: bool,
    pub fail_pages: HashSet<u32>,
    pub fail_songs: HashSet<u64>,
}

struct Shared {
    data: MockGenius,
    requests: Mutex<Vec<String>>,
}

pub struct MockServer {
    pub base_url: String,
    shared: Arc<Shared>,
}

impl MockServer {
    /// Paths (with the interesting query parameters) in the order they were hit.
    pub fn requests(&self) -> Vec<String> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn api(&self) -> GeniusApi {
        GeniusApi::new(&self.base_url, TOKEN).with_throttle(Throttle::none())
    }
}

impl MockGenius {
    pub fn hit(mut self, id: u64, name: &str) -> Self {
        self.hits.push((id, name.to_string()));
        self
    }

    pub fn page(mut self, ids: &[u64]) -> Self {
        self.pages.push(ids.to_vec());
        self
    }

    pub fn song(mut self, id: u64, body: Value) -> Self {
        self.songs.insert(id, body);
        self
    }

    pub async fn start(self) -> MockServer {
        let shared = Arc::new(Shared {
            data: self,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/search", get(search))
            .route("/artists/{id}/songs", get(artist_songs))
            .route("/songs/{id}", get(song))
            .with_state(Arc::clone(&shared));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockServer {
            base_url: format!("http://{}", addr),
            shared,
        }
    }
}

/// Builds a song detail body the way the API nests it.
pub fn song_json(
    id: u64,
    title: &str,
    artist: &str,
    producers: &[(u64, &str)],
    release_date: Option<&str>,
) -> Value {
    let producers: Vec<Value> = producers
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name, "url": "https://genius.com/artists/x" }))
        .collect();

    json!({
        "id": id,
        "title": title,
        "full_title": format!("{} by {}", title, artist),
        "primary_artist": { "id": 1000 + id, "name": artist },
        "url": format!("https://genius.com/songs/{}", id),
        "release_date": release_date,
        "producer_artists": producers,
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

async fn search(
    State(shared): State<Arc<Shared>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let q = params.get("q").cloned().unwrap_or_default();
    shared
        .requests
        .lock()
        .unwrap()
        .push(format!("/search?q={}", q));

    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if shared.data.fail_search {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let hits: Vec<Value> = shared
        .data
        .hits
        .iter()
        .map(|(id, name)| {
            json!({
                "type": "song",
                "result": {
                    "title": "whatever",
                    "primary_artist": { "id": id, "name": name }
                }
            })
        })
        .collect();

    Ok(Json(json!({ "meta": { "status": 200 }, "response": { "hits": hits } })))
}

async fn artist_songs(
    State(shared): State<Arc<Shared>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let page: u32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;
    let per_page = params.get("per_page").cloned().unwrap_or_default();
    shared.requests.lock().unwrap().push(format!(
        "/artists/{}/songs?page={}&per_page={}",
        id, page, per_page
    ));

    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if shared.data.fail_pages.contains(&page) {
        return Err(StatusCode::BAD_GATEWAY);
    }

    let songs: Vec<Value> = page
        .checked_sub(1)
        .and_then(|i| shared.data.pages.get(i as usize))
        .map(|ids| ids.iter().map(|id| json!({ "id": id, "title": "stub" })).collect())
        .unwrap_or_default();
    let next_page = if songs.is_empty() { None } else { Some(page + 1) };

    Ok(Json(json!({
        "meta": { "status": 200 },
        "response": { "songs": songs, "next_page": next_page }
    })))
}

async fn song(
    State(shared): State<Arc<Shared>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    shared.requests.lock().unwrap().push(format!("/songs/{}", id));

    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if shared.data.fail_songs.contains(&id) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let body = shared.data.songs.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({ "meta": { "status": 200 }, "response": { "song": body } })))
}
