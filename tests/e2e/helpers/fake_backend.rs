use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-elevenlabs-key";
pub const TEST_SERVICE_KEY: &str = "test-storage-service-key";
pub const FAKE_AUDIO: &[u8] = b"ID3\x04\x00fake-mpeg-frames";
/// Upstream error text that must never reach API clients
pub const UPSTREAM_SECRET: &str = "quota exceeded for key sk_live_123";

#[derive(Debug, Clone, Copy, Default)]
pub struct FakeBackendOptions {
    pub provider_fails: bool,
    pub storage_fails: bool,
    pub without_api_key: bool,
}

/// What the provider saw for one text-to-speech call
#[derive(Debug, Clone)]
pub struct RecordedSynthesis {
    pub voice_id: String,
    pub api_key: Option<String>,
    pub accept: Option<String>,
    pub body: Value,
}

/// What storage saw for one upload
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub bucket: String,
    pub key: String,
    pub authorization: Option<String>,
    pub upsert: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

#[derive(Default)]
struct FakeState {
    options: FakeBackendOptions,
    synthesis_calls: AtomicUsize,
    voice_list_calls: AtomicUsize,
    syntheses: Mutex<Vec<RecordedSynthesis>>,
    uploads: Mutex<Vec<RecordedUpload>>,
}

/// In-process stand-in for the speech provider and object storage.
///
/// Both APIs are served from one listener so a single base URL can be used
/// for `ELEVENLABS_BASE_URL` and `STORAGE_URL`.
pub struct FakeBackend {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeBackend {
    pub async fn start(options: FakeBackendOptions) -> anyhow::Result<Self> {
        let state = Arc::new(FakeState {
            options,
            ..Default::default()
        });

        let app = Router::new()
            .route("/v1/text-to-speech/:voice_id", post(synthesize))
            .route("/v1/voices", get(list_voices))
            .route("/storage/v1/object/:bucket/*key", post(upload))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { base_url, state })
    }

    pub fn synthesis_calls(&self) -> usize {
        self.state.synthesis_calls.load(Ordering::SeqCst)
    }

    pub fn voice_list_calls(&self) -> usize {
        self.state.voice_list_calls.load(Ordering::SeqCst)
    }

    pub fn syntheses(&self) -> Vec<RecordedSynthesis> {
        self.state.syntheses.lock().clone()
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.state.uploads.lock().clone()
    }
}

fn header_value(headers: &HeaderMap, name: impl header::AsHeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn synthesize(
    State(state): State<Arc<FakeState>>,
    Path(voice_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.synthesis_calls.fetch_add(1, Ordering::SeqCst);

    let api_key = header_value(&headers, "xi-api-key");
    state.syntheses.lock().push(RecordedSynthesis {
        voice_id,
        api_key: api_key.clone(),
        accept: header_value(&headers, header::ACCEPT),
        body,
    });

    if api_key.as_deref() != Some(TEST_API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": {"status": "invalid_api_key"}})),
        )
            .into_response();
    }

    if state.options.provider_fails {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"detail": {"status": "quota_exceeded", "message": UPSTREAM_SECRET}})),
        )
            .into_response();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], FAKE_AUDIO.to_vec()).into_response()
}

async fn list_voices(State(state): State<Arc<FakeState>>) -> Response {
    state.voice_list_calls.fetch_add(1, Ordering::SeqCst);

    if state.options.provider_fails {
        return (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_SECRET).into_response();
    }

    Json(json!({
        "voices": [
            {
                "voice_id": "21m00Tcm4TlvDq8ikWAM",
                "name": "Rachel",
                "category": "premade",
                "preview_url": "https://cdn.example.com/rachel.mp3",
                "labels": {"accent": "american", "gender": "female"}
            },
            {
                "voice_id": "cloned-voice-1",
                "name": "My Clone",
                "category": "cloned"
            }
        ]
    }))
    .into_response()
}

async fn upload(
    State(state): State<Arc<FakeState>>,
    Path((bucket, key)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if state.options.storage_fails {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"error": "storage offline"})),
        )
            .into_response();
    }

    state.uploads.lock().push(RecordedUpload {
        bucket: bucket.clone(),
        key: key.clone(),
        authorization: header_value(&headers, header::AUTHORIZATION),
        upsert: header_value(&headers, "x-upsert"),
        content_type: header_value(&headers, header::CONTENT_TYPE),
        size: body.len(),
    });

    Json(json!({"Key": format!("{}/{}", bucket, key)})).into_response()
}
