use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use resume_builder::core::{ResumeBackend, ServiceClient};
use resume_builder::error::FETCH_FAILED_MESSAGE;
use resume_builder::types::{ListField, ProjectField, ResumeData, ResumeId, ScalarField};
use resume_builder::{Draft, LoadState, NetworkError, ResumeApp, SubmitError};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct Hit {
    method: Method,
    path: String,
    body: Option<Value>,
}

/// Stand-in resume API: answers every route with a fixed status and body
/// and records what it was sent.
#[derive(Clone)]
struct StubBackend {
    status: StatusCode,
    body: Value,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl StubBackend {
    fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }
}

async fn respond(
    State(stub): State<StubBackend>,
    method: Method,
    uri: Uri,
    body: String,
) -> (StatusCode, Json<Value>) {
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_str(&body).ok()
    };
    stub.hits.lock().unwrap().push(Hit {
        method,
        path: uri.path().to_string(),
        body,
    });
    (stub.status, Json(stub.body.clone()))
}

async fn spawn_backend(status: StatusCode, body: Value) -> (String, StubBackend) {
    let stub = StubBackend {
        status,
        body,
        hits: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/api/resumes", get(respond).post(respond))
        .route("/api/resumes/:id", get(respond))
        .route("/api/health", get(respond))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), stub)
}

fn jane_draft() -> Draft {
    Draft::new()
        .set_scalar(ScalarField::Name, "Jane Doe")
        .set_scalar(ScalarField::Email, "jane@x.com")
        .set_scalar(ScalarField::Phone, "555-1234")
        .set_list_entry(ListField::Education, 0, "BA Econ")
        .unwrap()
        .set_list_entry(ListField::Skills, 0, "SQL")
        .unwrap()
        .set_project_field(0, ProjectField::Title, "Site")
        .unwrap()
        .set_project_field(0, ProjectField::Description, "A site")
        .unwrap()
        .set_technology(0, 0, "TS")
        .unwrap()
}

#[tokio::test]
async fn test_list_resumes_parses_array() {
    let body = serde_json::json!([{"id": 3, "name": "A", "email": "a@x.com", "phone": "1",
        "education": [], "experience": ["Dev"], "skills": [], "projects": []}]);
    let (base, stub) = spawn_backend(StatusCode::OK, body).await;

    let client = ServiceClient::new(&base, None).unwrap();
    let resumes = client.list_resumes().await.unwrap();

    assert_eq!(resumes.len(), 1);
    assert_eq!(resumes[0].id, ResumeId(3));
    assert_eq!(resumes[0].data.experience, vec!["Dev"]);

    let hits = stub.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].method, Method::GET);
    assert_eq!(hits[0].path, "/api/resumes");
}

#[tokio::test]
async fn test_create_posts_draft_without_id() {
    let draft = jane_draft();
    let mut stored = serde_json::to_value(draft.data()).unwrap();
    stored["id"] = 1.into();
    let (base, stub) = spawn_backend(StatusCode::CREATED, stored).await;

    let client = ServiceClient::new(&base, None).unwrap();
    let created = client.create_resume(draft.data()).await.unwrap();
    assert_eq!(created.id, ResumeId(1));
    assert_eq!(&created.data, draft.data());

    let hits = stub.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].method, Method::POST);
    assert_eq!(hits[0].path, "/api/resumes");
    let sent = hits[0].body.clone().unwrap();
    assert!(sent.get("id").is_none());
    assert_eq!(sent["projects"][0]["technologies"][0], "TS");
    assert_eq!(sent["experience"], serde_json::json!([""]));
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let (base, _stub) = spawn_backend(
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::json!({"error": "Failed to create resume"}),
    )
    .await;

    let client = ServiceClient::new(&base, None).unwrap();
    let err = client
        .create_resume(jane_draft().data())
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::Status(s) if s.as_u16() == 500));
}

#[tokio::test]
async fn test_submit_scenario_over_http() {
    let draft = jane_draft();
    let mut stored = serde_json::to_value(draft.data()).unwrap();
    stored["id"] = 1.into();
    let (base, _stub) = spawn_backend(StatusCode::CREATED, stored).await;

    let mut app = ResumeApp::new(ServiceClient::new(&base, None).unwrap());
    app.replace_draft(draft);
    let created = app.submit().await.unwrap().clone();

    assert_eq!(created.id, ResumeId(1));
    assert_eq!(app.resumes().len(), 1);
    assert_eq!(app.resumes()[0].data.name, "Jane Doe");
    assert_eq!(app.resumes()[0].data.skills, vec!["SQL"]);
    assert_eq!(app.draft(), &Draft::new());
}

#[tokio::test]
async fn test_submit_server_error_keeps_draft() {
    let (base, _stub) =
        spawn_backend(StatusCode::SERVICE_UNAVAILABLE, serde_json::json!({})).await;

    let mut app = ResumeApp::new(ServiceClient::new(&base, None).unwrap());
    app.replace_draft(jane_draft());
    let err = app.submit().await.unwrap_err();

    match err {
        SubmitError::Network(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(503)),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(app.draft(), &jane_draft());
    assert!(app.resumes().is_empty());
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_backend() {
    let (base, stub) = spawn_backend(StatusCode::CREATED, serde_json::json!({})).await;

    let mut app = ResumeApp::new(ServiceClient::new(&base, None).unwrap());
    app.replace_draft(jane_draft().set_scalar(ScalarField::Email, ""));
    let err = app.submit().await.unwrap_err();

    assert!(matches!(err, SubmitError::Validation { .. }));
    assert!(stub.hits().is_empty());
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Bind then release a port so nothing is listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ServiceClient::new(&format!("http://{}", addr), None).unwrap();
    let mut app = ResumeApp::new(client);
    assert_eq!(app.load_state(), LoadState::Pending);
    assert!(app.is_loading());

    assert_eq!(app.load().await, LoadState::Failed);
    assert!(!app.is_loading());
    assert!(app.resumes().is_empty());
    assert_eq!(app.error(), Some(FETCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_get_resume_and_health() {
    let (base, stub) = spawn_backend(
        StatusCode::OK,
        serde_json::json!({"id": 9, "name": "Nine", "email": "n@x.com", "phone": "9"}),
    )
    .await;
    let client = ServiceClient::new(&base, None).unwrap();
    let resume = client.get_resume(ResumeId(9)).await.unwrap();
    assert_eq!(
        resume.data,
        ResumeData {
            name: "Nine".to_string(),
            email: "n@x.com".to_string(),
            phone: "9".to_string(),
            ..ResumeData::default()
        }
    );
    assert_eq!(stub.hits()[0].path, "/api/resumes/9");

    let (base, stub) = spawn_backend(
        StatusCode::OK,
        serde_json::json!({"status": "healthy", "message": "Resume Builder API is running"}),
    )
    .await;
    let client = ServiceClient::new(&base, None).unwrap();
    assert!(client.health().await.unwrap().is_healthy());
    assert_eq!(stub.hits()[0].path, "/api/health");
}
