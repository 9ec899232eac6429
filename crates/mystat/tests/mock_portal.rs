//! Mock portal tests for the mystat library.
//!
//! These tests use wiremock to simulate the portal and check the client's
//! session handling without network access or real credentials. Call counts
//! are asserted with `.expect(n)`, verified when each `MockServer` drops.

use std::time::Duration;

use chrono::Utc;
use mystat::models::HomeworkStatus;
use mystat::{
    ApiUrl, Client, ClientConfig, ClientState, Credentials, ErrorKind, HomeworkQuery,
    HomeworkUpload, RequestSpec,
};
use serde_json::{Value, json};
use wiremock::matchers::{
    body_json, body_string_contains, header, header_regex, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOGIN: &str = "/api/v2/auth/login";
const NEWS: &str = "/api/v2/news/operations/latest-news";
const USER_INFO: &str = "/api/v2/settings/user-info";

fn mock_api_url(server: &MockServer) -> ApiUrl {
    ApiUrl::new(format!("http://127.0.0.1:{}/api/v2", server.address().port())).unwrap()
}

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(mock_api_url(server))
}

fn client(server: &MockServer) -> Client {
    Client::new(config(server), Credentials::new("student", "secret123")).unwrap()
}

fn client_with_token(server: &MockServer, token: &str, expires_in: chrono::Duration) -> Client {
    let state = ClientState {
        access_token: token.to_string(),
        token_expires_at: Utc::now() + expires_in,
        group_id: None,
    };
    Client::restore(config(server), Credentials::new("student", "secret123"), state).unwrap()
}

fn login_ok(token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": token,
        "refresh_token": "refresh",
        "expires_in_access": 3600,
        "expires_in_refresh": 86400,
        "user_type": 0,
        "city_data": {"id_city": 12, "name": "Kyiv", "timezone_name": "Europe/Kiev"}
    }))
}

async fn mount_login(server: &MockServer, token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path(LOGIN))
        .respond_with(login_ok(token))
        .expect(times)
        .mount(server)
        .await;
}

fn news() -> Value {
    json!([
        {"id_bbs": 1, "theme": "Exam week", "time": "2024-05-01 10:00:00"},
        {"id_bbs": 2, "theme": "Holiday", "time": "2024-05-09 08:00:00"}
    ])
}

fn user_info() -> Value {
    json!({
        "student_id": 101,
        "current_group_id": 77,
        "full_name": "Ivan Ivanov",
        "group_name": "PV-221"
    })
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN))
        .and(body_json(json!({
            "application_key": "6a56a5df2667e65aab73ce76d1dd737f7d1faef9c52e8b8c55ac75f565d8e8a6",
            "id_city": null,
            "username": "student",
            "password": "secret123"
        })))
        .respond_with(login_ok("fresh-token"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let before = Utc::now();
    let session = client.login().await.unwrap();
    let after = Utc::now();

    assert_eq!(session.token().as_str(), "fresh-token");
    assert!(session.expires_at() >= before + chrono::Duration::seconds(3600));
    assert!(session.expires_at() <= after + chrono::Duration::seconds(3600));
    assert!(client.is_session_valid().await);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!([
            {"field": "password", "message": "Incorrect username or password."}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).login().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    match err {
        mystat::Error::Unauthenticated { fields, .. } => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].field, "password");
            assert_eq!(fields[0].message, "Incorrect username or password.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_authenticate_returns_login_metadata_without_installing() {
    let server = MockServer::start().await;
    mount_login(&server, "other-token", 1).await;

    let client = client(&server);
    let outcome = client
        .authenticate(&Credentials::new("someone", "else"))
        .await
        .unwrap();

    assert_eq!(outcome.session.token().as_str(), "other-token");
    assert_eq!(outcome.city.unwrap().name.as_deref(), Some("Kyiv"));
    assert!(!client.is_session_valid().await);
}

#[tokio::test]
async fn test_empty_credentials_never_reach_the_portal() {
    let server = MockServer::start().await;
    mount_login(&server, "unused", 0).await;

    let client = Client::new(config(&server), Credentials::new("", "secret")).unwrap();
    let err = client.latest_news().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

// ============================================================================
// Session reuse and expiry
// ============================================================================

#[tokio::test]
async fn test_valid_session_is_reused() {
    let server = MockServer::start().await;
    mount_login(&server, "fresh-token", 0).await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .and(header("authorization", "Bearer cached-token"))
        .and(header("x-language", "en"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news()))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "cached-token", chrono::Duration::hours(1));
    for _ in 0..3 {
        assert_eq!(client.latest_news().await.unwrap().len(), 2);
    }
}

#[tokio::test]
async fn test_first_call_logs_in_once() {
    let server = MockServer::start().await;
    mount_login(&server, "fresh-token", 1).await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    client.latest_news().await.unwrap();
    client.latest_news().await.unwrap();
}

#[tokio::test]
async fn test_expired_session_logs_in_transparently() {
    let server = MockServer::start().await;
    mount_login(&server, "fresh-token", 1).await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .and(header("authorization", "Bearer stale-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news()))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "stale-token", chrono::Duration::minutes(-1));
    assert!(!client.is_session_valid().await);

    let payload = client.get_json("news/operations/latest-news").await.unwrap();
    assert_eq!(payload, news());
    assert!(client.is_session_valid().await);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN))
        .respond_with(login_ok("fresh-token").set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news()))
        .expect(8)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "stale-token", chrono::Duration::seconds(-5));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.latest_news().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn test_login_under_replaced_credentials_is_not_installed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN))
        .and(body_string_contains("\"username\":\"alice\""))
        .respond_with(login_ok("alice-token").set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(LOGIN))
        .and(body_string_contains("\"username\":\"bob\""))
        .respond_with(login_ok("bob-token"))
        .expect(1)
        .mount(&server)
        .await;

    for who in ["alice", "bob"] {
        Mock::given(method("GET"))
            .and(path(NEWS))
            .and(header("authorization", format!("Bearer {}-token", who).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"who": who})))
            .mount(&server)
            .await;
    }

    let client = Client::new(config(&server), Credentials::new("alice", "pw-a")).unwrap();

    let early = {
        let client = client.clone();
        tokio::spawn(async move { client.get_json("news/operations/latest-news").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    client.set_credentials(Credentials::new("bob", "pw-b")).await;
    let after = client.get_json("news/operations/latest-news").await.unwrap();
    assert_eq!(after, json!({"who": "bob"}));

    // The call made before the switch still completes as the old account.
    assert_eq!(early.await.unwrap().unwrap(), json!({"who": "alice"}));

    // The late login did not replace the new account's session.
    let again = client.get_json("news/operations/latest-news").await.unwrap();
    assert_eq!(again, json!({"who": "bob"}));
    assert_eq!(client.export_state().await.unwrap().access_token, "bob-token");
}

#[tokio::test]
async fn test_explicit_login_does_not_join_login_in_flight() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN))
        .respond_with(login_ok("slow-token").set_delay(Duration::from_millis(300)))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_login(&server, "fast-token", 1).await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .respond_with(ResponseTemplate::new(200).set_body_json(news()))
        .mount(&server)
        .await;

    let client = client(&server);
    let background = {
        let client = client.clone();
        tokio::spawn(async move { client.latest_news().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    let session = client.login().await.unwrap();
    assert_eq!(session.token().as_str(), "fast-token");

    background.await.unwrap().unwrap();
    assert_eq!(client.export_state().await.unwrap().access_token, "fast-token");
}

#[tokio::test]
async fn test_concurrent_calls_share_one_login_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!([{"field": "password", "message": "Incorrect password"}]))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .respond_with(ResponseTemplate::new(200).set_body_json(news()))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.latest_news().await })
        })
        .collect();

    for handle in handles {
        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    }
}

#[tokio::test]
async fn test_failed_login_is_retried_on_the_next_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_login(&server, "fresh-token", 1).await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.latest_news().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Upstream);

    assert_eq!(client.latest_news().await.unwrap().len(), 2);
}

// ============================================================================
// Authorization retry
// ============================================================================

#[tokio::test]
async fn test_401_triggers_one_relogin_and_retry() {
    let server = MockServer::start().await;
    mount_login(&server, "fresh-token", 1).await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .and(header("authorization", "Bearer revoked-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "name": "Unauthorized",
            "message": "Your request was made with invalid credentials.",
            "code": 0,
            "status": 401
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news()))
        .expect(1)
        .mount(&server)
        .await;

    // The local clock still considers this token valid; the server decides.
    let client = client_with_token(&server, "revoked-token", chrono::Duration::hours(1));
    assert_eq!(client.latest_news().await.unwrap().len(), 2);

    let state = client.export_state().await.unwrap();
    assert_eq!(state.access_token, "fresh-token");
}

#[tokio::test]
async fn test_second_401_surfaces_unauthenticated() {
    let server = MockServer::start().await;
    mount_login(&server, "fresh-token", 1).await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "name": "Unauthorized",
            "message": "Your request was made with invalid credentials."
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "revoked-token", chrono::Duration::hours(1));
    let err = client.latest_news().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    assert!(err.message().contains("invalid credentials"));
}

#[tokio::test]
async fn test_write_is_retried_only_for_authorization() {
    let server = MockServer::start().await;
    mount_login(&server, "fresh-token", 0).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/homework/operations/delete"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "name": "Internal Server Error",
            "message": "Something went wrong"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "cached-token", chrono::Duration::hours(1));
    let err = client.delete_homework(42).await.unwrap_err();

    match err {
        mystat::Error::Upstream {
            status, message, ..
        } => {
            assert_eq!(status, Some(500));
            assert_eq!(message, "Something went wrong");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Result classification
// ============================================================================

#[tokio::test]
async fn test_application_failure_code_is_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "message": "News are unavailable for your branch"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "cached-token", chrono::Duration::hours(1));
    let err = client.latest_news().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(err.message(), "News are unavailable for your branch");
}

#[tokio::test]
async fn test_failure_code_can_be_disabled() {
    let server = MockServer::start().await;
    let body = json!({"code": 0, "message": "not an error here"});

    Mock::given(method("GET"))
        .and(path("/api/v2/custom/endpoint"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let state = ClientState {
        access_token: "cached-token".into(),
        token_expires_at: Utc::now() + chrono::Duration::hours(1),
        group_id: None,
    };
    let client = Client::restore(
        config(&server).with_failure_code(None),
        Credentials::new("student", "secret123"),
        state,
    )
    .unwrap();

    assert_eq!(client.get_json("custom/endpoint").await.unwrap(), body);
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id_bbs": "one"}])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(USER_INFO))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_with_token(&server, "cached-token", chrono::Duration::hours(1));

    assert_eq!(
        client.latest_news().await.unwrap_err().kind(),
        ErrorKind::Decode
    );
    let err = client.user_info().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.message().contains("maintenance"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig::default()
        .with_base_url(ApiUrl::new(format!("http://127.0.0.1:{}/api/v2", port)).unwrap());
    let client = Client::new(config, Credentials::new("student", "secret123")).unwrap();

    let err = client.login().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_per_call_timeout_is_transport_error_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(news())
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "cached-token", chrono::Duration::hours(1));
    let spec = RequestSpec::get("news/operations/latest-news")
        .with_timeout(Duration::from_millis(200));
    let err = client.execute(spec).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(
        err,
        mystat::Error::Transport(mystat::error::TransportError::Timeout { .. })
    ));
}

// ============================================================================
// Endpoints
// ============================================================================

#[tokio::test]
async fn test_homework_list_resolves_group_once() {
    let server = MockServer::start().await;
    mount_login(&server, "fresh-token", 1).await;

    Mock::given(method("GET"))
        .and(path(USER_INFO))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_info()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/homework/operations/list"))
        .and(query_param("page", "1"))
        .and(query_param("status", "3"))
        .and(query_param("type", "0"))
        .and(query_param("group_id", "77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 5,
                "id_group": 77,
                "id_spec": 3,
                "id_teach": 9,
                "name_spec": "Databases",
                "theme": "Normal forms",
                "creation_time": "2024-03-01",
                "completion_time": "2024-03-08",
                "fio_teach": "I. Petrova",
                "status": 3
            }],
            "_meta": {"currentPage": 1, "totalPages": 1}
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    let first = client.homework_list(HomeworkQuery::default()).await.unwrap();
    let second = client.homework_list(HomeworkQuery::default()).await.unwrap();

    assert_eq!(first.items[0].status, HomeworkStatus::Active);
    assert_eq!(first, second);
    assert_eq!(client.export_state().await.unwrap().group_id, Some(77));
}

#[tokio::test]
async fn test_restored_group_id_skips_profile_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(USER_INFO))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_info()))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/homework/operations/list"))
        .and(query_param("status", "6"))
        .and(query_param("group_id", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let state = ClientState {
        access_token: "cached-token".into(),
        token_expires_at: Utc::now() + chrono::Duration::hours(1),
        group_id: Some(12),
    };
    let client = Client::restore(config(&server), Credentials::new("s", "p"), state).unwrap();
    let page = client
        .homework_list(HomeworkQuery::status(HomeworkStatus::Overdue))
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.meta, None);
}

#[tokio::test]
async fn test_schedule_uses_unpadded_date_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/schedule/operations/get-by-date"))
        .and(query_param("date_filter", "2024-3-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "date": "2024-03-07",
            "started_at": "09:00",
            "finished_at": "10:20",
            "room_name": "Aud. 12",
            "subject_name": "Databases",
            "teacher_name": "I. Petrova",
            "lesson": 1
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "cached-token", chrono::Duration::hours(1));
    let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    let lessons = client.schedule_by_date(Some(date)).await.unwrap();

    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].room_name, "Aud. 12");
}

#[tokio::test]
async fn test_upload_homework_sends_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/homework/operations/create"))
        .and(header("authorization", "Bearer cached-token"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"answerText\""))
        .and(body_string_contains("SELECT 1;"))
        .and(body_string_contains("filename=\"answer.sql\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 900,
            "creation_time": "2024-03-05 12:00:00",
            "stud_answer": "SELECT 1;",
            "filename": "answer.sql",
            "auto_mark": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "cached-token", chrono::Duration::hours(1));
    let upload = HomeworkUpload::answer(5, "SELECT 1;")
        .with_file("answer.sql", b"SELECT 1;\n".to_vec())
        .with_spent_time(0, 45);
    let uploaded = client.upload_homework(&upload).await.unwrap();

    assert_eq!(uploaded.id, 900);
    assert_eq!(uploaded.filename.as_deref(), Some("answer.sql"));
}

#[tokio::test]
async fn test_upload_retry_resends_the_same_form() {
    let server = MockServer::start().await;
    mount_login(&server, "fresh-token", 1).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/homework/operations/create"))
        .and(header("authorization", "Bearer revoked-token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v2/homework/operations/create"))
        .and(header("authorization", "Bearer fresh-token"))
        .and(body_string_contains("answer-body"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 901,
            "creation_time": "2024-03-05 12:00:00",
            "auto_mark": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "revoked-token", chrono::Duration::hours(1));
    let uploaded = client
        .upload_homework(&HomeworkUpload::answer(5, "answer-body"))
        .await
        .unwrap();
    assert_eq!(uploaded.id, 901);
}

#[tokio::test]
async fn test_delete_homework_sends_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/homework/operations/delete"))
        .and(body_json(json!({"id": 42})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "cached-token", chrono::Duration::hours(1));
    assert!(client.delete_homework(42).await.unwrap());
}

#[tokio::test]
async fn test_language_header_follows_setting() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEWS))
        .and(header("x-language", "ru_RU"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, "cached-token", chrono::Duration::hours(1));
    client.set_language("ru_RU").await.unwrap();
    client.latest_news().await.unwrap();
}
