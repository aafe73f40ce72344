use axum::{
    extract::{FromRequestParts, Path, State},
    http::{header::AUTHORIZATION, Request, StatusCode},
    response::IntoResponse,
    Json,
};
use lingotone::{
    config::Config,
    db,
    middleware::{
        auth::{verify_token, TokenKind},
        ApiJson, ApiQuery,
    },
    models::*,
    routes::{self, auth},
    AppState,
};
use serde_json::{json, Value};

fn config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "integration-secret".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        max_connections: 1,
        access_token_minutes: 15,
        refresh_token_days: 7,
    }
}

async fn state() -> AppState {
    let pool = db::connect_in_memory().await.expect("in-memory database");
    AppState::new(pool, &config())
}

/// 회원가입 핸들러를 거쳐 토큰을 받고, 그 액세스 토큰에서 `Caller`를 얻습니다.
async fn register(state: &AppState, username: &str) -> (Caller, AuthResponse) {
    let req = RegisterRequest {
        username: username.to_string(),
        email: Some(format!("{username}@example.com")),
        password: "correct horse battery".to_string(),
    };
    let (status, Json(body)) = auth::register(State(state.clone()), ApiJson(req))
        .await
        .expect("register");
    assert_eq!(status, StatusCode::CREATED);

    let claims = verify_token(&body.data.access_token, &state.jwt_secret, TokenKind::Access)
        .expect("fresh access token");
    (Caller::new(claims.sub), body.data)
}

async fn create_session(state: &AppState, caller: &Caller, text: &str) -> TranslationSession {
    let req: CreateTranslationSessionRequest = serde_json::from_value(json!({
        "originalText": text,
        "sourceLanguage": "en",
        "targetLanguage": "ta"
    }))
    .unwrap();
    let (status, Json(body)) =
        routes::create_translation_session(State(state.clone()), caller.clone(), ApiJson(req))
            .await
            .expect("create session");
    assert_eq!(status, StatusCode::CREATED);
    body.data
}

async fn create_variant(
    state: &AppState,
    caller: &Caller,
    session_id: &str,
    body: Value,
) -> TranslationVariant {
    let req: CreateVariantRequest = serde_json::from_value(body).unwrap();
    let (_, Json(body)) = routes::variants::create_variant(
        State(state.clone()),
        caller.clone(),
        Path(session_id.to_string()),
        ApiJson(req),
    )
    .await
    .expect("create variant");
    body.data
}

async fn list_variants(
    state: &AppState,
    caller: &Caller,
    session_id: &str,
    favorites_only: bool,
) -> Value {
    let Json(body) = routes::variants::list_variants(
        State(state.clone()),
        caller.clone(),
        Path(session_id.to_string()),
        ApiQuery(ListVariantsQuery { favorites_only }),
    )
    .await
    .expect("list variants");
    serde_json::to_value(&body).unwrap()
}

async fn error_body(err: impl IntoResponse) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn hello_in_tamil_end_to_end() {
    let state = state().await;
    let (caller, _) = register(&state, "alice").await;

    let session = create_session(&state, &caller, "Hello").await;
    create_variant(
        &state,
        &caller,
        &session.id,
        json!({ "tone": "formal", "translatedText": "வணக்கம்" }),
    )
    .await;

    let body = list_variants(&state, &caller, &session.id, false).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["translatedText"], "வணக்கம்");
    assert_eq!(body["data"]["items"][0]["tone"], "formal");
    assert_eq!(body["data"]["items"][0]["isFavorite"], false);
    assert_eq!(body["data"]["items"][0]["sessionId"], session.id.as_str());
}

#[tokio::test]
async fn favoriting_one_variant_filters_the_other_out() {
    let state = state().await;
    let (caller, _) = register(&state, "alice").await;
    let session = create_session(&state, &caller, "Hello").await;

    let formal = create_variant(
        &state,
        &caller,
        &session.id,
        json!({ "tone": "formal", "translatedText": "வணக்கம்" }),
    )
    .await;
    let unrelated = create_variant(
        &state,
        &caller,
        &session.id,
        json!({ "tone": "casual", "translatedText": "ஹலோ" }),
    )
    .await;
    assert!(!unrelated.is_favorite);

    let patch: UpdateVariantRequest =
        serde_json::from_value(json!({ "isFavorite": true })).unwrap();
    let Json(updated) = routes::variants::update_variant(
        State(state.clone()),
        caller.clone(),
        Path((session.id.clone(), formal.id.clone())),
        ApiJson(patch),
    )
    .await
    .expect("update variant");
    assert!(updated.data.is_favorite);
    assert_eq!(updated.data.tone.as_deref(), Some("formal"));

    let favorites = list_variants(&state, &caller, &session.id, true).await;
    assert_eq!(favorites["data"]["total"], 1);
    assert_eq!(favorites["data"]["items"][0]["id"], formal.id.as_str());

    let all = list_variants(&state, &caller, &session.id, false).await;
    assert_eq!(all["data"]["total"], 2);
}

#[tokio::test]
async fn sessions_are_listed_only_for_their_owner() {
    let state = state().await;
    let (alice, _) = register(&state, "alice").await;
    let (bob, _) = register(&state, "bob").await;

    let mine = create_session(&state, &alice, "Good morning").await;
    create_session(&state, &bob, "Good night").await;

    let Json(body) = routes::list_translation_sessions(State(state.clone()), alice.clone())
        .await
        .unwrap();
    assert_eq!(body.data.total, 1);
    assert_eq!(body.data.items[0].id, mine.id);

    let err = routes::get_translation_session(
        State(state.clone()),
        bob.clone(),
        Path(mine.id.clone()),
    )
    .await
    .unwrap_err();
    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn patch_with_null_clears_and_absent_keeps() {
    let state = state().await;
    let (caller, _) = register(&state, "alice").await;
    let session = create_session(&state, &caller, "Hello").await;

    let patch: UpdateTranslationSessionRequest =
        serde_json::from_value(json!({ "sourceLanguage": null, "context": "email" })).unwrap();
    let Json(body) = routes::update_translation_session(
        State(state.clone()),
        caller.clone(),
        Path(session.id.clone()),
        ApiJson(patch),
    )
    .await
    .unwrap();

    assert_eq!(body.data.source_language, None);
    assert_eq!(body.data.target_language.as_deref(), Some("ta"));
    assert_eq!(body.data.context.as_deref(), Some("email"));
    assert!(body.data.updated_at > session.updated_at);
}

#[tokio::test]
async fn empty_patch_body_is_a_validation_error() {
    let state = state().await;
    let (caller, _) = register(&state, "alice").await;
    let session = create_session(&state, &caller, "Hello").await;

    let patch: UpdateTranslationSessionRequest = serde_json::from_value(json!({})).unwrap();
    let err = routes::update_translation_session(
        State(state.clone()),
        caller.clone(),
        Path(session.id.clone()),
        ApiJson(patch),
    )
    .await
    .unwrap_err();

    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn deleting_variant_through_wrong_session_is_not_found() {
    let state = state().await;
    let (caller, _) = register(&state, "alice").await;
    let first = create_session(&state, &caller, "Hello").await;
    let second = create_session(&state, &caller, "Bye").await;
    let variant = create_variant(
        &state,
        &caller,
        &first.id,
        json!({ "translatedText": "வணக்கம்" }),
    )
    .await;

    let err = routes::variants::delete_variant(
        State(state.clone()),
        caller.clone(),
        Path((second.id.clone(), variant.id.clone())),
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");

    let Json(deleted) = routes::variants::delete_variant(
        State(state.clone()),
        caller.clone(),
        Path((first.id.clone(), variant.id.clone())),
    )
    .await
    .unwrap();
    assert_eq!(deleted.data.id, variant.id);
    assert!(deleted.data.deleted);

    let body = list_variants(&state, &caller, &first.id, false).await;
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn requests_without_token_are_unauthorized() {
    let state = state().await;
    let (mut parts, _) = Request::builder()
        .uri("/api/v1/translation-sessions")
        .body(())
        .unwrap()
        .into_parts();

    let rejection = Caller::from_request_parts(&mut parts, &state)
        .await
        .unwrap_err();
    let (status, body) = error_body(rejection).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn registered_access_token_authenticates() {
    let state = state().await;
    let (caller, tokens) = register(&state, "alice").await;

    let (mut parts, _) = Request::builder()
        .header(AUTHORIZATION, format!("Bearer {}", tokens.access_token))
        .body(())
        .unwrap()
        .into_parts();
    let extracted = Caller::from_request_parts(&mut parts, &state).await.unwrap();
    assert_eq!(extracted, caller);

    let Json(me) = auth::me(State(state.clone()), extracted).await.unwrap();
    assert_eq!(me.data.username, "alice");
}
