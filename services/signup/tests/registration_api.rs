//! Integration tests for the sign-up form against a mocked registration API

use std::net::TcpListener;
use std::time::Duration;

use serde_json::json;
use signup::navigation::{HOME_ROUTE, SIGN_UP_ROUTE};
use signup::{
    EndpointError, Field, HistoryNavigator, HttpRegistrationEndpoint, Navigator, SignUpForm,
    SignupError, SubmitEvent, ValidationSchema,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn form_for(base_url: String) -> SignUpForm<HttpRegistrationEndpoint, HistoryNavigator> {
    let endpoint = HttpRegistrationEndpoint::new(base_url, Duration::from_secs(5))
        .expect("Failed to build registration client");
    let navigator = HistoryNavigator::default();
    navigator.push(SIGN_UP_ROUTE);

    let form = SignUpForm::new(endpoint, navigator, ValidationSchema::strict());
    form.handle_change(Field::Name, "Maria Souza");
    form.handle_change(Field::Cpf, "123.456.789-09");
    form.handle_change(Field::Email, "maria@example.com");
    form.handle_change(Field::Password, "s3cret!");
    form.handle_change(Field::BirthDate, "15/03/1990");
    form
}

/// Test that a valid form is posted with the ISO birth date and navigates home
#[tokio::test]
async fn test_submit_posts_draft_and_navigates_home() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({
            "name": "Maria Souza",
            "cpf": "123.456.789-09",
            "email": "maria@example.com",
            "password": "s3cret!",
            "birthDate": "1990-03-15",
            "removed": 0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let form = form_for(server.uri());
    form.handle_submit(&mut SubmitEvent::new())
        .await
        .expect("Registration should succeed");

    assert_eq!(form.navigator().current(), HOME_ROUTE);
    assert_eq!(form.submit_error(), None);
}

/// Test that an API rejection is reported and blocks navigation
#[tokio::test]
async fn test_rejected_registration_keeps_user_on_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "CPF already registered"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let form = form_for(server.uri());
    let err = form.handle_submit(&mut SubmitEvent::new()).await.unwrap_err();

    assert!(matches!(
        err,
        SignupError::Endpoint(EndpointError::Rejected { status: 400, ref message })
            if message == "CPF already registered"
    ));
    assert_eq!(form.navigator().current(), SIGN_UP_ROUTE);
    assert_eq!(form.submit_error().as_deref(), Some("CPF already registered"));
    assert!(!form.is_submitting());
}

/// Test that validation errors stop the request before it is sent
#[tokio::test]
async fn test_invalid_form_never_reaches_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let form = form_for(server.uri());
    form.handle_change(Field::Email, "not-an-email");
    form.handle_change(Field::BirthDate, "not-a-date");

    let err = form.handle_submit(&mut SubmitEvent::new()).await.unwrap_err();
    let SignupError::Validation(errors) = err else {
        panic!("Expected validation errors");
    };

    assert!(errors.has(Field::Email));
    assert!(errors.has(Field::BirthDate));
    assert_eq!(form.navigator().current(), SIGN_UP_ROUTE);
}

/// Test that a connection failure surfaces as a transport error
#[tokio::test]
async fn test_unreachable_api_is_reported() {
    // Reserve a local port, then free it so nothing is listening there
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind a local port");
    let address = listener.local_addr().expect("Failed to read local address");
    drop(listener);

    let form = form_for(format!("http://{}", address));
    let err = form.handle_submit(&mut SubmitEvent::new()).await.unwrap_err();

    assert!(matches!(err, SignupError::Endpoint(EndpointError::Transport(_))));
    assert!(form.submit_error().is_some());
    assert_eq!(form.navigator().current(), SIGN_UP_ROUTE);
    assert!(!form.is_submitting());
}
