//! Integration tests for TeamBuilder.
//!
//! These tests drive the public API end to end with a scripted chat client.

use std::sync::Arc;

use serde_json::json;
use teambuilder::{
    ChatError, Commands, Container, ContainerConfig, DomainError, GenerationClient,
    MockChatClient, Router, StructuredData, TemplateKind,
};

fn object(value: serde_json::Value) -> StructuredData {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn setup(mock: MockChatClient) -> (Arc<MockChatClient>, GenerationClient) {
    let mock = Arc::new(mock);
    let client = GenerationClient::new(mock.clone());
    (mock, client)
}

#[tokio::test]
async fn test_large_team_scenario() {
    let (mock, client) = setup(MockChatClient::replying("A. ... B. ..."));

    let text = client
        .generate_team_building_ideas(12, "2 hours", 50, vec!["outdoor".into(), "creative".into()])
        .await
        .expect("generation should succeed");

    assert_eq!(text, "A. ... B. ...");

    let request = mock.last_request().expect("one request sent");
    assert_eq!(mock.calls(), 1);
    assert_eq!(request.max_tokens(), 1000);
    assert!(request.prompt().contains("5-7"));
    assert!(request.prompt().contains("2 hours"));
    assert!(request.prompt().contains("$50"));
    assert!(request.prompt().contains("outdoor, creative"));
}

#[tokio::test]
async fn test_small_team_scenario() {
    let (mock, client) = setup(MockChatClient::replying("ok"));

    client
        .generate_team_building_ideas(5, "1 hour", 20, vec![])
        .await
        .expect("generation should succeed");

    let prompt = mock.last_request().expect("one request sent").prompt().to_string();
    assert!(prompt.contains("3-5"));
    assert!(!prompt.contains("5-7"));
    assert!(prompt.contains("a mix of indoor and outdoor activities"));
}

#[tokio::test]
async fn test_team_size_boundary() {
    for (team_size, expected, unexpected) in [(10, "3-5", "5-7"), (11, "5-7", "3-5")] {
        let (mock, client) = setup(MockChatClient::replying("ok"));
        client
            .generate_team_building_ideas(team_size, "1 hour", 10, vec![])
            .await
            .unwrap();

        let prompt = mock.last_request().unwrap().prompt().to_string();
        assert!(prompt.contains(expected), "team of {team_size}");
        assert!(!prompt.contains(unexpected), "team of {team_size}");
    }
}

#[tokio::test]
async fn test_success_text_is_not_trimmed() {
    let raw = "\n  1. Escape room\n\n2. Cooking class  \n";
    let (_, client) = setup(MockChatClient::replying(raw));

    let text = client
        .analyze_team_dynamics(object(json!({ "size": 4 })))
        .await
        .unwrap();

    assert_eq!(text, raw);
}

#[tokio::test]
async fn test_custom_activity_prompt_contains_all_constraints() {
    let (mock, client) = setup(MockChatClient::replying("ok"));
    let constraints = object(json!({
        "location": "park",
        "duration_minutes": 90,
        "equipment": ["frisbee", "cones"],
        "weather": { "rain_plan": true }
    }));

    client
        .create_custom_activity("Outdoor relay with a twist", constraints.clone())
        .await
        .unwrap();

    let request = mock.last_request().unwrap();
    assert_eq!(request.max_tokens(), 800);
    assert!(request.prompt().contains("\"Outdoor relay with a twist\""));
    for key in ["location", "duration_minutes", "equipment", "weather", "rain_plan"] {
        assert!(request.prompt().contains(key), "missing key {key}");
    }
}

#[tokio::test]
async fn test_each_operation_has_its_own_failure() {
    let failure = || MockChatClient::failing(ChatError::network("connection reset"));

    let (mock, client) = setup(failure());
    let err = client
        .generate_team_building_ideas(6, "1 hour", 30, vec![])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to generate team building ideas");
    assert_eq!(mock.calls(), 1);

    let (mock, client) = setup(failure());
    let err = client
        .create_custom_activity("Trivia", StructuredData::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to create custom activity");
    assert_eq!(mock.calls(), 1);

    let (mock, client) = setup(failure());
    let err = client
        .analyze_team_dynamics(StructuredData::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to analyze team dynamics");
    assert_eq!(mock.calls(), 1);

    assert!(matches!(
        err,
        DomainError::GenerationFailed {
            kind: TemplateKind::TeamDynamicsAnalysis,
            cause: ChatError::Network(_),
        }
    ));
}

#[tokio::test]
async fn test_auth_and_rate_limit_share_the_generic_message() {
    for cause in [
        ChatError::from_status(401, "invalid x-api-key"),
        ChatError::from_status(429, "rate_limit_error"),
        ChatError::EmptyResponse,
    ] {
        let (_, client) = setup(MockChatClient::failing(cause.clone()));
        let err = client
            .generate_team_building_ideas(3, "1 hour", 5, vec![])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to generate team building ideas");
        assert_eq!(err.cause(), Some(&cause));
    }
}

#[tokio::test]
async fn test_router_rejects_invalid_input_before_calling() {
    let mock = Arc::new(MockChatClient::replying("unused"));
    let container = Container::with_chat_client(ContainerConfig::default(), mock.clone());
    let router = Router::new(&container);

    let err = router
        .route(Commands::Ideas {
            team_size: 0,
            duration: "2 hours".into(),
            budget: 50,
            preferences: None,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("team size must be greater than zero"));

    let err = router
        .route(Commands::Analyze {
            team_info: "\"just a string\"".into(),
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("must be a JSON object"));

    let err = router
        .route(Commands::Custom {
            description: "  ".into(),
            constraints: None,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("description is required"));

    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_router_passes_parsed_input_through() {
    let mock = Arc::new(MockChatClient::replying("Plan: ..."));
    let container = Container::with_chat_client(ContainerConfig::default(), mock.clone());
    let router = Router::new(&container);

    let output = router
        .route(Commands::Ideas {
            team_size: 15,
            duration: "half day".into(),
            budget: 75,
            preferences: Some("outdoor, , creative ".into()),
        })
        .await
        .unwrap();
    assert_eq!(output, "Plan: ...");

    let output = router
        .route(Commands::Custom {
            description: "Build a bridge from spaghetti".into(),
            constraints: Some(r#"{"team_count": 3}"#.into()),
        })
        .await
        .unwrap();
    assert_eq!(output, "Plan: ...");

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].prompt().contains("The team prefers: outdoor, creative."));
    assert!(requests[1].prompt().contains("\"team_count\": 3"));
}

#[tokio::test]
async fn test_router_validates_team_info_then_calls_once() {
    let mock = Arc::new(MockChatClient::replying("Analysis"));
    let container = Container::with_chat_client(ContainerConfig::default(), mock.clone());
    let router = Router::new(&container);

    let output = router
        .route(Commands::Analyze {
            team_info: "{}".into(),
        })
        .await
        .unwrap();

    assert_eq!(output, "Analysis");
    assert_eq!(mock.calls(), 1);
    assert!(mock.last_request().unwrap().prompt().contains("information:\n{}"));
}

#[tokio::test]
async fn test_mock_container_echoes_prompt() {
    let container = Container::new(ContainerConfig {
        mock: true,
        ..ContainerConfig::default()
    });
    assert!(container.is_mock());
    assert_eq!(container.model_name(), "mock-chat");

    let router = Router::new(&container);
    let output = router
        .route(Commands::Analyze {
            team_info: r#"{"members": 7}"#.into(),
        })
        .await
        .unwrap();

    assert!(output.starts_with("Analyze team dynamics"));
    assert!(output.contains("\"members\": 7"));
}
