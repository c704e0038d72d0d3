use mistral_agent_rs::{
    tools::{MathTool, SearchInternetTool},
    FunctionFactory, SerpApiClient, Tool,
};
use serde_json::json;

#[tokio::test]
async fn test_math_tool() {
    let math = MathTool::new();

    let params = json!({
        "a": 2,
        "b": 2
    });

    let result = math.execute(params).await.unwrap();
    assert_eq!(result["sum"], 4);

    // Invalid types are rejected
    let params = json!({
        "a": "five",
        "b": 3
    });

    let result = math.execute(params).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_math_tool_negative_and_saturating() {
    let math = MathTool::new();

    let result = math.execute(json!({"a": -10, "b": 4})).await.unwrap();
    assert_eq!(result["sum"], -6);

    let result = math
        .execute(json!({"a": i64::MAX, "b": i64::MAX}))
        .await
        .unwrap();
    assert_eq!(result["sum"], i64::MAX);
}

#[tokio::test]
async fn test_function_factory() {
    let serpapi = SerpApiClient::new("test-key").unwrap();

    let mut factory = FunctionFactory::new();
    factory.register_tool(MathTool::new());
    factory.register_tool(SearchInternetTool::new(serpapi));

    // Test tool registration
    assert!(factory.has_function("math"));
    assert!(factory.has_function("search_internet"));
    assert!(!factory.has_function("nonexistent"));

    // Test function execution
    let params = json!({
        "a": 40,
        "b": 2
    });

    let result = factory.execute_function("math", params).await.unwrap();
    assert_eq!(result["sum"], 42);
}

#[tokio::test]
async fn test_unknown_tool_is_an_error() {
    let factory = FunctionFactory::new();

    let result = factory.execute_function("nonexistent", json!({})).await;
    match result {
        Err(mistral_agent_rs::AgentError::ToolNotFound(name)) => {
            assert_eq!(name, "nonexistent")
        }
        other => panic!("expected ToolNotFound, got {:?}", other),
    }
}

#[test]
fn test_tool_schemas() {
    let serpapi = SerpApiClient::new("test-key").unwrap();
    let math = MathTool::new();
    let search = SearchInternetTool::new(serpapi);

    // Test that schemas are valid JSON objects
    let math_schema = math.parameters_schema();
    assert!(math_schema.is_object());
    assert!(math_schema.get("properties").is_some());

    let search_schema = search.parameters_schema();
    assert!(search_schema.is_object());
    assert!(search_schema.get("properties").is_some());
}

#[test]
fn test_function_specs_wire_format() {
    let serpapi = SerpApiClient::new("test-key").unwrap();

    let mut factory = FunctionFactory::new();
    factory.register_tool(MathTool::new());
    factory.register_tool(SearchInternetTool::new(serpapi));

    let specs = factory.function_specs();
    assert_eq!(specs.len(), 2);

    for spec in &specs {
        assert_eq!(spec["type"], "function");
        assert!(spec["function"]["name"].is_string());
        assert!(spec["function"]["description"].is_string());
        assert!(spec["function"]["parameters"].is_object());
    }
}

#[test]
fn test_error_handling() {
    use mistral_agent_rs::AgentError;

    // Test error creation and formatting
    let error = AgentError::ToolExecution("Test error".to_string());
    assert_eq!(error.error_code(), "TOOL_EXECUTION_ERROR");
    assert!(error.to_string().contains("Test error"));
    assert!(!error.is_fatal());

    // Test error payload
    let payload = error.to_error_payload();
    assert_eq!(payload["error"]["code"], "TOOL_EXECUTION_ERROR");
    assert_eq!(payload["error"]["fatal"], false);

    // Startup failures are fatal
    let error = AgentError::MissingCredential("MISTRAL_API_KEY".to_string());
    assert!(error.is_fatal());
    assert!(error.to_string().contains("MISTRAL_API_KEY"));
}
