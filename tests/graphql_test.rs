//! Schema-level tests: operations executed directly against the GraphQL schema.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_graphql::{Request, Variables};
use async_trait::async_trait;
use serde_json::{json, Value};
use todoql::app_context::AppContext;
use todoql::document::Document;
use todoql::errors::StoreError;
use todoql::graphql::{build_schema, TodoqlSchema};
use todoql::store::{DocumentStore, MemoryStore};

fn schema() -> TodoqlSchema {
    build_schema(AppContext::new(Arc::new(MemoryStore::new())))
}

async fn run(schema: &TodoqlSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    serde_json::to_value(&response).unwrap()
}

async fn add_todo(schema: &TodoqlSchema, user_id: &str, text: &str) -> Value {
    let body = run(
        schema,
        "mutation($uid: ID!, $text: String!) { addTodo(userId: $uid, text: $text) { id text userId completed } }",
        json!({ "uid": user_id, "text": text }),
    )
    .await;
    body["data"]["addTodo"].clone()
}

#[tokio::test]
async fn signup_then_add_then_list() {
    let schema = schema();

    let body = run(
        &schema,
        "mutation { signup(name: \"Ada\", email: \"a@x.com\", password: \"secret\") { id name email } }",
        json!({}),
    )
    .await;
    let user = &body["data"]["signup"];
    assert_eq!(user["email"], "a@x.com");
    assert_eq!(user["name"], "Ada");
    let user_id = user["id"].as_str().unwrap();

    let todo = add_todo(&schema, user_id, "buy milk").await;

    let body = run(
        &schema,
        "query($uid: ID!) { todos(userId: $uid) { id text userId completed } }",
        json!({ "uid": user_id }),
    )
    .await;
    assert_eq!(body["data"]["todos"], json!([todo]));
    assert_eq!(todo["completed"], false);
    assert_eq!(todo["userId"], user_id);
}

#[tokio::test]
async fn todos_keep_call_order_per_user() {
    let schema = schema();
    let mut expected = Vec::new();
    for text in ["a", "b", "c", "d"] {
        expected.push(add_todo(&schema, "u1", text).await);
        add_todo(&schema, "u2", "other").await;
    }

    let body = run(
        &schema,
        "{ todos(userId: \"u1\") { id text userId completed } }",
        json!({}),
    )
    .await;
    assert_eq!(body["data"]["todos"], Value::Array(expected));

    let body = run(&schema, "{ todos(userId: \"\") { id } }", json!({})).await;
    assert_eq!(body["data"]["todos"], json!([]));
}

#[tokio::test]
async fn login_unknown_email_is_not_found() {
    let schema = schema();

    let body = run(
        &schema,
        "mutation { login(email: \"ghost@x.com\", password: \"pw\") { id } }",
        json!({}),
    )
    .await;
    assert_eq!(body["errors"][0]["message"], "User not found");
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");

    let body = run(&schema, "{ users { id } }", json!({})).await;
    assert_eq!(body["data"]["users"], json!([]));
}

#[tokio::test]
async fn login_returns_signed_up_user() {
    let schema = schema();
    let body = run(
        &schema,
        "mutation { signup(name: \"Ada\", email: \"a@x.com\", password: \"pw\") { id name email } }",
        json!({}),
    )
    .await;
    let user = body["data"]["signup"].clone();

    let body = run(
        &schema,
        "mutation { login(email: \"a@x.com\", password: \"not checked\") { id name email } }",
        json!({}),
    )
    .await;
    assert_eq!(body["data"]["login"], user);
}

#[tokio::test]
async fn toggle_returns_updated_todo_and_is_its_own_inverse() {
    let schema = schema();
    let todo = add_todo(&schema, "u1", "t").await;
    let id = todo["id"].as_str().unwrap();
    let toggle = "mutation($id: ID!) { toggleTodoCompleted(id: $id) { id text userId completed } }";

    let body = run(&schema, toggle, json!({ "id": id })).await;
    let toggled = &body["data"]["toggleTodoCompleted"];
    assert_eq!(toggled["id"], id);
    assert_eq!(toggled["text"], "t");
    assert_eq!(toggled["completed"], true);

    let body = run(&schema, toggle, json!({ "id": id })).await;
    assert_eq!(body["data"]["toggleTodoCompleted"], todo);
}

#[tokio::test]
async fn toggle_missing_is_not_found() {
    let schema = schema();
    let body = run(
        &schema,
        "mutation { toggleTodoCompleted(id: \"nope\") { id } }",
        json!({}),
    )
    .await;
    assert_eq!(body["errors"][0]["message"], "Todo not found");
    assert_eq!(body["errors"][0]["extensions"]["id"], "nope");
}

#[tokio::test]
async fn delete_is_idempotent() {
    let schema = schema();
    let keep = add_todo(&schema, "u1", "keep").await;
    let gone = add_todo(&schema, "u1", "gone").await;
    let delete = "mutation($id: ID!) { deleteTodo(id: $id) }";

    let body = run(&schema, delete, json!({ "id": gone["id"] })).await;
    assert_eq!(body["data"]["deleteTodo"], true);
    let body = run(&schema, delete, json!({ "id": gone["id"] })).await;
    assert_eq!(body["data"]["deleteTodo"], true);
    let body = run(&schema, delete, json!({ "id": "nonexistent" })).await;
    assert_eq!(body["data"]["deleteTodo"], true);

    let body = run(
        &schema,
        "{ todos(userId: \"u1\") { id text userId completed } }",
        json!({}),
    )
    .await;
    assert_eq!(body["data"]["todos"], json!([keep]));
}

#[tokio::test]
async fn hello_and_users_queries() {
    let schema = schema();
    run(
        &schema,
        "mutation { signup(name: \"Ada\", email: \"a@x.com\", password: \"pw\") { id } }",
        json!({}),
    )
    .await;

    let body = run(&schema, "{ hello users { email } }", json!({})).await;
    assert!(body["data"]["hello"].as_str().unwrap().starts_with("Hello"));
    assert_eq!(body["data"]["users"], json!([{ "email": "a@x.com" }]));
}

#[test]
fn sdl_exposes_every_operation() {
    let sdl = schema().sdl();
    for field in [
        "todos(userId: ID!)",
        "signup(name: String!, email: String!, password: String!)",
        "login(email: String!, password: String!)",
        "addTodo(userId: ID!, text: String!)",
        "deleteTodo(id: ID!)",
        "toggleTodoCompleted(id: ID!)",
    ] {
        assert!(sdl.contains(field), "missing {} in\n{}", field, sdl);
    }
}

/// Loads fine, refuses every save.
#[derive(Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
    refused: AtomicBool,
}

#[async_trait]
impl DocumentStore for ReadOnlyStore {
    async fn load(&self) -> Result<Document, StoreError> {
        self.inner.load().await
    }

    async fn save(&self, _doc: &Document) -> Result<(), StoreError> {
        self.refused.store(true, Ordering::SeqCst);
        Err(StoreError::Status {
            status: 503,
            url: "http://bucket/database.json".to_string(),
        })
    }

    fn describe(&self) -> String {
        "read-only".to_string()
    }
}

#[tokio::test]
async fn failed_save_returns_no_data() {
    let store = Arc::new(ReadOnlyStore::default());
    let schema = build_schema(AppContext::new(store.clone()));

    let body = run(
        &schema,
        "mutation { addTodo(userId: \"u1\", text: \"t\") { id } }",
        json!({}),
    )
    .await;

    assert!(store.refused.load(Ordering::SeqCst));
    assert_eq!(body["data"], Value::Null);
    assert_eq!(
        body["errors"][0]["extensions"]["code"],
        "STORAGE_UNAVAILABLE"
    );

    let body = run(&schema, "{ todos(userId: \"u1\") { id } }", json!({})).await;
    assert_eq!(body["data"]["todos"], json!([]));
}
