#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use pantry::config::{AiConfig, Config, CorpusConfig, LoggingConfig, ServerConfig};
use pantry_recipe::{Corpus, CorpusStore, PrepareOptions};
use pantry_suggest::{RecipeSuggester, SuggestError, SuggestionService};
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn test_config(corpus_path: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: None,
        },
        corpus: CorpusConfig {
            path: corpus_path.to_string(),
            step_label: "Steg".to_string(),
            reload_enabled: false,
        },
        ai: AiConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub fn test_corpus() -> Corpus {
    let records = pantry_recipe::records_from_document(json!([
        {
            "id": 1,
            "title": "Omelett",
            "time": 10,
            "tags": ["frukost"],
            "ingredients": [{ "name": "Ägg" }, { "name": "Mjölk" }],
            "Instructions": ["Vispa.", "Stek."]
        },
        {
            "id": 2,
            "title": "Pannkakor",
            "time": 30,
            "ingredients": [
                { "name": "Vetemjöl" },
                { "name": "Mjölk" },
                { "name": "Ägg" },
                { "name": "Salt" }
            ]
        },
        { "id": 3, "title": "Tom", "ingredients": [] }
    ]));

    Corpus::prepare(&records, &PrepareOptions::default())
}

/// Suggester that records its input and answers from a fixed script.
#[derive(Default, Clone)]
pub struct FakeSuggester {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

#[async_trait]
impl RecipeSuggester for FakeSuggester {
    async fn suggest(&self, ingredients: &str) -> Result<String, SuggestError> {
        self.calls.lock().unwrap().push(ingredients.to_owned());

        if self.fail {
            return Err(SuggestError::Upstream {
                status: 500,
                body: "model overloaded".to_owned(),
            });
        }

        Ok(format!("## Recept med {ingredients}"))
    }
}

pub struct TestApp {
    pub router: Router,
    pub corpus: Arc<CorpusStore>,
    pub suggester: FakeSuggester,
}

pub fn create_test_app(config: Config, suggester: FakeSuggester) -> TestApp {
    let corpus = Arc::new(CorpusStore::new(test_corpus()));
    let router = pantry::create_app(
        config,
        corpus.clone(),
        SuggestionService::new(suggester.clone()),
    );

    TestApp {
        router,
        corpus,
        suggester,
    }
}

pub fn default_test_app() -> TestApp {
    create_test_app(test_config("data/recipes.json"), FakeSuggester::default())
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_json(response).await
}

/// POST with no body and no content type.
pub async fn post_empty(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    read_json(response).await
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, value)
}
