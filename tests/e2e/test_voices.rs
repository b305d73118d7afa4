// E2E tests for the voice catalog endpoints

use crate::e2e::helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use test_context::test_context;

const CATEGORIES: [&str; 8] = [
    "narration",
    "conversational",
    "characters",
    "news",
    "educational",
    "meditation",
    "advertisement",
    "social-media",
];

async fn query(ctx: &TestContext, query: &str) -> Value {
    let response = ctx
        .client
        .get(&format!("/api/voices{}", query))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    response.body.unwrap()
}

fn voices(body: &Value) -> &Vec<Value> {
    body["voices"].as_array().expect("voices array")
}

fn ids(body: &Value) -> Vec<String> {
    voices(body)
        .iter()
        .map(|voice| voice["id"].as_str().unwrap().to_string())
        .collect()
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

fn facets(body: &Value) -> Vec<Value> {
    ["categories", "languages", "accents", "useCases"]
        .iter()
        .map(|key| body[*key].clone())
        .collect()
}

/// Case-insensitive substring over the searchable fields
fn voice_mentions(voice: &Value, term: &str) -> bool {
    let term = term.to_lowercase();
    ["name", "description", "category", "accent"]
        .iter()
        .any(|field| voice[*field].as_str().unwrap().to_lowercase().contains(&term))
        || strings(&voice["tags"])
            .iter()
            .any(|tag| tag.to_lowercase().contains(&term))
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_list_without_filters_returns_catalog(ctx: &TestContext) {
    let body = query(ctx, "").await;

    let total_all = body["totalAll"].as_u64().unwrap() as usize;
    assert!(total_all > 0);
    assert_eq!(body["total"].as_u64().unwrap() as usize, total_all);
    assert_eq!(voices(&body).len(), total_all);
    assert_eq!(strings(&body["categories"]), CATEGORIES);

    let languages = strings(&body["languages"]);
    assert!(languages.contains(&"Hindi".to_string()));
    assert!(languages.contains(&"English".to_string()));
    let mut sorted = languages.clone();
    sorted.sort();
    assert_eq!(languages, sorted, "languages are sorted");
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_voice_display_shape(ctx: &TestContext) {
    let body = query(ctx, "").await;

    for voice in voices(&body) {
        let usage = voice["usageCount"].as_u64().unwrap();
        assert!((1000..50000).contains(&usage), "usage count {}", usage);
        assert!(voice["previewUrl"].is_null());
        assert!(voice["createdAt"].is_string());
        assert!(CATEGORIES.contains(&voice["category"].as_str().unwrap()));
        assert!(voice["useCases"].is_array());
        assert!(voice["tags"].is_array());
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_usage_count_is_stable_across_requests(ctx: &TestContext) {
    let first = query(ctx, "").await;
    let second = query(ctx, "").await;

    let counts = |body: &Value| -> Vec<u64> {
        voices(body)
            .iter()
            .map(|v| v["usageCount"].as_u64().unwrap())
            .collect()
    };
    assert_eq!(counts(&first), counts(&second));
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_category_all_equals_no_category(ctx: &TestContext) {
    let unfiltered = query(ctx, "").await;
    let all = query(ctx, "?category=all").await;
    let empty = query(ctx, "?category=").await;

    assert_eq!(ids(&all), ids(&unfiltered));
    assert_eq!(ids(&empty), ids(&unfiltered));
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_unknown_category_is_ignored(ctx: &TestContext) {
    let unfiltered = query(ctx, "").await;
    let unknown = query(ctx, "?category=opera").await;

    assert_eq!(ids(&unknown), ids(&unfiltered));
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_category_filter_keeps_full_facets(ctx: &TestContext) {
    let unfiltered = query(ctx, "").await;
    let narration = query(ctx, "?category=narration").await;

    assert!(!voices(&narration).is_empty());
    for voice in voices(&narration) {
        assert_eq!(voice["category"], "narration");
    }
    assert_eq!(narration["total"].as_u64().unwrap() as usize, voices(&narration).len());
    assert_eq!(narration["totalAll"], unfiltered["totalAll"]);
    assert_eq!(facets(&narration), facets(&unfiltered));
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_language_filter_is_case_insensitive(ctx: &TestContext) {
    let lower = query(ctx, "?language=hindi").await;
    let proper = query(ctx, "?language=Hindi").await;

    assert!(!voices(&lower).is_empty());
    assert_eq!(ids(&lower), ids(&proper));
    for voice in voices(&lower) {
        assert_eq!(voice["language"], "Hindi");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_use_case_filter_requires_membership(ctx: &TestContext) {
    let unfiltered = query(ctx, "").await;
    let use_case = strings(&unfiltered["useCases"])
        .into_iter()
        .next()
        .expect("catalog has use cases");

    let body = query(ctx, &format!("?useCase={}", urlencoding::encode(&use_case))).await;

    assert!(!voices(&body).is_empty());
    for voice in voices(&body) {
        assert!(strings(&voice["useCases"]).contains(&use_case));
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_search_matches_tags_case_insensitively(ctx: &TestContext) {
    let body = query(ctx, "?search=NARRATOR").await;

    let found = ids(&body);
    assert!(found.contains(&"james".to_string()), "found {:?}", found);
    for voice in voices(&body) {
        assert!(voice_mentions(voice, "narrator"), "voice {} does not mention narrator", voice["id"]);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_search_without_matches_returns_empty_list(ctx: &TestContext) {
    let body = query(ctx, "?search=zzqxnomatch").await;

    assert_eq!(body["total"], 0);
    assert!(voices(&body).is_empty());
    assert!(body["totalAll"].as_u64().unwrap() > 0);
    assert_eq!(strings(&body["categories"]).len(), CATEGORIES.len());
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_filters_are_conjunctive(ctx: &TestContext) {
    let unfiltered = query(ctx, "").await;

    let expected: Vec<String> = voices(&unfiltered)
        .iter()
        .filter(|voice| voice["language"].as_str().unwrap().eq_ignore_ascii_case("english"))
        .filter(|voice| voice["category"] == "narration")
        .filter(|voice| voice_mentions(voice, "british"))
        .map(|voice| voice["id"].as_str().unwrap().to_string())
        .collect();

    let body = query(ctx, "?language=english&category=narration&search=british").await;

    assert_eq!(ids(&body), expected);
    assert!(ids(&body).contains(&"james".to_string()));
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_malformed_query_is_ignored(ctx: &TestContext) {
    let unfiltered = query(ctx, "").await;
    let malformed = query(ctx, "?category=%ZZ&&=").await;

    assert_eq!(ids(&malformed), ids(&unfiltered));
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_get_voice_by_id(ctx: &TestContext) {
    let response = ctx.client.get("/api/voices/james").await.unwrap();

    response.assert_status(StatusCode::OK);
    let voice = response.body.unwrap();
    assert_eq!(voice["id"], "james");
    assert_eq!(voice["category"], "narration");
    assert_eq!(voice["accent"], "British");
    assert!(voice["previewUrl"].is_null());
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_get_unknown_voice_returns_404(ctx: &TestContext) {
    let response = ctx.client.get("/api/voices/no-such-voice").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_error_message("no-such-voice");
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_duplicated_parameter_keeps_valid_search(ctx: &TestContext) {
    let body = query(ctx, "?language=Hindi&language=Tamil&search=zzqxnomatch").await;

    assert_eq!(body["total"], 0);
    assert!(voices(&body).is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_broken_parameter_keeps_other_filters(ctx: &TestContext) {
    let searched = query(ctx, "?search=narrator").await;
    let with_broken = query(ctx, "?category=%ZZ&search=narrator").await;

    assert_eq!(ids(&with_broken), ids(&searched));
    assert!(ids(&with_broken).len() < voices(&query(ctx, "").await).len());
}

#[test_context(TestContext)]
#[tokio::test]
async fn test_first_language_value_wins(ctx: &TestContext) {
    let hindi = query(ctx, "?language=Hindi").await;
    let duplicated = query(ctx, "?language=Hindi&language=Tamil").await;

    assert_eq!(ids(&duplicated), ids(&hindi));
}
