mod support;

use std::io::Cursor;

use serde_json::json;
use stele_core::application::commands::titles::MigrateTitlesCommand;
use stele_core::application::queries::slugs::GenerateSlugQuery;
use stele_core::domain::document::Title;
use stele_core::infrastructure::repositories::NdjsonDocumentStore;
use support::services;

const DATASET: &str = concat!(
    r#"{"_id": "a1", "_type": "article", "title": "Launch Day", "slug": {"_type": "slug", "current": "launch-day"}, "status": "published"}"#,
    "\n",
    r#"{"_id": "drafts.a2", "_type": "article", "title": "Launch Day"}"#,
    "\n",
    "not json at all\n",
    r#"{"_id": "a3", "_type": "article", "title": [{"_type": "block", "style": "normal", "children": [{"_type": "span", "text": "Already Rich"}]}]}"#,
    "\n",
    r#"{"_id": "c1", "_type": "category", "title": "News"}"#,
    "\n",
);

fn dataset_services() -> stele_core::application::services::StudioServices {
    let store = NdjsonDocumentStore::from_reader(Cursor::new(DATASET)).expect("fixture dataset");
    services(&std::sync::Arc::new(store))
}

#[tokio::test]
async fn a_migration_plan_over_a_raw_dataset_emits_patch_lines() {
    let services = dataset_services();

    let plan = services
        .title_migration
        .plan(MigrateTitlesCommand {
            document_types: vec!["article".to_owned(), "category".to_owned()],
        })
        .await
        .unwrap();

    // a3 is already rich and the damaged line was dropped at read time.
    assert_eq!(plan.mutations.len(), 3);
    let planned: Vec<&str> = plan
        .mutations
        .iter()
        .map(|mutation| mutation.patch.id.as_str())
        .collect();
    assert_eq!(planned, ["a1", "drafts.a2", "c1"]);

    let line = serde_json::to_string(&plan.mutations[2]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(parsed["patch"]["id"], "c1");
    assert_eq!(parsed["patch"]["set"]["title"][0]["_type"], "block");
    assert_eq!(
        parsed["patch"]["set"]["title"][0]["children"][0]["text"],
        "News"
    );
}

#[tokio::test]
async fn slug_generation_sees_the_slugs_of_the_same_dataset() {
    let services = dataset_services();

    let resolution = services
        .slug_queries
        .generate_slug(GenerateSlugQuery {
            title: Title::PlainText("Launch Day".to_owned()),
            doc_type: "article".to_owned(),
            document_id: None,
        })
        .await
        .unwrap();
    assert_eq!(resolution.slug.as_deref(), Some("launch-day-2"));

    let own = services
        .slug_queries
        .generate_slug(GenerateSlugQuery {
            title: Title::PlainText("Launch Day".to_owned()),
            doc_type: "article".to_owned(),
            document_id: Some("a1".to_owned()),
        })
        .await
        .unwrap();
    assert_eq!(own.slug.as_deref(), Some("launch-day"));
}

#[tokio::test]
async fn unknown_document_fields_survive_the_round_trip() {
    let store = NdjsonDocumentStore::from_reader(Cursor::new(DATASET)).expect("fixture dataset");
    let doc_type = stele_core::domain::document::DocumentType::new("article").unwrap();
    let documents =
        stele_core::domain::document::DocumentSource::documents_of_type(&store, &doc_type)
            .await
            .unwrap();

    let published = documents
        .iter()
        .find(|doc| doc.id.as_str() == "a1")
        .unwrap();
    let back = serde_json::to_value(published).unwrap();
    assert_eq!(back["status"], json!("published"));
    assert_eq!(back["slug"]["current"], json!("launch-day"));
    assert_eq!(back["title"], json!("Launch Day"));
}
