mod helpers;

use helpers::mock_ports::MockListStore;
use std::sync::Arc;
use warden_dns_application::use_cases::{
    AppendListUseCase, BrowseListsUseCase, ValidateSourceUseCase,
};
use warden_dns_domain::CoreError;

#[tokio::test]
async fn test_append_with_items_creates_list() {
    let store = Arc::new(MockListStore::new());
    let use_case = AppendListUseCase::new(Arc::clone(&store) as Arc<_>);

    let (name, added) = use_case
        .execute(
            Some("ads".into()),
            None,
            Some(vec!["a.com".into(), "b.com".into()]),
            true,
        )
        .await
        .unwrap();

    assert_eq!(name, "ads");
    assert_eq!(added, 2);
}

#[tokio::test]
async fn test_append_infers_name_from_url() {
    let store = Arc::new(MockListStore::new());
    let use_case = AppendListUseCase::new(store);

    let (name, _) = use_case
        .execute(
            None,
            Some("https://example.org/lists/easylist.txt".into()),
            None,
            true,
        )
        .await
        .unwrap();

    assert_eq!(name, "easylist");
}

#[tokio::test]
async fn test_append_without_url_or_items_is_malformed() {
    let store = Arc::new(MockListStore::new());
    let use_case = AppendListUseCase::new(store);

    let err = use_case
        .execute(Some("ads".into()), None, None, true)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::MalformedInput(_)));
}

#[tokio::test]
async fn test_append_to_missing_list_without_create_is_not_found() {
    let store = Arc::new(MockListStore::new());
    let use_case = AppendListUseCase::new(store);

    let err = use_case
        .execute(Some("ads".into()), None, Some(vec!["a.com".into()]), false)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
}

#[tokio::test]
async fn test_overview_scoped_to_device_lists() {
    let store = Arc::new(MockListStore::new());
    store.seed("ads", vec!["a.com"]);
    store.seed("trackers", vec!["t.com", "u.com"]);
    let use_case = BrowseListsUseCase::new(store);

    let all = use_case.overview(None);
    assert_eq!(all.len(), 2);

    let scoped = use_case.overview(Some(&["trackers".to_string()]));
    assert_eq!(scoped, vec![("trackers".to_string(), 2)]);
}

#[tokio::test]
async fn test_validate_truncates_sample_to_ten() {
    let sample: Vec<String> = (0..25).map(|i| format!("d{i}.com")).collect();
    let sample_refs: Vec<&str> = sample.iter().map(String::as_str).collect();
    let store = Arc::new(MockListStore::with_preview(25, sample_refs));
    let use_case = ValidateSourceUseCase::new(store);

    let preview = use_case.execute("https://example.org/list.txt").await.unwrap();
    assert_eq!(preview.count, 25);
    assert_eq!(preview.sample.len(), 10);
}
