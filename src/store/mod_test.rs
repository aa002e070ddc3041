use super::*;

// =============================================================================
// is_valid_file_name
// =============================================================================

#[test]
fn valid_file_name_accepts_generated_names() {
    let record = SvgRecord::generate();
    assert!(is_valid_file_name(&record.file_name));
    assert_eq!(record.file_name.len(), 40);
}

#[test]
fn valid_file_name_is_case_insensitive() {
    assert!(is_valid_file_name("0F8FAD5B-D9CB-469F-A165-70867728950E.SVG"));
    assert!(is_valid_file_name("0f8fad5b-d9cb-469f-a165-70867728950e.Svg"));
}

#[test]
fn valid_file_name_rejects_traversal() {
    assert!(!is_valid_file_name("../../etc/passwd"));
    assert!(!is_valid_file_name("../0f8fad5b-d9cb-469f-a165-70867728950e.svg"));
    assert!(!is_valid_file_name("0f8fad5b-d9cb-469f-a165-7086772895/.svg"));
}

#[test]
fn valid_file_name_rejects_wrong_shapes() {
    assert!(!is_valid_file_name(""));
    assert!(!is_valid_file_name(".svg"));
    assert!(!is_valid_file_name("0f8fad5b-d9cb-469f-a165-70867728950e.png"));
    assert!(!is_valid_file_name("0f8fad5b-d9cb-469f-a165-70867728950.svg"));
    assert!(!is_valid_file_name("0f8fad5b-d9cb-469f-a165-70867728950ee.svg"));
    assert!(!is_valid_file_name("0g8fad5b-d9cb-469f-a165-70867728950e.svg"));
}

#[test]
fn valid_file_name_handles_multibyte_input() {
    assert!(!is_valid_file_name("é.svg"));
    assert!(!is_valid_file_name("abcé"));
}

// =============================================================================
// validate_content
// =============================================================================

#[test]
fn validate_content_requires_leading_angle_bracket() {
    assert!(validate_content("<svg/>").is_ok());
    assert!(validate_content("   \n<svg/>").is_ok());
    assert!(matches!(validate_content(""), Err(StoreError::InvalidContent)));
    assert!(matches!(validate_content("   "), Err(StoreError::InvalidContent)));
    assert!(matches!(validate_content("svg>"), Err(StoreError::InvalidContent)));
}

#[test]
fn file_name_for_is_lowercase_hyphenated() {
    let id = Uuid::parse_str("0F8FAD5B-D9CB-469F-A165-70867728950E").unwrap();
    assert_eq!(file_name_for(id), "0f8fad5b-d9cb-469f-a165-70867728950e.svg");
}

#[test]
fn sort_descending_orders_reverse_lexicographic() {
    let mut names = vec!["a.svg".to_owned(), "c.svg".to_owned(), "b.svg".to_owned()];
    sort_descending(&mut names);
    assert_eq!(names, vec!["c.svg", "b.svg", "a.svg"]);
}

// =============================================================================
// MemoryStore
// =============================================================================

#[tokio::test]
async fn memory_store_round_trips_bytes() {
    let store = MemoryStore::new();
    let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\">é</svg>";
    let record = store.save(svg).await.unwrap();
    assert_eq!(store.read(&record.file_name).await.unwrap(), svg.as_bytes());
}

#[tokio::test]
async fn memory_store_rejects_invalid_content_without_storing() {
    let store = MemoryStore::new();
    assert!(matches!(store.save("hello").await, Err(StoreError::InvalidContent)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn memory_store_lists_descending() {
    let store = MemoryStore::new();
    for _ in 0..4 {
        store.save("<svg/>").await.unwrap();
    }
    let names = store.list().await.unwrap();
    assert_eq!(names.len(), 4);
    assert!(names.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn memory_store_read_missing_is_not_found() {
    let store = MemoryStore::new();
    let name = file_name_for(Uuid::new_v4());
    assert!(matches!(store.read(&name).await, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn memory_store_read_rejects_bad_name() {
    let store = MemoryStore::new();
    assert!(matches!(
        store.read("../../etc/passwd").await,
        Err(StoreError::InvalidName(_))
    ));
}
