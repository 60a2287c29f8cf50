use super::*;
use crate::http::HttpApi;

fn project(slug: Option<&str>) -> Project {
    Project { id: "7".to_owned(), title: "Demo".to_owned(), theme: Theme::Dark, slug: slug.map(str::to_owned) }
}

#[test]
fn project_line_shows_theme_and_slug() {
    assert_eq!(project_line(&project(None)), "7  Demo  [dark]");
    assert_eq!(project_line(&project(Some("demo"))), "7  Demo  [dark]  /p/demo");
}

#[test]
fn block_line_quotes_content() {
    let block = Block {
        id: "b1".to_owned(),
        project_id: "7".to_owned(),
        kind: BlockKind::Text,
        content: "two\nlines".to_owned(),
        order: 3,
    };
    assert_eq!(block_line(&block), "b1  #3  text  \"two\\nlines\"");
}

#[tokio::test]
async fn view_rejects_path_without_slug() {
    let api = HttpApi::new("http://127.0.0.1:1").unwrap();
    let err = view(&api, "https://deck.test/p/", false).await.unwrap_err();
    assert!(matches!(err, CliError::MissingSlug));
}

#[tokio::test]
async fn publish_with_empty_slug_fails_before_any_request() {
    let editor = session(HttpApi::new("http://127.0.0.1:1").unwrap());
    let err = publish(&editor, "7", "", "http://localhost:3000").await.unwrap_err();
    assert!(matches!(err, CliError::EmptySlug));
}
