use super::*;

#[test]
fn url_joins_base_and_path() {
    let api = HttpApi::new("http://localhost:8000/").unwrap();
    assert_eq!(api.url(endpoints::PROJECTS), "http://localhost:8000/api/projects");
    assert_eq!(api.url(&endpoints::publish("7")), "http://localhost:8000/api/projects/7/publish");
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpApi::new(format!("http://{addr}")).unwrap();
    let err = api.list_projects().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "unexpected error: {err:?}");
}
