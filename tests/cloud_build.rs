#[cfg(test)]
mod tests {
    use patchup::api::cloud_build::{parse_build_listing, CloudBuild};
    use patchup::libs::error::PatchError;
    use patchup::libs::platform::PlatformTag;
    use patchup::libs::settings::AppSettings;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const LISTING: &str = r#"[
        {"build": 7, "links": {"download_primary": {"href": "https://cdn.example/signed/build-7.zip"}}},
        {"build": 6, "links": {"download_primary": {"href": "https://cdn.example/signed/build-6.zip"}}}
    ]"#;

    fn settings() -> AppSettings {
        AppSettings {
            greeting: "hello".to_string(),
            org_id: "my-org".to_string(),
            project_id: "my-project".to_string(),
            api_key: "secret-key".to_string(),
            version: 5,
            auto_update: true,
        }
    }

    fn query_error(err: anyhow::Error) -> String {
        match err.downcast_ref::<PatchError>() {
            Some(PatchError::Query(reason)) => reason.clone(),
            other => panic!("expected a query error, got {:?}", other),
        }
    }

    #[test]
    fn test_newest_record_wins() {
        let build = parse_build_listing(LISTING).unwrap();
        assert_eq!(build.build_number, 7);
        assert_eq!(build.download_url, "https://cdn.example/signed/build-7.zip");
    }

    #[test]
    fn test_empty_listing_is_a_query_error() {
        let reason = query_error(parse_build_listing("[]").unwrap_err());
        assert!(reason.contains("no successful builds"));
    }

    #[test]
    fn test_record_without_primary_download_is_a_query_error() {
        let reason = query_error(parse_build_listing(r#"[{"build": 3, "links": {}}]"#).unwrap_err());
        assert!(reason.contains("no primary download"));

        let reason = query_error(parse_build_listing(r#"[{"build": 3}]"#).unwrap_err());
        assert!(reason.contains("no primary download"));
    }

    #[test]
    fn test_malformed_listing_is_a_query_error() {
        query_error(parse_build_listing("not json").unwrap_err());
        query_error(parse_build_listing(r#"{"build": 3}"#).unwrap_err());
    }

    /// Serves one canned HTTP response on a local port and returns the raw
    /// request it received.
    async fn serve_once(listener: TcpListener, body: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();

        String::from_utf8_lossy(&request).to_string()
    }

    #[tokio::test]
    async fn test_fetch_latest_build_against_local_service() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, LISTING));

        let api = CloudBuild::with_base_url(reqwest::Client::new(), &settings(), &format!("http://{addr}/"));
        let build = api.fetch_latest_build(PlatformTag::Windows).await.unwrap();

        assert_eq!(build.build_number, 7);
        assert_eq!(build.download_url, "https://cdn.example/signed/build-7.zip");

        let request = server.await.unwrap();
        assert!(request.contains("/orgs/my-org/projects/my-project/buildtargets/_all/builds"));
        assert!(request.contains("buildStatus=success"));
        assert!(request.contains("platform=standalonewindows"));
        assert!(request.to_lowercase().contains("authorization: basic"));
    }

    #[tokio::test]
    async fn test_empty_listing_from_service_degrades_to_query_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "[]"));

        let api = CloudBuild::with_base_url(reqwest::Client::new(), &settings(), &format!("http://{addr}"));
        let reason = query_error(api.fetch_latest_build(PlatformTag::MacLike).await.unwrap_err());

        assert!(reason.contains("no successful builds"));
        assert!(server.await.unwrap().contains("platform=standaloneosxintel"));
    }
}
