mod resources;

use crate::AdGuardClient;
use wiremock::MockServer;

pub(crate) async fn create_test_client(mock_server: &MockServer) -> AdGuardClient {
    AdGuardClient::builder()
        .base_url(mock_server.uri())
        .credentials("testuser", "testpass")
        .build()
        .await
        .unwrap()
}
