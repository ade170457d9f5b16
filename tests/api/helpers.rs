use reqwest::Response;
use wiremock::MockServer;

use member_info::{
    config::{get_configuration, Settings},
    startup::Application,
};

pub struct TestApp {
    pub address: String,
    pub member_server: MockServer,
}

impl TestApp {
    pub async fn spawn_app() -> TestApp {
        TestApp::spawn_app_with(|_| {}).await
    }

    /// Spawns the application after letting the caller tweak its settings.
    pub async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
        let mut config = get_configuration().expect("Missing configuration file.");
        let member_server = MockServer::start().await;

        // We are using port 0 as way to define a different port per each test. Port 0 is a special case that operating systems
        // take into account: when port is 0, the OS will search for the first available port
        config.set_app_port(0);
        config.set_service_host(member_server.uri());
        customize(&mut config);

        let application = Application::build(config)
            .await
            .expect("Failed to build application.");

        let address = format!("http://127.0.0.1:{}", application.get_port());

        tokio::spawn(application.run_until_stop());

        TestApp {
            address,
            member_server,
        }
    }

    pub async fn get_member_info(&self, member_id: &str) -> Response {
        let client = reqwest::Client::new();
        let url = format!("{}/v1/member/info/{}", self.address, member_id);

        client
            .get(&url)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
