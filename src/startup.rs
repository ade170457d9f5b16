use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::config::Settings;
use crate::json_codec::JsonCodec;
use crate::member_client::MemberClient;
use crate::routes::{get_member_info, health_check};

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, std::io::Error> {
        let codec = JsonCodec::default();
        let http_settings = config.get_service_http();
        let member_client =
            MemberClient::new(config.get_service_host(), http_settings, codec.clone())
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

        tracing::info!(
            "Member service at {} (connect timeout {:?}, read timeout {:?}, write timeout {:?}, response cache {:?})",
            member_client.host(),
            http_settings.get_connection_timeout(),
            http_settings.get_read_timeout(),
            http_settings.get_write_timeout(),
            http_settings.get_response_cache()
        );

        let listener = TcpListener::bind(config.get_address())?;
        let port = listener.local_addr()?.port();
        let server = run(listener, member_client, codec)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    member_client: MemberClient,
    codec: JsonCodec,
) -> Result<Server, std::io::Error> {
    let member_client = web::Data::new(member_client);
    let codec = web::Data::new(codec);

    let server = HttpServer::new(move || {
        App::new()
            // Logs every incoming request inside its own span
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/v1/member/info/{member_id}", web::get().to(get_member_info))
            .app_data(member_client.clone())
            .app_data(codec.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
