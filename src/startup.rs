//! src/startup.rs
use crate::configuration::Settings;
use crate::middleware::require_allowed_host;
use crate::routes::health_check;
use actix_web::dev::Server;
use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpServer};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, anyhow::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener = TcpListener::bind(&address)?;
    let port = tcp_listener.local_addr()?.port();

    // Lazy: no connection is opened until a query runs, and none of the
    // routes below issue one.
    let connection = PgPool::connect_lazy(config.database.connection_string().expose_secret())?;

    tracing::info!(
        %address,
        debug = config.debug,
        allowed_host = %config.allowed_host,
        static_root = %config.files.static_root.display(),
        media_root = %config.files.media_root.display(),
        "starting server"
    );

    let server = run(tcp_listener, connection, config)?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    connection: PgPool,
    config: Settings,
) -> Result<Server, std::io::Error> {
    let connection = web::Data::new(connection);
    let config = web::Data::new(config);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(require_allowed_host))
            .wrap(TracingLogger::default())
            .route("/", web::route().to(health_check))
            .app_data(connection.clone())
            .app_data(config.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
