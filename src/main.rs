use actix_web::{App, HttpServer, middleware, web};

use bugboard::config::Config;
use bugboard::handlers;
use bugboard::state::BoardState;
use bugboard::supabase::SupabaseClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let client = web::Data::new(SupabaseClient::new(&config));
    let state = web::Data::new(BoardState::new());

    // Initial load runs in the background; the page shows the skeleton
    // until it settles.
    {
        let state = state.clone();
        let client = client.clone();
        actix_web::rt::spawn(async move {
            state.refresh(client.get_ref()).await;
        });
    }

    log::info!("Starting server at http://127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(client.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .route("/", web::get().to(handlers::dashboard::index))
            .route("/refresh", web::post().to(handlers::dashboard::refresh))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
