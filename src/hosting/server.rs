use super::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

const GAME_PAGE: &str = include_str!("game.html");

pub struct Server;

impl Server {
    pub async fn run(lounge: Lounge, bind: &str) -> Result<(), std::io::Error> {
        let state = web::Data::new(lounge);
        log::info!("starting league server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .configure(routes)
        })
        .workers(4)
        .bind(bind)?
        .run()
        .await
    }
}

/// Route table, shared by the server and the tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/league", web::get().to(league))
        .route("/players/{name}", web::get().to(score))
        .route("/players/{name}", web::post().to(win))
        .route("/game", web::get().to(game))
        .route("/ws", web::get().to(live));
}

async fn league(lounge: web::Data<Lounge>) -> impl Responder {
    HttpResponse::Ok().json(lounge.store().league().players())
}

async fn score(lounge: web::Data<Lounge>, path: web::Path<String>) -> impl Responder {
    match lounge.store().score(&path.into_inner()) {
        0 => HttpResponse::NotFound().body("0"),
        n => HttpResponse::Ok().body(n.to_string()),
    }
}

/// Recording writes the league file under the store lock, so it runs on the
/// blocking pool rather than the worker's event loop.
async fn win(
    lounge: web::Data<Lounge>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let name = path.into_inner();
    web::block(move || lounge.store().record(&name)).await?;
    Ok(HttpResponse::Accepted().finish())
}

async fn game() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GAME_PAGE)
}

async fn live(
    lounge: web::Data<Lounge>,
    body: web::Payload,
    req: HttpRequest,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, session, stream) = actix_ws::handle(&req, body)
        .inspect_err(|e| log::warn!("problem upgrading connection to websocket: {}", e))?;
    let (inbound, outbound) = Bridge::open(session, stream, lounge.bridge());
    // the winner's single league write happens inline on this task
    actix_web::rt::spawn(async move {
        match lounge.host(inbound, Arc::new(outbound.clone())).await {
            Ok(session) => log::info!("live game won by {}", session.winner()),
            Err(e) => log::warn!("live game ended early: {}", e),
        }
        outbound.close();
    });
    Ok(response)
}
