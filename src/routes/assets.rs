use crate::handlers::assets::AssetRoot;
use actix_web::{HttpResponse, Responder, get, web};
use tracing::{debug, error};

async fn serve(root: &AssetRoot, path: &str) -> HttpResponse {
    match root.load(path).await {
        Ok(Some(found)) => {
            debug!(path, "serving asset");
            HttpResponse::Ok()
                .content_type(found.content_type)
                .body(found.body)
        }
        Ok(None) => HttpResponse::NotFound().body("Not Found"),
        Err(e) => {
            error!("Failed to serve {}: {:?}", path, e);
            HttpResponse::InternalServerError().body("Failed to read asset.")
        }
    }
}

#[get("/")]
async fn index(root: web::Data<AssetRoot>) -> impl Responder {
    serve(&root, "index.html").await
}

#[get("/{path:.*}")]
async fn asset(root: web::Data<AssetRoot>, path: web::Path<String>) -> impl Responder {
    serve(&root, &path.into_inner()).await
}

/// Catch-all; register after every other service.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(asset);
}
