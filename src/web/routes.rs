use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;
use std::path::PathBuf;

use crate::web::ServerConfig;

/// Serves the bundle from the static directory. Any path that is not a file
/// gets `index.html` so client-side routes such as `/dashboard/gallery`
/// survive a reload.
pub fn configure(cfg: &mut web::ServiceConfig, server: &ServerConfig) {
    let index: PathBuf = server.index_file();

    cfg.service(
        Files::new("/", &server.static_dir)
            .index_file("index.html")
            .prefer_utf8(true)
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index = index.clone();
                async move {
                    let (req, _) = req.into_parts();
                    let file = NamedFile::open_async(&index).await?;
                    let res = file.into_response(&req);
                    Ok(ServiceResponse::new(req, res))
                }
            })),
    );
}
