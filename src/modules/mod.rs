use actix_web::web::ServiceConfig;

pub mod friend {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_pg;
    pub mod handle;
    pub mod service;
    pub mod route;
}

pub mod message {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_pg;
    pub mod handle;
    pub mod service;
    pub mod route;
}

pub mod chat {
    pub mod model;
    pub mod handle;
    pub mod service;
    pub mod route;
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.configure(friend::route::configure).configure(chat::route::configure);
}
