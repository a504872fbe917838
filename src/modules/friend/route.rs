use crate::modules::{friend::handle::*, message};
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/friends")
            .service(send_invitation)
            .service(list_invitations)
            .service(accept_invitation)
            .service(reject_invitation)
            .configure(message::route::configure)
            .service(list_friends),
    );
}
