use actix_web::web::ServiceConfig;

use crate::modules::message::handle::*;

/// Registered inside the `/friends` scope.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(send_friend_message).service(list_friend_messages);
}
