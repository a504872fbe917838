use actix_web::web::{scope, ServiceConfig};

use crate::modules::chat::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/chat")
            .service(send_chat_message)
            .service(get_conversation)
            .service(mark_read)
            .service(unread_counts),
    );
}
