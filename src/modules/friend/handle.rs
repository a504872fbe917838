use actix_web::{get, post, web};

use crate::{
    api::{error, success},
    modules::friend::{
        model::{FriendListResponse, InvitationBody, InvitationListResponse},
        service::FriendService,
    },
    utils::ValidatedJson,
};

#[get("/{user_id}")]
pub async fn list_friends(
    friend_service: web::Data<FriendService>,
    user_id: web::Path<String>,
) -> Result<success::Success<FriendListResponse>, error::Error> {
    let friends = friend_service.get_friends(&user_id).await?;
    Ok(success::Success::ok(Some(FriendListResponse { friends })))
}

#[post("/invite")]
pub async fn send_invitation(
    friend_service: web::Data<FriendService>,
    body: ValidatedJson<InvitationBody>,
) -> Result<success::Success<()>, error::Error> {
    friend_service.send_invitation(body.0.into()).await?;
    Ok(success::Success::ok(None).message("Friend request sent successfully"))
}

#[get("/invitations/{user_id}")]
pub async fn list_invitations(
    friend_service: web::Data<FriendService>,
    user_id: web::Path<String>,
) -> Result<success::Success<InvitationListResponse>, error::Error> {
    let invitations = friend_service.get_invitations(&user_id).await?;
    Ok(success::Success::ok(Some(InvitationListResponse { invitations })))
}

#[post("/accept/{invitation_id}")]
pub async fn accept_invitation(
    friend_service: web::Data<FriendService>,
    invitation_id: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    friend_service.accept_invitation(&invitation_id).await?;
    Ok(success::Success::ok(None).message("Friend request accepted"))
}

#[post("/reject/{invitation_id}")]
pub async fn reject_invitation(
    friend_service: web::Data<FriendService>,
    invitation_id: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    friend_service.reject_invitation(&invitation_id).await?;
    Ok(success::Success::ok(None).message("Friend request rejected"))
}
