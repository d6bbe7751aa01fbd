use crate::cli::UsersCommand;
use crate::error::ZmError;
use crate::render;
use crate::zammad_client::ZammadClient;

pub(super) async fn run(command: &UsersCommand, client: &ZammadClient) -> Result<String, ZmError> {
    match command {
        UsersCommand::List => {
            tracing::debug!("users list");
            let users = client.list_users().await?;
            Ok(render::format_user_list(&users))
        }
        UsersCommand::Get { id } => {
            tracing::debug!(user_id = id, "users get");
            let user = client.get_user(*id).await?;
            Ok(render::format_user_details(&user))
        }
        UsersCommand::Me => {
            tracing::debug!("users me");
            let user = client.current_user().await?;
            Ok(render::format_current_user(&user))
        }
    }
}
