use crate::cli::GroupsCommand;
use crate::error::ZmError;
use crate::render;
use crate::zammad_client::ZammadClient;

pub(super) async fn run(
    command: &GroupsCommand,
    client: &ZammadClient,
) -> Result<String, ZmError> {
    match command {
        GroupsCommand::List => {
            tracing::debug!("groups list");
            let groups = client.list_groups().await?;
            Ok(render::format_group_list(&groups))
        }
        GroupsCommand::Get { id } => {
            tracing::debug!(group_id = id, "groups get");
            let group = client.get_group(*id).await?;
            Ok(render::format_group_details(&group))
        }
    }
}
