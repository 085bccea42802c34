use crate::render;
use crate::ChannelsAction;
use chimectl_client::{ChimeClient, CreateChannelInput};
use uuid::Uuid;

const COLUMNS: &[&str] = &["ChannelArn", "Name"];

pub async fn run(client: &ChimeClient, action: ChannelsAction, json: bool) -> anyhow::Result<()> {
    match action {
        ChannelsAction::List { app_instance_arn } => {
            let channels = client.list_channels(app_instance_arn.as_deref()).await?;
            render::print_list(&channels, COLUMNS, json);
        }
        ChannelsAction::Get { channel_arn } => {
            let channel = client.get_channel(&channel_arn).await?;
            render::print_object(&channel, json);
        }
        ChannelsAction::Create {
            name,
            app_instance_arn,
        } => {
            let input = CreateChannelInput {
                name,
                app_instance_arn,
                client_request_token: Uuid::new_v4().to_string(),
            };
            let channel = client.create_channel(&input).await?;
            render::print_object(&channel, json);
        }
        ChannelsAction::Delete { channel_arn } => {
            client.delete_channel(&channel_arn).await?;
            println!("deleted channel {channel_arn}");
        }
    }

    Ok(())
}
