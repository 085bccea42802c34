use crate::render;
use crate::MeetingsAction;
use chimectl_client::{ChimeClient, CreateMeetingInput};
use uuid::Uuid;

const COLUMNS: &[&str] = &["MeetingId", "ExternalMeetingId", "MediaRegion"];

pub async fn run(client: &ChimeClient, action: MeetingsAction, json: bool) -> anyhow::Result<()> {
    match action {
        MeetingsAction::List => {
            let meetings = client.list_meetings().await?;
            render::print_list(&meetings, COLUMNS, json);
        }
        MeetingsAction::Get { meeting_id } => {
            let meeting = client.get_meeting(&meeting_id).await?;
            render::print_object(&meeting, json);
        }
        MeetingsAction::Create {
            external_meeting_id,
            media_region,
        } => {
            let input = CreateMeetingInput {
                client_request_token: Uuid::new_v4().to_string(),
                external_meeting_id,
                media_region,
            };
            let meeting = client.create_meeting(&input).await?;
            render::print_object(&meeting, json);
        }
        MeetingsAction::Delete { meeting_id } => {
            client.delete_meeting(&meeting_id).await?;
            println!("deleted meeting {meeting_id}");
        }
    }

    Ok(())
}
