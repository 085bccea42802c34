use crate::render;
use crate::AttendeesAction;
use chimectl_client::{ChimeClient, CreateAttendeeInput};

const COLUMNS: &[&str] = &["AttendeeId", "ExternalUserId"];

pub async fn run(
    client: &ChimeClient,
    meeting_id: &str,
    action: AttendeesAction,
    json: bool,
) -> anyhow::Result<()> {
    match action {
        AttendeesAction::List => {
            let attendees = client.list_attendees(meeting_id).await?;
            render::print_list(&attendees, COLUMNS, json);
        }
        AttendeesAction::Get { attendee_id } => {
            let attendee = client.get_attendee(meeting_id, &attendee_id).await?;
            render::print_object(&attendee, json);
        }
        AttendeesAction::Create { external_user_id } => {
            let input = CreateAttendeeInput { external_user_id };
            let attendee = client.create_attendee(meeting_id, &input).await?;
            render::print_object(&attendee, json);
        }
        AttendeesAction::Delete { attendee_id } => {
            client.delete_attendee(meeting_id, &attendee_id).await?;
            println!("deleted attendee {attendee_id} from meeting {meeting_id}");
        }
    }

    Ok(())
}
