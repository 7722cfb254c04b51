use crate::handlers::after_save::to_params;
use crate::handlers::{EventHandler, mismatched_event};
use crate::{SyncContext, SyncError};

use ms_core::{
    AfterDeleteEvent, DeleteUsersPayload, EventKind, EventOutcome, MessageLevel, RemoteFunction,
    UserEvent,
};

use async_trait::async_trait;
use log::{error, info};

/// Deletes the linked Moodle user after the host deleted a user.
pub struct AfterDeleteHandler;

#[async_trait]
impl EventHandler for AfterDeleteHandler {
    async fn handle(&self, ctx: &SyncContext, event: UserEvent) -> EventOutcome {
        match event {
            UserEvent::AfterDelete(event) => handle_after_delete(ctx, event).await,
            other => mismatched_event(EventKind::UserAfterDelete, &other),
        }
    }
}

pub async fn handle_after_delete(ctx: &SyncContext, event: AfterDeleteEvent) -> EventOutcome {
    let mut outcome = EventOutcome::new();
    let local_id = event.user.id;

    if !event.success || local_id == 0 {
        return outcome;
    }

    let remote_id = match ctx.remote_id_for(local_id).await {
        Ok(remote_id) => remote_id,
        Err(SyncError::MissingMapping { .. }) => {
            let message = format!("User id {} has no linked Moodle user", local_id);
            info!("{}", message);
            outcome.push_message(MessageLevel::Notice, message);
            return outcome;
        }
        Err(err) => {
            error!("Mapping lookup failed for local user {}: {}", local_id, err);
            outcome.push_message(
                MessageLevel::Error,
                format!("User id {} could not be deleted from Moodle", local_id),
            );
            return outcome;
        }
    };

    let payload = DeleteUsersPayload {
        userids: vec![remote_id],
    };
    let result = match to_params(&payload) {
        Ok(params) => ctx.moodle.request(RemoteFunction::DeleteUsers, &params).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        error!(
            "Moodle user {} was not deleted for local user {}: {}",
            remote_id, local_id, err
        );
        outcome.push_message(
            MessageLevel::Error,
            format!("User id {} could not be deleted from Moodle", local_id),
        );
        return outcome;
    }

    if let Err(err) = ctx.identities.remove(&[local_id]).await {
        error!(
            "Moodle user {} deleted but link to local user {} was not removed: {}",
            remote_id, local_id, err
        );
        outcome.push_message(
            MessageLevel::Error,
            format!(
                "User id {} was deleted from Moodle but its link could not be removed",
                local_id
            ),
        );
        return outcome;
    }

    let message = format!(
        "User id {} has been deleted from Moodle too (id {})",
        local_id, remote_id
    );
    info!("{}", message);
    outcome.push_message(MessageLevel::Notice, message);

    outcome
}
