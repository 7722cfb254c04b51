use crate::handlers::{EventHandler, mismatched_event};
use crate::{SyncContext, SyncError};

use ms_core::{
    AfterSaveEvent, CreatedRemoteUser, EventKind, EventOutcome, IdentityPair, LocalUser,
    MessageLevel, NewRemoteUser, RemoteFunction, RemoteUserUpdate, UserEvent, UsersPayload,
};
use ms_moodle::{MoodleError, MoodleResult};

use async_trait::async_trait;
use log::{error, info, warn};
use serde::Serialize;
use serde_json::Value;

/// Creates or updates the linked Moodle user after the host stored a user.
pub struct AfterSaveHandler;

#[async_trait]
impl EventHandler for AfterSaveHandler {
    async fn handle(&self, ctx: &SyncContext, event: UserEvent) -> EventOutcome {
        match event {
            UserEvent::AfterSave(event) => handle_after_save(ctx, event).await,
            other => mismatched_event(EventKind::UserAfterSave, &other),
        }
    }
}

pub async fn handle_after_save(ctx: &SyncContext, event: AfterSaveEvent) -> EventOutcome {
    let mut outcome = EventOutcome::new();

    if !event.success {
        return outcome;
    }

    if event.is_new {
        create_remote_user(ctx, &event.user, &mut outcome).await;
    } else {
        update_remote_user(ctx, &event.user, &mut outcome).await;
    }

    outcome
}

async fn create_remote_user(ctx: &SyncContext, user: &LocalUser, outcome: &mut EventOutcome) {
    let created = match to_params(&UsersPayload::single(NewRemoteUser::from(user))) {
        Ok(params) => ctx
            .moodle
            .request(RemoteFunction::CreateUsers, &params)
            .await
            .and_then(first_created_user),
        Err(err) => Err(err),
    };

    let remote_user = match created {
        Ok(remote_user) => remote_user,
        Err(err) => {
            error!(
                "Moodle user was not created for local user {}: {}",
                user.id, err
            );
            outcome.push_message(
                MessageLevel::Error,
                format!("Moodle user was not created for user {}", user.username),
            );
            return;
        }
    };

    let pair = IdentityPair::new(user.id, remote_user.id);
    match ctx.identities.add(pair).await {
        Ok(()) => info!(
            "Moodle user {} created for local user {}",
            remote_user.id, user.id
        ),
        Err(err) => {
            error!(
                "Moodle user {} created but link to local user {} was not stored: {}",
                remote_user.id, user.id, err
            );
            outcome.push_message(
                MessageLevel::Error,
                format!(
                    "Moodle user {} was created but could not be linked to user {}",
                    remote_user.id, user.username
                ),
            );
        }
    }
}

async fn update_remote_user(ctx: &SyncContext, user: &LocalUser, outcome: &mut EventOutcome) {
    let remote_id = match ctx.remote_id_for(user.id).await {
        Ok(remote_id) => remote_id,
        Err(SyncError::MissingMapping { .. }) => {
            warn!(
                "Local user {} has no linked Moodle user; update skipped",
                user.id
            );
            return;
        }
        Err(err) => {
            error!("Mapping lookup failed for local user {}: {}", user.id, err);
            outcome.push_message(
                MessageLevel::Error,
                format!("Moodle user for {} could not be updated", user.username),
            );
            return;
        }
    };

    let result = match to_params(&UsersPayload::single(RemoteUserUpdate::from_local(
        remote_id, user,
    ))) {
        Ok(params) => ctx.moodle.request(RemoteFunction::UpdateUsers, &params).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => info!(
            "Moodle user {} updated for local user {}",
            remote_id, user.id
        ),
        Err(err) => {
            error!(
                "Moodle user {} was not updated for local user {}: {}",
                remote_id, user.id, err
            );
            outcome.push_message(
                MessageLevel::Error,
                format!("Moodle user for {} could not be updated", user.username),
            );
        }
    }
}

pub(crate) fn to_params<T: Serialize>(payload: &T) -> MoodleResult<Value> {
    Ok(serde_json::to_value(payload)?)
}

/// `core_user_create_users` answers with `[{id, username}]`.
fn first_created_user(response: Value) -> MoodleResult<CreatedRemoteUser> {
    let users: Vec<CreatedRemoteUser> = serde_json::from_value(response)?;

    users
        .into_iter()
        .next()
        .ok_or_else(|| MoodleError::unexpected("create_users returned no users"))
}
