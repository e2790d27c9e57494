//! Message handling of the dashboard.
//!
//! `update` mutates the state for one message and returns the effects to run.
//! Failures never escape: each one becomes a notice in the scope of the form
//! or list that caused it.

use common::responses::ActionReply;

use crate::datasets;
use crate::error::{ClientError, ValidationError};
use crate::notifier::{NoticeKind, NoticeScope};
use crate::recommendations;
use crate::relationships;
use crate::thresholds;

use super::{Command, Dashboard, Msg, Request};

impl Dashboard {
    pub fn update(&mut self, msg: Msg) -> Vec<Command> {
        match msg {
            Msg::Refresh => self.on_tables_changed(),
            Msg::CapabilitiesLoaded(Ok(capabilities)) => {
                self.thresholds.set_capabilities(capabilities);
                Vec::new()
            }
            Msg::CapabilitiesLoaded(Err(err)) if !self.settings.fallback_capabilities.is_empty() => {
                log::warn!("capabilities unavailable, using configured options: {err}");
                self.thresholds
                    .set_capabilities(self.settings.fallback_capabilities.clone());
                Vec::new()
            }
            Msg::CapabilitiesLoaded(Err(err)) => {
                log::warn!("capabilities unavailable: {err}");
                vec![self.report(
                    NoticeScope::Threshold,
                    &err,
                    thresholds::CAPABILITIES_FAILED,
                    thresholds::CAPABILITIES_FAILED,
                )]
            }
            Msg::DatasetsLoaded(result) => {
                let mut commands = Vec::new();
                match result {
                    Ok(datasets) => {
                        self.cache.replace(datasets);
                        self.datasets.sync_with_cache(&self.cache);
                        self.relationships.sync_with_cache(&self.cache);
                        self.thresholds.sync_with_cache(&self.cache);
                    }
                    Err(err) => {
                        log::warn!("dataset refresh failed: {err}");
                        commands.push(self.report(
                            NoticeScope::General,
                            &err,
                            datasets::LIST_FAILED,
                            datasets::LIST_FAILED,
                        ));
                    }
                }
                commands.extend([
                    Command::Fetch(Request::Relationships),
                    Command::Fetch(Request::Thresholds),
                    Command::Fetch(Request::Recommendations),
                ]);
                commands
            }

            Msg::UploadRequested { file_count: 0 } => {
                vec![self.reject(NoticeScope::General, ValidationError::NoFilesSelected)]
            }
            Msg::UploadRequested { .. } => vec![Command::Upload],
            Msg::UploadFinished(Ok(reply)) => {
                let mut commands = vec![self.confirm(NoticeScope::General, reply, datasets::UPLOAD_DONE)];
                commands.extend(self.on_upload_success());
                commands
            }
            Msg::UploadFinished(Err(err)) => vec![self.report(
                NoticeScope::General,
                &err,
                datasets::UPLOAD_FAILED,
                datasets::UPLOAD_UNREACHABLE,
            )],

            Msg::PreviewRequested(id) => {
                self.datasets.open_preview(id);
                vec![Command::Fetch(Request::Preview(id))]
            }
            Msg::PreviewLoaded { id, result: Ok(preview) } => {
                self.datasets.apply_preview(id, preview);
                Vec::new()
            }
            Msg::PreviewLoaded { id, result: Err(err) } => {
                if self.datasets.preview() == &datasets::PreviewPane::Loading(id) {
                    self.datasets.close_preview();
                }
                vec![self.report(
                    NoticeScope::General,
                    &err,
                    datasets::PREVIEW_FAILED,
                    datasets::PREVIEW_UNREACHABLE,
                )]
            }
            Msg::PreviewClosed => {
                self.datasets.close_preview();
                Vec::new()
            }

            Msg::RelationshipSourceDatasetChanged(raw) => {
                self.relationships.source_mut().on_dataset_change(&self.cache, &raw);
                Vec::new()
            }
            Msg::RelationshipSourceColumnChanged(raw) => {
                self.relationships.source_mut().on_column_change(&raw);
                Vec::new()
            }
            Msg::RelationshipTargetDatasetChanged(raw) => {
                self.relationships.target_mut().on_dataset_change(&self.cache, &raw);
                Vec::new()
            }
            Msg::RelationshipTargetColumnChanged(raw) => {
                self.relationships.target_mut().on_column_change(&raw);
                Vec::new()
            }
            Msg::RelationshipSubmitted => match self.relationships.draft().validate() {
                Ok(request) => vec![Command::Fetch(Request::CreateRelationship(request))],
                Err(err) => vec![self.reject(NoticeScope::Relationship, err)],
            },
            Msg::RelationshipCreated(Ok(reply)) => {
                let notice = self.confirm(NoticeScope::Relationship, reply, relationships::ADDED);
                self.relationships.reset_form();
                vec![notice, Command::Fetch(Request::Relationships)]
            }
            Msg::RelationshipCreated(Err(err)) => vec![self.report(
                NoticeScope::Relationship,
                &err,
                relationships::ADD_FAILED,
                relationships::ADD_UNREACHABLE,
            )],
            Msg::RelationshipsLoaded(Ok(items)) => {
                self.relationships.apply_list(&items);
                Vec::new()
            }
            Msg::RelationshipsLoaded(Err(err)) => {
                log::warn!("relationship refresh failed: {err}");
                vec![self.report(
                    NoticeScope::Relationship,
                    &err,
                    relationships::LIST_FAILED,
                    relationships::LIST_FAILED,
                )]
            }

            Msg::ThresholdDatasetChanged(raw) => {
                self.thresholds.on_dataset_change(&self.cache, &raw);
                Vec::new()
            }
            Msg::ThresholdColumnChanged(raw) => {
                let issued = self.thresholds.on_column_change(&raw);
                preview_request(issued)
            }
            Msg::ThresholdFunctionChanged(raw) => {
                let issued = self.thresholds.on_function_change(&raw);
                preview_request(issued)
            }
            Msg::ThresholdOperatorChanged(raw) => {
                self.thresholds.on_operator_change(&raw);
                Vec::new()
            }
            Msg::ThresholdValueChanged(raw) => {
                self.thresholds.on_value_change(&raw);
                Vec::new()
            }
            Msg::ThresholdSubmitted => match self.thresholds.draft().validate() {
                Ok(request) => vec![Command::Fetch(Request::CreateThreshold(request))],
                Err(err) => vec![self.reject(NoticeScope::Threshold, err)],
            },
            Msg::ThresholdCreated(Ok(reply)) => {
                let notice = self.confirm(NoticeScope::Threshold, reply, thresholds::ADDED);
                self.thresholds.reset_form();
                vec![notice, Command::Fetch(Request::Thresholds)]
            }
            Msg::ThresholdCreated(Err(err)) => vec![self.report(
                NoticeScope::Threshold,
                &err,
                thresholds::ADD_FAILED,
                thresholds::ADD_UNREACHABLE,
            )],
            Msg::ThresholdsLoaded(Ok(items)) => {
                self.thresholds.apply_list(&items);
                Vec::new()
            }
            Msg::ThresholdsLoaded(Err(err)) => {
                log::warn!("threshold refresh failed: {err}");
                vec![self.report(
                    NoticeScope::Threshold,
                    &err,
                    thresholds::LIST_FAILED,
                    thresholds::LIST_FAILED,
                )]
            }
            Msg::CurrentValueLoaded { token, query, result } => {
                self.thresholds.apply_current_value(token, &query, result);
                Vec::new()
            }

            Msg::RecommendationsLoaded(Ok(items)) => {
                self.recommendations.apply_list(&items);
                Vec::new()
            }
            Msg::RecommendationsLoaded(Err(err)) => {
                log::warn!("recommendation refresh failed: {err}");
                vec![self.report(
                    NoticeScope::General,
                    &err,
                    recommendations::LIST_FAILED,
                    recommendations::LIST_FAILED,
                )]
            }

            Msg::NoticeExpired { scope, generation } => {
                self.notices.scope_mut(scope).expire(generation);
                Vec::new()
            }
        }
    }

    fn confirm(&mut self, scope: NoticeScope, reply: ActionReply, fallback: &str) -> Command {
        let text = if reply.message.trim().is_empty() {
            fallback.to_string()
        } else {
            reply.message
        };
        self.notify(scope, NoticeKind::Success, text)
    }

    fn reject(&mut self, scope: NoticeScope, err: ValidationError) -> Command {
        self.notify(scope, NoticeKind::Error, err.to_string())
    }

    fn report(&mut self, scope: NoticeScope, err: &ClientError, fallback: &str, unreachable: &str) -> Command {
        let text = err.user_message(fallback, unreachable);
        self.notify(scope, NoticeKind::Error, text)
    }
}

fn preview_request(issued: Option<(u64, common::requests::CurrentValueQuery)>) -> Vec<Command> {
    issued
        .map(|(token, query)| Command::Fetch(Request::CurrentValue { token, query }))
        .into_iter()
        .collect()
}
