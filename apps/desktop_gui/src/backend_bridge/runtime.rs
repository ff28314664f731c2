//! Backend worker: a dedicated thread with its own tokio runtime that owns the
//! edit session and answers every command with a fresh snapshot.

use std::thread;

use client_core::{ClientSettings, CompanyStore, EditSession, HttpCompanyStore};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use tracing::{debug, error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    settings: ClientSettings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Backend worker failed to start: {err}"
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let mut session = EditSession::new(HttpCompanyStore::from_settings(&settings));
            let _ = ui_tx.try_send(UiEvent::Info(backend_notice(&settings.api_base_url)));

            // Initial load, as on first mount.
            let _ = session.refresh().await;
            publish_snapshot(&ui_tx, &session);

            while let Ok(cmd) = cmd_rx.recv() {
                apply_command(&mut session, cmd).await;
                publish_snapshot(&ui_tx, &session);
            }
            info!("ui command queue closed; backend worker exiting");
        });
    });
}

fn backend_notice(api_base_url: &str) -> String {
    format!("Using backend {api_base_url}")
}

/// Runs one UI intent against the session. Failures were already logged by the
/// session and leave it unchanged, so they are dropped here.
pub async fn apply_command<S: CompanyStore>(session: &mut EditSession<S>, cmd: BackendCommand) {
    debug!(command = cmd.name(), "applying ui command");
    match cmd {
        BackendCommand::Refresh => {
            let _ = session.refresh().await;
        }
        BackendCommand::StartEdit { company } => session.start_edit(company),
        BackendCommand::CancelEdit => session.cancel_edit(),
        BackendCommand::Submit { form } => {
            session.set_form(form);
            let _ = session.submit().await;
        }
        BackendCommand::Delete { company_id } => {
            let _ = session.remove(company_id).await;
        }
    }
}

fn publish_snapshot<S: CompanyStore>(ui_tx: &Sender<UiEvent>, session: &EditSession<S>) {
    match ui_tx.try_send(UiEvent::SessionChanged(session.snapshot())) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            warn!("backend->ui event queue is full; dropping snapshot");
        }
        Err(TrySendError::Disconnected(_)) => {
            debug!("ui event queue disconnected");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use client_core::{CompanyForm, StoreError};
    use crossbeam_channel::bounded;
    use shared::domain::{Company, CompanyDraft, CompanyId};

    use super::*;

    #[derive(Default)]
    struct RecordingStore {
        companies: Mutex<Vec<Company>>,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingStore {
        fn record(&self, call: impl Into<String>) {
            self.calls.lock().expect("calls").push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("calls").clone()
        }
    }

    #[async_trait]
    impl CompanyStore for RecordingStore {
        async fn list(&self) -> Result<Vec<Company>, StoreError> {
            self.record("list");
            Ok(self.companies.lock().expect("companies").clone())
        }

        async fn get(&self, company_id: CompanyId) -> Result<Company, StoreError> {
            self.record(format!("get {company_id}"));
            Err(StoreError::RequestFailed {
                status: 404,
                body: String::new(),
            })
        }

        async fn create(&self, draft: &CompanyDraft) -> Result<Company, StoreError> {
            self.record(format!("create {}", draft.name));
            let mut companies = self.companies.lock().expect("companies");
            let company = Company {
                id: CompanyId(companies.len() as i64 + 1),
                name: draft.name.clone(),
                location: draft.location.clone(),
            };
            companies.push(company.clone());
            Ok(company)
        }

        async fn update(
            &self,
            company_id: CompanyId,
            draft: &CompanyDraft,
        ) -> Result<Company, StoreError> {
            self.record(format!("update {company_id}"));
            Ok(Company {
                id: company_id,
                name: draft.name.clone(),
                location: draft.location.clone(),
            })
        }

        async fn delete(&self, company_id: CompanyId) -> Result<(), StoreError> {
            self.record(format!("delete {company_id}"));
            Err(StoreError::RequestFailed {
                status: 500,
                body: "boom".into(),
            })
        }
    }

    #[tokio::test]
    async fn submit_command_uses_form_from_ui() {
        let store = Arc::new(RecordingStore::default());
        let mut session = EditSession::new(store.clone());

        apply_command(
            &mut session,
            BackendCommand::Submit {
                form: CompanyForm {
                    name: "Acme".into(),
                    location: "NYC".into(),
                },
            },
        )
        .await;

        assert_eq!(store.calls(), vec!["create Acme", "list"]);
        assert_eq!(session.companies().len(), 1);
        assert!(session.form().is_empty());
    }

    #[tokio::test]
    async fn edit_commands_do_not_touch_the_store() {
        let store = Arc::new(RecordingStore::default());
        let mut session = EditSession::new(store.clone());
        let company = Company {
            id: CompanyId(4),
            name: "Acme".into(),
            location: "NYC".into(),
        };

        apply_command(&mut session, BackendCommand::StartEdit { company }).await;
        assert_eq!(session.form().name, "Acme");
        apply_command(&mut session, BackendCommand::CancelEdit).await;

        assert!(session.editing().is_none());
        assert!(session.form().is_empty());
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_delete_is_swallowed_without_relist() {
        let store = Arc::new(RecordingStore::default());
        let mut session = EditSession::new(store.clone());

        apply_command(
            &mut session,
            BackendCommand::Delete {
                company_id: CompanyId(9),
            },
        )
        .await;

        assert_eq!(store.calls(), vec!["delete 9"]);
    }

    #[test]
    fn startup_notice_does_not_claim_a_connection() {
        let notice = backend_notice("http://localhost:8000");
        assert_eq!(notice, "Using backend http://localhost:8000");
        assert!(!notice.contains("Connected"));
    }

    #[tokio::test]
    async fn snapshots_are_published_to_ui_queue() {
        let store = Arc::new(RecordingStore::default());
        let mut session = EditSession::new(store);
        apply_command(&mut session, BackendCommand::Refresh).await;

        let (ui_tx, ui_rx) = bounded(1);
        publish_snapshot(&ui_tx, &session);
        // A full queue drops the snapshot instead of blocking the worker.
        publish_snapshot(&ui_tx, &session);

        match ui_rx.try_recv().expect("event") {
            UiEvent::SessionChanged(snapshot) => assert_eq!(snapshot, session.snapshot()),
            UiEvent::Info(message) => panic!("unexpected info: {message}"),
        }
        assert!(ui_rx.try_recv().is_err());
    }
}
