//! View-state controller.
//!
//! Drives the webapp's screens from the launch context and the raffle API:
//! parse the init payload, log in, fetch status, then route to a terminal
//! screen. Errors from the flows are caught and logged here; they surface
//! as screen states, never as bubbled `Result`s or panics.

use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::api::client::RaffleClient;
use crate::auth::session::SessionManager;
use crate::auth::store::TokenStore;
use crate::config::AppConfig;
use crate::launch::{self, LaunchContext};
use crate::models::raffle::RaffleSnapshot;

/// What the user is looking at.
///
/// `LoadFailed` is deliberately distinct from `Loading`: a failed startup
/// renders a retry-capable error screen, not an endless spinner.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// No parsable raffle identifier in the init payload. Terminal.
    NotFound,
    /// Startup flow in progress.
    Loading,
    /// Login or status fetch failed; `retry()` re-runs the flow.
    LoadFailed { reason: String },
    /// The raffle has ended. Terminal.
    Finished(RaffleSnapshot),
    /// The raffle is running; joining may be available.
    Active(RaffleSnapshot),
}

/// Single-flow controller tying the session, the API client, and the
/// current screen together.
pub struct AppController {
    session: SessionManager,
    client: RaffleClient,
    init_data: String,
    launch: Option<LaunchContext>,
    screen: Screen,
    started: bool,
    join_in_flight: bool,
}

impl AppController {
    /// Build a controller from configuration, token storage, and the raw
    /// init payload (empty string when the host provided none).
    pub fn new(config: &AppConfig, store: Arc<dyn TokenStore>, init_data: impl Into<String>) -> Self {
        let init_data = init_data.into();
        let launch = launch::parse_init_data(&init_data);
        let http = Client::new();
        let session = SessionManager::new(
            http.clone(),
            config.api_base_url.clone(),
            Arc::clone(&store),
        );
        let client = RaffleClient::new(
            http,
            config.api_base_url.clone(),
            store,
            session.clone(),
        );
        Self {
            session,
            client,
            init_data,
            launch,
            screen: Screen::Loading,
            started: false,
            join_in_flight: false,
        }
    }

    /// The current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The parsed launch context, if the init payload carried one.
    pub fn launch(&self) -> Option<LaunchContext> {
        self.launch
    }

    /// Whether the join action would do anything right now.
    pub fn can_join(&self) -> bool {
        match &self.screen {
            Screen::Active(snapshot) => {
                snapshot.all_mandatory_subscribed()
                    && !snapshot.is_participating
                    && !self.join_in_flight
            }
            _ => false,
        }
    }

    /// Run the startup flow: login, fetch status, route to a screen.
    ///
    /// Runs at most once per controller; a duplicate invocation (e.g. from
    /// a double-mounting host) is a logged no-op. An explicit `retry()` is
    /// the only way to run the flow again.
    pub async fn initialize(&mut self) {
        if self.started {
            debug!("startup already ran, ignoring duplicate invocation");
            return;
        }
        self.started = true;
        self.run_startup().await;
    }

    /// Re-run the startup flow after a failure. Only meaningful on the
    /// load-failed screen; anywhere else it is a logged no-op.
    pub async fn retry(&mut self) {
        if !matches!(self.screen, Screen::LoadFailed { .. }) {
            debug!("retry ignored outside the load-failed screen");
            return;
        }
        info!("retrying startup");
        self.run_startup().await;
    }

    async fn run_startup(&mut self) {
        let Some(launch) = self.launch else {
            info!("no raffle identifier in the init payload");
            self.screen = Screen::NotFound;
            return;
        };
        self.screen = Screen::Loading;

        if let Err(err) = self.session.login(&self.init_data).await {
            error!(error = %err, "login failed during startup");
            self.screen = Screen::LoadFailed {
                reason: err.to_string(),
            };
            return;
        }

        match self
            .client
            .fetch_status(launch.raffle_id, launch.preview)
            .await
        {
            Ok(snapshot) => {
                // A finished raffle wins over everything else in the snapshot
                self.screen = if snapshot.is_finished {
                    Screen::Finished(snapshot)
                } else {
                    Screen::Active(snapshot)
                };
            }
            Err(err) => {
                error!(error = %err, "raffle status fetch failed during startup");
                self.screen = Screen::LoadFailed {
                    reason: err.to_string(),
                };
            }
        }
    }

    /// Attempt to join the raffle.
    ///
    /// No-op unless the active screen is showing, and a no-op while a
    /// previous attempt is outstanding or once the user participates. On
    /// `success == true` the snapshot is patched in place from the join
    /// response; there is no re-fetch.
    pub async fn join(&mut self) {
        if self.join_in_flight {
            debug!("join already in flight, ignoring");
            return;
        }
        match &self.screen {
            Screen::Active(snapshot) => {
                if snapshot.is_participating {
                    debug!("already participating, nothing to do");
                    return;
                }
            }
            _ => {
                debug!("join is only available on the active screen");
                return;
            }
        }
        let Some(launch) = self.launch else {
            // Active screen implies a launch context; nothing to do without one
            debug!("join without a launch context");
            return;
        };

        self.join_in_flight = true;
        let outcome = self.client.participate(launch.raffle_id).await;
        self.join_in_flight = false;

        match outcome {
            Ok(outcome) if outcome.success => {
                info!(
                    participants = outcome.participants_count,
                    "joined the raffle"
                );
                if let Screen::Active(snapshot) = &mut self.screen {
                    snapshot.is_participating = true;
                    snapshot.participants_count = outcome.participants_count;
                }
            }
            Ok(outcome) => {
                warn!(message = %outcome.message, "participation rejected by the server");
            }
            Err(err) => {
                error!(error = %err, "participation request failed");
            }
        }
    }
}
