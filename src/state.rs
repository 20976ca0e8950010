//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the resolved config, the four external collaborators as trait
//! objects, the scheduler, and two session maps: booking wizards and chat
//! sessions, both keyed by session id. Chat sessions are individually
//! mutex-wrapped so one visitor's typing delay serializes only their own
//! conversation.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::integrations::commerce::Commerce;
use crate::integrations::feed::FeedSource;
use crate::integrations::notify::Notifier;
use crate::integrations::payments::PaymentGateway;
use crate::integrations::Collaborators;
use crate::services::chatbot::ChatSession;
use crate::services::scheduling::Scheduler;
use crate::services::wizard::BookingWizard;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub notifier: Arc<dyn Notifier>,
    pub commerce: Arc<dyn Commerce>,
    pub payments: Arc<dyn PaymentGateway>,
    pub feed: Arc<dyn FeedSource>,
    pub scheduler: Arc<dyn Scheduler>,
    pub wizards: Arc<RwLock<HashMap<Uuid, BookingWizard>>>,
    pub chats: Arc<RwLock<HashMap<Uuid, Arc<Mutex<ChatSession>>>>>,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: AppConfig,
        collaborators: Collaborators,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            notifier: collaborators.notifier,
            commerce: collaborators.commerce,
            payments: collaborators.payments,
            feed: collaborators.feed,
            scheduler,
            wizards: Arc::new(RwLock::new(HashMap::new())),
            chats: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::AppState;
    use crate::config::AppConfig;
    use crate::integrations::commerce::DemoCommerce;
    use crate::integrations::feed::DemoFeed;
    use crate::integrations::notify::{DemoNotifier, Notification, Notifier, NotifyError};
    use crate::integrations::payments::DemoGateway;
    use crate::services::scheduling::FixtureScheduler;

    /// Notifier double that records every send and can be told to fail.
    pub struct RecordingNotifier {
        pub sent: Mutex<Vec<Notification>>,
        pub fail: bool,
    }

    impl RecordingNotifier {
        #[must_use]
        pub fn new(fail: bool) -> Self {
            Self { sent: Mutex::new(Vec::new()), fail }
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify_business(&self, n: &Notification) -> Result<String, NotifyError> {
            if self.fail {
                return Err(NotifyError::Delivery("simulated outage".to_owned()));
            }
            self.sent.lock().await.push(n.clone());
            Ok("recorded_business".to_owned())
        }

        async fn confirm_client(&self, n: &Notification) -> Result<String, NotifyError> {
            if self.fail {
                return Err(NotifyError::Delivery("simulated outage".to_owned()));
            }
            self.sent.lock().await.push(n.clone());
            Ok("recorded_client".to_owned())
        }
    }

    #[must_use]
    pub fn demo_state() -> AppState {
        state_with_notifier(Arc::new(DemoNotifier))
    }

    #[must_use]
    pub fn state_with_notifier(notifier: Arc<dyn Notifier>) -> AppState {
        AppState {
            config: Arc::new(AppConfig::default()),
            notifier,
            commerce: Arc::new(DemoCommerce::new()),
            payments: Arc::new(DemoGateway),
            feed: Arc::new(DemoFeed),
            scheduler: Arc::new(FixtureScheduler),
            wizards: Arc::new(tokio::sync::RwLock::new(std::collections::HashMap::new())),
            chats: Arc::new(tokio::sync::RwLock::new(std::collections::HashMap::new())),
        }
    }
}
