//! External collaborators: notifications, commerce, payments, social feed.
//!
//! Each collaborator is a trait with a real implementation selected when its
//! credentials are configured and a demo implementation otherwise. Selection
//! happens once at startup; the rest of the application only sees the trait
//! objects.

use std::sync::Arc;

use crate::config::AppConfig;

pub mod commerce;
pub mod feed;
pub mod notify;
pub mod payments;

use commerce::{Commerce, DemoCommerce, ShopifyCommerce};
use feed::{DemoFeed, FeedSource, InstagramFeed};
use notify::{DemoNotifier, Notifier, ResendNotifier};
use payments::{DemoGateway, PaymentGateway, StripeGateway};

pub struct Collaborators {
    pub notifier: Arc<dyn Notifier>,
    pub commerce: Arc<dyn Commerce>,
    pub payments: Arc<dyn PaymentGateway>,
    pub feed: Arc<dyn FeedSource>,
}

impl Collaborators {
    /// Wire up each collaborator from its config section. Unconfigured or
    /// unbuildable collaborators degrade to their demo variants rather than
    /// aborting startup.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let notifier: Arc<dyn Notifier> = match &config.notify {
            Some(notify) => {
                tracing::info!("notifier: resend");
                Arc::new(ResendNotifier::new(notify, config.business.clone()))
            }
            None => {
                tracing::info!("notifier: demo (no credentials)");
                Arc::new(DemoNotifier)
            }
        };

        let commerce: Arc<dyn Commerce> = match &config.shopify {
            Some(shopify) => match ShopifyCommerce::new(shopify, &config.timeouts) {
                Ok(client) => {
                    tracing::info!(domain = %shopify.domain, "commerce: shopify");
                    Arc::new(client)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "commerce: client build failed, using demo");
                    Arc::new(DemoCommerce::new())
                }
            },
            None => {
                tracing::info!("commerce: demo (no credentials)");
                Arc::new(DemoCommerce::new())
            }
        };

        let payments: Arc<dyn PaymentGateway> = match &config.stripe {
            Some(stripe) => match StripeGateway::new(stripe, &config.timeouts) {
                Ok(client) => {
                    tracing::info!("payments: stripe");
                    Arc::new(client)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "payments: client build failed, using demo");
                    Arc::new(DemoGateway)
                }
            },
            None => {
                tracing::info!("payments: demo (no credentials)");
                Arc::new(DemoGateway)
            }
        };

        let feed: Arc<dyn FeedSource> = match &config.instagram {
            Some(instagram) => match InstagramFeed::new(instagram, &config.timeouts) {
                Ok(client) => {
                    tracing::info!("feed: instagram");
                    Arc::new(client)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "feed: client build failed, using demo");
                    Arc::new(DemoFeed)
                }
            },
            None => {
                tracing::info!("feed: demo (no credentials)");
                Arc::new(DemoFeed)
            }
        };

        Self { notifier, commerce, payments, feed }
    }
}
