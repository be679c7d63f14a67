//! Order delivery seam
//!
//! Checkout hands the finished order to an [`OrderTransport`]. The
//! storefront runs fully local by default; deployments with a backend
//! swap in [`HttpOrderTransport`] without touching the checkout flow.

use async_trait::async_trait;

use crate::services::http::{build_client, read_server_message};
use crate::utils::AppResult;

use super::order::Order;

/// Where placed orders go before they are recorded locally
#[async_trait]
pub trait OrderTransport: Send + Sync {
    /// Deliver the order; an error aborts the checkout with nothing
    /// recorded
    async fn deliver(&self, order: &Order) -> AppResult<()>;
}

/// No network; the store's order log is the only record
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalLogTransport;

#[async_trait]
impl OrderTransport for LocalLogTransport {
    async fn deliver(&self, order: &Order) -> AppResult<()> {
        tracing::info!(
            "Order {} recorded locally (total {:.2})",
            order.id,
            order.total
        );
        Ok(())
    }
}

/// POSTs the order to the storefront backend
#[derive(Debug, Clone)]
pub struct HttpOrderTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderTransport {
    pub fn new(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl OrderTransport for HttpOrderTransport {
    async fn deliver(&self, order: &Order) -> AppResult<()> {
        let response = self
            .client
            .post(format!("{}/submit-order", self.base_url))
            .json(order)
            .send()
            .await?;
        let message = read_server_message(response).await?;
        tracing::info!("Order {} accepted by backend: {}", order.id, message);
        Ok(())
    }
}
