//! Checkout flow: validate, price, deliver, record

use std::sync::Arc;

use chrono::Utc;

use crate::pricing::calculate_totals;
use crate::store::Store;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, is_valid_card_number,
    is_valid_cvv, is_valid_upi, validate_required_text,
};
use crate::utils::{AppError, AppResult};

use super::order::{CustomerDetails, Order, PaymentDetails, next_order_id};
use super::transport::{LocalLogTransport, OrderTransport};

/// Drives order submission end to end
///
/// All-or-nothing: nothing is persisted and the cart is untouched
/// until the transport accepts the order.
#[derive(Clone)]
pub struct CheckoutManager {
    store: Store,
    transport: Arc<dyn OrderTransport>,
}

impl std::fmt::Debug for CheckoutManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutManager")
            .field("store", &self.store)
            .field("transport", &"<OrderTransport>")
            .finish()
    }
}

impl CheckoutManager {
    pub fn new(store: Store, transport: Arc<dyn OrderTransport>) -> Self {
        Self { store, transport }
    }

    /// Local-only checkout; orders land in the store's log and nowhere
    /// else
    pub fn local(store: Store) -> Self {
        Self::new(store, Arc::new(LocalLogTransport))
    }

    /// Recorded orders, oldest first
    pub fn orders(&self) -> AppResult<Vec<Order>> {
        Ok(self.store.orders()?)
    }

    /// Submit the current cart as an order
    ///
    /// Checks run in form order and the first failure is reported:
    /// cart must not be empty, customer fields must be filled,
    /// payment details must pass their method's checks. On success the
    /// order is delivered, appended to the log and the cart cleared;
    /// the recorded order is returned so the caller can render the
    /// confirmation.
    pub async fn submit_order(
        &self,
        customer: &CustomerDetails,
        payment: &PaymentDetails,
    ) -> AppResult<Order> {
        let items = self.store.cart()?;
        if items.is_empty() {
            return Err(AppError::validation(
                "Your cart is empty. Please add items before checkout.",
            ));
        }
        validate_customer(customer)?;
        validate_payment(payment)?;

        let catalog = self.store.catalog()?;
        let totals = calculate_totals(&items, &catalog);
        let order = Order {
            id: next_order_id(),
            date: Utc::now(),
            items,
            customer: customer.clone(),
            payment_method: payment.method(),
            subtotal: totals.subtotal,
            tax: totals.tax,
            delivery: totals.delivery,
            total: totals.total,
        };

        if let Err(err) = self.transport.deliver(&order).await {
            tracing::warn!("Order {} delivery failed: {err}", order.id);
            return Err(err);
        }

        self.store.append_order(&order)?;
        self.store.set_cart(&[])?;
        tracing::info!(
            "Order {} placed: {} line(s), total {:.2}",
            order.id,
            order.items.len(),
            order.total
        );
        Ok(order)
    }
}

fn validate_customer(customer: &CustomerDetails) -> AppResult<()> {
    let filled = [
        customer.name.as_str(),
        customer.email.as_str(),
        customer.phone.as_str(),
        customer.address.as_str(),
    ]
    .iter()
    .all(|field| !field.trim().is_empty());
    if !filled {
        return Err(AppError::validation("Please fill in all required fields"));
    }

    validate_required_text(&customer.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&customer.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&customer.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&customer.address, "address", MAX_ADDRESS_LEN)?;
    Ok(())
}

fn validate_payment(payment: &PaymentDetails) -> AppResult<()> {
    match payment {
        PaymentDetails::Cod => Ok(()),
        PaymentDetails::Card {
            number,
            holder,
            expiry,
            cvv,
        } => {
            let filled = [number, holder, expiry, cvv]
                .iter()
                .all(|field| !field.trim().is_empty());
            if !filled {
                return Err(AppError::validation("Please fill in all card details"));
            }
            if !is_valid_card_number(number) {
                return Err(AppError::validation(
                    "Please enter a valid 16-digit card number",
                ));
            }
            if !is_valid_cvv(cvv) {
                return Err(AppError::validation(
                    "Please enter a valid CVV (3 or 4 digits)",
                ));
            }
            Ok(())
        }
        PaymentDetails::Upi { id } => {
            if !is_valid_upi(id) {
                return Err(AppError::validation(
                    "Please enter a valid UPI ID (e.g., name@upi)",
                ));
            }
            Ok(())
        }
    }
}
