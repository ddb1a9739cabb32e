use std::sync::Mutex;
use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::core::library::{LibraryError, LibraryResult};
use crate::payments::domain::{PaymentGateway, PaymentResponse, RefundResponse};

// Scripted answers a test double gives to every call.
#[derive(Debug, Clone)]
pub(crate) enum Scripted {
    Approve {
        transaction_id: String,
        message: String,
    },
    Decline {
        message: String,
    },
    Disconnect,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PaymentCall {
    pub patron_id: String,
    pub amount: Decimal,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RefundCall {
    pub transaction_id: String,
    pub amount: Decimal,
}

// ScriptedPaymentGateway records every call so tests can assert whether the processor was hit.
#[derive(Debug)]
pub(crate) struct ScriptedPaymentGateway {
    payment: Scripted,
    refund: Scripted,
    payments: Mutex<Vec<PaymentCall>>,
    refunds: Mutex<Vec<RefundCall>>,
}

impl ScriptedPaymentGateway {
    pub(crate) fn new(payment: Scripted, refund: Scripted) -> Self {
        Self {
            payment,
            refund,
            payments: Mutex::new(vec![]),
            refunds: Mutex::new(vec![]),
        }
    }

    pub(crate) fn approving(transaction_id: &str, message: &str) -> Self {
        Self::new(Scripted::Approve { transaction_id: transaction_id.to_string(), message: message.to_string() },
                  Scripted::Approve { transaction_id: transaction_id.to_string(), message: message.to_string() })
    }

    pub(crate) fn declining(message: &str) -> Self {
        Self::new(Scripted::Decline { message: message.to_string() }, Scripted::Decline { message: message.to_string() })
    }

    pub(crate) fn disconnected() -> Self {
        Self::new(Scripted::Disconnect, Scripted::Disconnect)
    }

    pub(crate) fn payment_calls(&self) -> Vec<PaymentCall> {
        self.payments.lock().expect("payments lock").clone()
    }

    pub(crate) fn refund_calls(&self) -> Vec<RefundCall> {
        self.refunds.lock().expect("refunds lock").clone()
    }
}

fn connection_error() -> LibraryError {
    LibraryError::unavailable("connection refused by payment processor", Some("ConnectionError".to_string()), false)
}

#[async_trait]
impl PaymentGateway for ScriptedPaymentGateway {
    async fn process_payment(&self, patron_id: &str, amount: Decimal, description: &str) -> LibraryResult<PaymentResponse> {
        self.payments.lock().expect("payments lock").push(PaymentCall {
            patron_id: patron_id.to_string(),
            amount,
            description: description.to_string(),
        });
        match &self.payment {
            Scripted::Approve { transaction_id, message } => Ok(PaymentResponse::Approved {
                transaction_id: transaction_id.to_string(),
                message: message.to_string(),
            }),
            Scripted::Decline { message } => Ok(PaymentResponse::Declined { message: message.to_string() }),
            Scripted::Disconnect => Err(connection_error()),
        }
    }

    async fn refund_payment(&self, transaction_id: &str, amount: Decimal) -> LibraryResult<RefundResponse> {
        self.refunds.lock().expect("refunds lock").push(RefundCall {
            transaction_id: transaction_id.to_string(),
            amount,
        });
        match &self.refund {
            Scripted::Approve { message, .. } => Ok(RefundResponse::Refunded { message: message.to_string() }),
            Scripted::Decline { message } => Ok(RefundResponse::Declined { message: message.to_string() }),
            Scripted::Disconnect => Err(connection_error()),
        }
    }
}
