use crate::core::domain::Configuration;
use crate::payments::domain::PaymentGateway;
use crate::payments::gateway::simulated_gateway::SimulatedPaymentGateway;

pub(crate) fn create_payment_gateway(config: &Configuration) -> Box<dyn PaymentGateway> {
    Box::new(SimulatedPaymentGateway::new(config.payment_limit))
}
