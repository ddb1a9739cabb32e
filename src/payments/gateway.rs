pub mod simulated_gateway;
#[cfg(test)]
pub mod scripted_gateway;
