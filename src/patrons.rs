pub mod command;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod factory;

pub const PATRON_ID_LEN: usize = 6;
pub const INVALID_PATRON_MESSAGE: &str = "Invalid patron ID. Must be exactly 6 digits.";

// patron ids are library card numbers of exactly six ascii digits
pub fn is_valid_patron_id(patron_id: &str) -> bool {
    patron_id.len() == PATRON_ID_LEN && patron_id.chars().all(|c| c.is_ascii_digit())
}
