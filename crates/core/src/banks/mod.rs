//! Banks module - bank/securities account records scoped to a user.

mod banks_model;
mod banks_service;
mod banks_traits;

pub use banks_model::{Bank, BankUpdate, NewBank};
pub use banks_service::BankService;
pub use banks_traits::{BankRepositoryTrait, BankServiceTrait};
