//! Interactive Brokers accounts and their import audit log.

mod ib_accounts_model;
mod ib_accounts_service;
mod ib_accounts_traits;

pub use ib_accounts_model::{
    IbAccount, IbAccountUpdate, ImportLog, ImportStatus, NewIbAccount, NewImportLog,
};
pub use ib_accounts_service::IbAccountService;
pub use ib_accounts_traits::{IbAccountRepositoryTrait, IbAccountServiceTrait};
