//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod account;
pub mod reimbursement;

#[allow(unused_imports)]
pub use account::{ActiveModel as AccountActiveModel, Entity as AccountEntity, Model as AccountModel};
#[allow(unused_imports)]
pub use reimbursement::{
    ActiveModel as ReimbursementActiveModel, Entity as ReimbursementEntity,
    Model as ReimbursementModel,
};
