//! QuickBooks entity types.
//!
//! One module per entity, plus [`common`] for the wire types they share.
//! Every entity implements [`QbEntity`](crate::rest::QbEntity); the mutation
//! traits are implemented where the API allows them:
//!
//! | entity | create | update | delete | void |
//! |---|---|---|---|---|
//! | [`Account`] | ✓ | ✓ | | |
//! | [`Attachable`] | ✓ | ✓ | ✓ | |
//! | [`Bill`] | ✓ | ✓ | ✓ | |
//! | [`Class`] | ✓ | ✓ | | |
//! | [`CompanyInfo`] | | ✓ | | |
//! | [`CreditMemo`] | ✓ | ✓ | ✓ | |
//! | [`Customer`] | ✓ | ✓ | | |
//! | [`CustomerType`] | | | | |
//! | [`Deposit`] | ✓ | ✓ | ✓ | |
//! | [`Employee`] | ✓ | ✓ | | |
//! | [`Estimate`] | ✓ | ✓ | ✓ | ✓ |
//! | [`Invoice`] | ✓ | ✓ | ✓ | ✓ |
//! | [`Item`] | ✓ | ✓ | | |
//! | [`JournalEntry`] | ✓ | ✓ | ✓ | |
//! | [`Payment`] | ✓ | ✓ | ✓ | ✓ |
//! | [`Purchase`] | ✓ | ✓ | ✓ | |
//! | [`Vendor`] | ✓ | ✓ | | |
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::rest::{QbEntity, Updatable};
//! use quickbooks_api::rest::resources::Invoice;
//!
//! let invoice = Invoice::find_by_id(&client, "130").await?;
//!
//! let patch = Invoice {
//!     id: invoice.id.clone(),
//!     private_note: Some("Net 30 agreed by phone".to_string()),
//!     ..Invoice::default()
//! };
//! patch.update(&client).await?;
//! ```

mod account;
mod attachable;
mod bill;
mod class;
pub mod common;
mod company_info;
mod credit_memo;
mod customer;
mod customer_type;
mod deposit;
mod employee;
mod estimate;
mod invoice;
mod item;
mod journal_entry;
mod payment;
mod purchase;
mod vendor;

pub use account::Account;
pub use attachable::{Attachable, AttachableRef};
pub use bill::Bill;
pub use class::Class;
pub use common::{Line, LineDetail, QbDate, ReferenceType};
pub use company_info::{CompanyInfo, NameValue};
pub use credit_memo::CreditMemo;
pub use customer::Customer;
pub use customer_type::CustomerType;
pub use deposit::Deposit;
pub use employee::Employee;
pub use estimate::{CustomField, Estimate};
pub use invoice::Invoice;
pub use item::Item;
pub use journal_entry::JournalEntry;
pub use payment::{Payment, PaymentLine};
pub use purchase::Purchase;
pub use vendor::Vendor;
