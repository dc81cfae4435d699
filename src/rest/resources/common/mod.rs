//! Wire types shared by several entities.
//!
//! These are not entities themselves (they don't implement `QbEntity`), but
//! are embedded in entities such as `Invoice`, `Bill` and `Customer`.
//!
//! # Example
//!
//! ```rust
//! use quickbooks_api::rest::resources::common::{PhysicalAddress, ReferenceType};
//!
//! let address = PhysicalAddress {
//!     line1: Some("123 Main Street".to_string()),
//!     city: Some("Mountain View".to_string()),
//!     country_sub_division_code: Some("CA".to_string()),
//!     postal_code: Some("94042".to_string()),
//!     ..Default::default()
//! };
//!
//! let vendor = ReferenceType::new("46");
//! ```

mod address;
mod date;
mod line;
mod linked_txn;
mod metadata;
mod reference;
mod tax;

pub use address::{EmailAddress, PhysicalAddress, TelephoneNumber, WebSiteAddress};
pub use date::{InvalidDate, QbDate};
pub use line::{
    detail_type, AccountBasedExpenseLineDetail, DepositLineDetail, DescriptionLineDetail,
    DiscountLineDetail, ItemBasedExpenseLineDetail, JournalEntryEntity, JournalEntryLineDetail,
    Line, LineDetail, PostingType, SalesItemLineDetail, SubTotalLineDetail, TaxLineDetail,
};
pub use linked_txn::LinkedTxn;
pub use metadata::MetaData;
pub use reference::{MemoRef, ReferenceType};
pub use tax::TxnTaxDetail;
