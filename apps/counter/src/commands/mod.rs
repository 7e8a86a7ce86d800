//! # Counter Commands
//!
//! The steps of a counter session, each driving the [`Prompter`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── login.rs     ◄─── Username/password challenge
//! ├── order.rs     ◄─── Order loop: product, size, quantity, add-ons
//! └── checkout.rs  ◄─── Customer details and the printed bill
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs config
//! fn authenticate(prompter, config)
//!
//! // Needs catalog and ledger
//! fn take_orders(prompter, config, catalog, ledger)
//!
//! // No state at all
//! fn collect_customer(prompter)
//! ```
//!
//! [`Prompter`]: crate::prompt::Prompter

pub mod checkout;
pub mod login;
pub mod order;

pub use checkout::{collect_customer, print_bill};
pub use login::authenticate;
pub use order::take_orders;
