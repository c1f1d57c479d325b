//! Data access layer. One async function per operation; each executes a
//! single fixed parameterized statement against a pooled connection and
//! returns an explicit result: `Ok(None)` / `Ok(0)` mean "no matching row",
//! `Err` means a storage fault.

pub mod events;
pub mod health;
pub mod organisations;
pub mod reports;
pub mod skills;
pub mod volunteers;
