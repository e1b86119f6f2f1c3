//! Application services
//!
//! Thin hosts wiring the engines to the stores: each service checks the
//! caller's session, delegates to the pure logic, and maps storage errors
//! into the unified error system.

pub mod checkout;
pub mod dashboard;
pub mod item_intake;
pub mod provisioning;

pub use checkout::CheckoutService;
pub use dashboard::{DashboardService, OrderWithCustomer};
pub use item_intake::{ItemDraft, ItemIntakeService};
pub use provisioning::ProvisioningService;
