//! Business logic services for the Stockroom inventory backend

pub mod inventory;
pub mod product;
pub mod purchase;
pub mod sale;

pub use inventory::InventoryService;
pub use product::ProductService;
pub use purchase::PurchaseService;
pub use sale::SaleService;
