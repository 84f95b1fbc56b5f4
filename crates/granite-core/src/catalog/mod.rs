pub mod admin;
pub mod blob;
pub mod buy_request;
pub mod filter;
pub mod material;
mod snapshot;
pub mod stats;
pub mod store;

pub use admin::{create_material, edit_material, remove_material, PhotoUpload};
pub use blob::{BlobStore, DirBlobStore};
pub use buy_request::{BuyRequest, BuyRequestLog, BuyRequestStatus, BuyerProfile};
pub use filter::{list_view, StatusFilter};
pub use material::{Material, MaterialDraft, MaterialFields, MaterialStatus};
pub use stats::CatalogStats;
pub use store::{CatalogChange, CatalogStore, ChangeKind, JsonCatalog};
