//! ontoseed-graph — entity construction and publishing.
//!
//! The entity constructor turns a name, description and type list into the
//! graph ops that create that entity. The publisher wraps a batch of ops into
//! a signed edit and writes it to a remote space. Both sit behind traits so
//! callers can substitute their own implementations.

pub mod client;
pub mod edit;
pub mod entity;
pub mod publish;

pub use client::{GraphError, PublishClient, PublishConfig};
pub use edit::{sign_body, Edit};
pub use entity::{CreateEntityParams, CreatedEntity, EntityConstructor, Graph};
pub use publish::{PublishReceipt, Publisher, CONTENT_HASH_HEADER, SIGNATURE_HEADER};
