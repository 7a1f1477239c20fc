//! BragBoard client SDK.
//!
//! Client-held feed state for the employee-recognition service: a
//! normalized post store, an optimistic mutation controller that treats the
//! remote REST authority as a commit/abort boundary, pure derived views
//! (filters, leaderboards, profile stats), and mention parsing for the
//! comment composer.

pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod mentions;
pub mod store;
pub mod sync;
pub mod views;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::{ApiGateway, HttpGateway};
pub use store::{FeedSnapshot, FeedStore, ShoutoutPatch, ShoutoutSnapshot};
pub use sync::FeedController;
