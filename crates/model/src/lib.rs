//! Media models and the object migration routine.
//!
//! Every record fetched from a provider or reloaded from storage passes
//! through [`migrate_object`]: fields the raw object provides are copied
//! over the model's declared defaults, unknown fields are dropped, and
//! missing fields keep their defaults. The same path handles fresh API
//! payloads and legacy persisted records alike.

mod book;
mod comic;
mod de;
mod error;
mod media;
mod migrate;
mod movie;

pub use book::{BookModel, BookUserData};
pub use comic::{ComicModel, ComicUserData};
pub use error::ModelError;
pub use media::{MediaModel, MediaType, MediaTypeModel, MEDIA_DB_TAG};
pub use migrate::migrate_object;
pub use movie::{MovieModel, MovieUserData};

pub type Result<T> = std::result::Result<T, ModelError>;
