//! Provider-client abstraction layer
//!
//! Defines the contract every provider client implements ([`MediaApi`]),
//! the error taxonomy shared by all of them, the transport collaborator
//! the clients issue HTTP GETs through, and the credential handle the
//! host hands to key-requiring providers.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                MediaApi trait                │
//! │  search_by_title(&str) -> Vec<MediaModel>    │
//! │  get_by_id(&str)       -> MediaModel         │
//! └──────────────────────────────────────────────┘
//!        △                △                △
//!        │                │                │
//! ┌──────┴─────┐  ┌───────┴──────┐  ┌──────┴─────┐
//! │ ComicVine  │  │ OpenLibrary  │  │    Omdb    │
//! └────────────┘  └──────────────┘  └────────────┘
//! ```

mod error;
mod key;
mod provider;
mod transport;

pub use error::{classify_status, ApiError};
pub use key::{api_key, unset_api_key, ApiKey};
pub use provider::MediaApi;
pub use transport::{HttpResponse, ReqwestTransport, Transport};

pub type Result<T> = std::result::Result<T, ApiError>;
