//! Question Source Adapters.
//!
//! Implementations of the QuestionSource port.
//!
//! ## Available Adapters
//!
//! - `HttpQuestionSource` - REST question service client
//! - `MockQuestionSource` - Configurable mock for testing

mod http_source;
mod mock_source;

pub use http_source::HttpQuestionSource;
pub use mock_source::{MockFetch, MockFetchError, MockQuestionSource};
