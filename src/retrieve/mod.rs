pub mod descriptor;
pub mod dispatcher;
pub mod envelope;
pub mod params;

pub use descriptor::{API_KEY_PARAM, RequestDescriptor};
pub use dispatcher::{Dispatcher, DispatcherOptions};
pub use envelope::{ErrorKind, NormalizedError, ResponseEnvelope};
pub use params::{PathParams, QueryParams, QueryValue};
