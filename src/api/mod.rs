pub mod extract;
pub mod response;

pub use extract::{Json, Path, Query};
pub use response::{ApiResponse, ApiResult};
