use std::error;

pub use simple_error::bail as bail;
pub use simple_error::try_with as try_with;
pub use simple_error::SimpleError as SimpleError;
pub use simple_error::SimpleResult as SimpleResult;

pub type GenericResult<T> = std::result::Result<T, Box<dyn error::Error>>;
