pub mod engine;
pub mod results;

pub use engine::{Engine, EngineError, EngineExit, ProcessEngine};
pub use results::{parse_result_file, parse_result_str, MalformedResultError};
