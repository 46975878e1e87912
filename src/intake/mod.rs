pub mod vision;

pub use vision::{parse_vision_response, Confidence, VisionReport};
