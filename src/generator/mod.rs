

pub mod engine;
pub mod request;
pub mod templates;

pub use engine::KeywordGenerator;
pub use request::GenerationRequest;
pub use templates::WordLists;
