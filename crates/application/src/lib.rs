//! Stub DNS Application Layer
pub mod use_cases;

pub use use_cases::ResolveQueryUseCase;
