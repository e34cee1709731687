pub mod processing_service;

pub use processing_service::ProcessingService;
