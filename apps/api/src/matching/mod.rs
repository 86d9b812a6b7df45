pub mod engine;
pub mod handlers;
pub mod service;
pub mod similarity;
pub mod weights;
