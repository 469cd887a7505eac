pub mod loader;

pub use loader::{LineLoader, LoadingState};
