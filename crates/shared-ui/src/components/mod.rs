// Standalone components (no primitives)
pub mod button;
pub mod card;
pub mod form;
pub mod input;
pub mod page_header;

// Depends on the font-awesome icon set
pub mod file_input;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use file_input::*;
pub use form::*;
pub use input::*;
pub use page_header::*;
