pub mod create;
pub mod form_state;
pub mod tab;

pub use create::AssignmentCreate;
pub use tab::AssignmentsTab;
