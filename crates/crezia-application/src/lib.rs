pub mod auth_usecase;
pub mod scheduler;
pub mod session;
pub mod tool_usecase;

pub use auth_usecase::AuthUseCase;
pub use scheduler::{ImmediateScheduler, Scheduler, TokioScheduler};
pub use session::SessionManager;
pub use tool_usecase::{ToolRun, ToolUseCase};
