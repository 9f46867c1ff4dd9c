pub mod login_flow;
pub mod record_ctx;
pub mod record_flow;

pub use login_flow::{AuthState, LoginFlow};
pub use record_ctx::RecordCtx;
pub use record_flow::RecordFlow;
