pub mod dom;
pub mod js_executor;

pub use dom::{wait_for_selector, DomDriver};
pub use js_executor::JsExecutor;
