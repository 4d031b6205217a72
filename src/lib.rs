pub mod assistant;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod navigation;
pub mod output;
pub mod profile;
pub mod progress;
pub mod session;
pub mod transcript;
pub mod ui;

pub use assistant::{AssistantGateway, CompletionClient, CompletionError, GeminiClient, SendOutcome};
pub use error::{BizOsError, Result};
pub use inventory::{InventoryRow, InventoryTable};
pub use navigation::{reduce, resolve_view, Action, Effect};
pub use session::{Page, Session};
pub use transcript::{Message, Role, Transcript};
