// src/services/mod.rs

//! Quiz rules on top of the repositories: validation, the session state
//! machine, answer bookkeeping and history aggregation.

pub mod answer_recorder;
pub mod history;
pub mod question_catalog;
pub mod session_manager;

pub use answer_recorder::AnswerRecorder;
pub use history::HistoryAggregator;
pub use question_catalog::QuestionCatalog;
pub use session_manager::SessionManager;
