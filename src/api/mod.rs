//! Внешний API расчётного ядра.
//!
//! Здесь описываются:
//! - DTO (dto.rs) — запросы и ответы на токенах карт, удобные для JSON;
//! - запросы (queries.rs) — разбор токенов, проверка раздачи, вызов ядра;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod dto;
pub mod errors;
pub mod queries;

pub use dto::*;
pub use errors::*;
pub use queries::*;
