//! tablas: print multiplication tables from an interactive console session.

pub mod input;
pub mod messages;
pub mod session;
pub mod table;
pub mod types;
