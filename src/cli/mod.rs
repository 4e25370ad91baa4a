//! 命令行界面模块
//!
//! 交互式控制台的命令分发、结果打印和补全

pub mod commands;
pub mod completer;
pub mod printer;
