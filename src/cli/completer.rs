//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 控制台命令列表
const COMMANDS: &[&str] = &[
    // 图构建
    "vertex", "edge",
    // 遍历
    "dfs", "resume", "reset",
    // 查看
    "show", "print", "table", "format", "stats", "info",
    // 数据
    "import", "save", "load",
    // 控制台
    "tee", "notee", "clear", "help", "quit", "exit",
];

/// 子命令映射
fn get_sub_commands(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "format" => Some(&["table", "vertical"]),
        _ => None,
    }
}

/// DepthGraph CLI 补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();

        if words.is_empty() {
            return Ok((0, vec![]));
        }

        // 检查光标是否在单词末尾
        let at_word_end = !line_to_cursor.ends_with(' ');

        if at_word_end {
            // 补全当前正在输入的单词
            // 起始位置按原始单词的字节长度计算，小写转换可能改变长度
            let raw_word = words.last().unwrap();
            let start_pos = pos - raw_word.len();
            let current_word = raw_word.to_lowercase();

            // 检查前一个单词是否有子命令
            if words.len() > 1 {
                let prev_word = words[words.len() - 2].to_lowercase();
                if let Some(sub_cmds) = get_sub_commands(&prev_word) {
                    let completions: Vec<Pair> = sub_cmds
                        .iter()
                        .filter(|kw| kw.starts_with(&current_word))
                        .map(|kw| Pair {
                            display: kw.to_string(),
                            replacement: kw.to_string(),
                        })
                        .collect();
                    if !completions.is_empty() {
                        return Ok((start_pos, completions));
                    }
                }
                // 命令的其余参数是顶点标识或路径，不做补全
                return Ok((start_pos, vec![]));
            }

            // 首个单词按命令名补全
            let completions: Vec<Pair> = COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(&current_word))
                .map(|cmd| Pair {
                    display: cmd.to_string(),
                    replacement: cmd.to_string(),
                })
                .collect();

            Ok((start_pos, completions))
        } else {
            // 在空格后，提供子命令建议
            let last_word = words.last().unwrap().to_lowercase();
            if let Some(sub_cmds) = get_sub_commands(&last_word) {
                let completions: Vec<Pair> = sub_cmds
                    .iter()
                    .map(|kw| Pair {
                        display: kw.to_string(),
                        replacement: kw.to_string(),
                    })
                    .collect();
                return Ok((pos, completions));
            }
            Ok((pos, vec![]))
        }
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::DefaultHistory;

    fn complete_at(line: &str, pos: usize) -> (usize, Vec<String>) {
        let completer = CommandCompleter::new();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = completer.complete(line, pos, &ctx).unwrap();
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn test_complete_command_prefix() {
        let (start, words) = complete_at("ver", 3);
        assert_eq!(start, 0);
        assert_eq!(words, vec!["vertex"]);
    }

    #[test]
    fn test_complete_format_sub_command() {
        let (start, words) = complete_at("format ta", 9);
        assert_eq!(start, 7);
        assert_eq!(words, vec!["table"]);
    }

    #[test]
    fn test_complete_multibyte_token_stays_in_bounds() {
        // İ 小写后字节数变长，补全起点必须按原始输入的长度计算
        let line = "\u{130}";
        let (start, words) = complete_at(line, line.len());
        assert_eq!(start, 0);
        assert!(words.is_empty());
    }
}
