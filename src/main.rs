// 命令行入口 - 检查待发送文本是否包含屏蔽词
use anyhow::Result;
use std::io::{Read, Write};
use std::path::PathBuf;

use post_guard_lib::dictionary_utils::dedup_preserving_order;
use post_guard_lib::{FilterConfig, FilterEngine, SubmitDecision};

/// 未命中屏蔽词时的退出码
const EXIT_OK: i32 = 0;
/// 命中屏蔽词时的退出码
const EXIT_CONFIRM_REQUIRED: i32 = 2;

const USAGE: &str = "用法: post-guard [--config <path>] [--list] [text...]\n未提供 text 时从标准输入读取";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config_path: Option<PathBuf>,
    list_terms: bool,
    show_help: bool,
    text: Option<String>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut words = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config 需要文件路径"))?;
                cli.config_path = Some(PathBuf::from(path));
            }
            "--list" => cli.list_terms = true,
            "-h" | "--help" => cli.show_help = true,
            _ => words.push(arg),
        }
    }

    if !words.is_empty() {
        cli.text = Some(words.join(" "));
    }

    Ok(cli)
}

fn exit_code(decision: &SubmitDecision) -> i32 {
    match decision {
        SubmitDecision::Proceed => EXIT_OK,
        SubmitDecision::ConfirmRequired { .. } => EXIT_CONFIRM_REQUIRED,
    }
}

/// 执行一次检查，结果写入 `out`，返回退出码
fn run(args: CliArgs, input: &mut impl Read, out: &mut impl Write) -> Result<i32> {
    if args.show_help {
        writeln!(out, "{}", USAGE)?;
        return Ok(EXIT_OK);
    }

    let config = match &args.config_path {
        Some(path) => FilterConfig::load_from_path(path)?,
        None => FilterConfig::load()?,
    };

    if args.list_terms {
        let dictionary = config.resolve_dictionary();
        for term in dedup_preserving_order(dictionary.terms()) {
            writeln!(out, "{}", term)?;
        }
        return Ok(EXIT_OK);
    }

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            buf
        }
    };

    let engine = FilterEngine::from_config(&config);
    let decision = SubmitDecision::from(&engine.check(&text));

    match &decision {
        SubmitDecision::Proceed => {
            tracing::info!("文本未命中屏蔽词，可直接发送");
            writeln!(out, "OK")?;
        }
        SubmitDecision::ConfirmRequired { term, message } => {
            tracing::info!("命中屏蔽词: {}", term);
            writeln!(out, "ACHTUNG\n\n{}", message)?;
        }
    }

    Ok(exit_code(&decision))
}

fn main() -> Result<()> {
    // 日志写入 stderr，stdout 只保留检查结果
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = parse_args(std::env::args().skip(1))?;
    let code = run(args, &mut std::io::stdin(), &mut std::io::stdout())?;
    if code != EXIT_OK {
        std::process::exit(code);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_with(cli: CliArgs, stdin: &str) -> (i32, String) {
        let mut out = Vec::new();
        let code = run(cli, &mut Cursor::new(stdin.as_bytes()), &mut out).expect("run");
        (code, String::from_utf8(out).expect("utf8 output"))
    }

    /// 指向临时目录中的配置文件（可能不存在，此时使用默认配置）
    fn config_args(dir: &tempfile::TempDir, extra: &[&str]) -> CliArgs {
        let config = dir.path().join("config.json");
        let mut list = vec!["--config".to_string(), config.to_string_lossy().to_string()];
        list.extend(args(extra));
        parse_args(list).expect("parse args")
    }

    #[test]
    fn test_parse_args() {
        let cli = parse_args(args(&["--config", "a.json", "du", "bist", "dumm"])).unwrap();
        assert_eq!(cli.config_path, Some(PathBuf::from("a.json")));
        assert_eq!(cli.text.as_deref(), Some("du bist dumm"));
        assert!(!cli.list_terms);

        let cli = parse_args(args(&["--list"])).unwrap();
        assert!(cli.list_terms);
        assert_eq!(cli.text, None);

        assert_eq!(parse_args(Vec::new()).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_parse_args_config_without_path() {
        assert!(parse_args(args(&["--config"])).is_err());
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&SubmitDecision::Proceed), 0);
        let blocked = SubmitDecision::ConfirmRequired {
            term: "dumm".to_string(),
            message: String::new(),
        };
        assert_eq!(exit_code(&blocked), 2);
    }

    #[test]
    fn test_run_clean_text() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let (code, out) = run_with(config_args(&temp, &["Ich", "gehe", "heute", "einkaufen"]), "");
        assert_eq!(code, 0);
        assert_eq!(out, "OK\n");
    }

    #[test]
    fn test_run_blocked_text() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let (code, out) = run_with(config_args(&temp, &["Du", "bist", "DUMM"]), "");
        assert_eq!(code, 2);
        assert!(out.starts_with("ACHTUNG"));
        assert!(out.contains("'dumm'"));
    }

    #[test]
    fn test_run_reads_stdin_without_words() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let (code, out) = run_with(config_args(&temp, &[]), "so eine Scheisse\n");
        assert_eq!(code, 2);
        assert!(out.contains("'scheiße'"));
    }

    #[test]
    fn test_run_list_prints_only_deduplicated_terms() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let words = temp.path().join("words.txt");
        std::fs::write(&words, "eins\nzwei\neins\n").expect("write dictionary");
        let config = serde_json::json!({
            "dictionary_path": words,
            "use_builtin_dictionary": false,
        });
        std::fs::write(temp.path().join("config.json"), config.to_string())
            .expect("write config");

        let (code, out) = run_with(config_args(&temp, &["--list"]), "");
        assert_eq!(code, 0);
        assert_eq!(out, "eins\nzwei\n");
    }

    #[test]
    fn test_run_help() {
        let (code, out) = run_with(parse_args(args(&["--help"])).unwrap(), "");
        assert_eq!(code, 0);
        assert!(out.starts_with("用法"));
    }
}
