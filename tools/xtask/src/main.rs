//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov`: 运行 map-style 覆盖率
//! - `config-check`: 检查过渡配置文件（JSON 格式、负数过渡）

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use map_style::{StyleTransition, TransitionConfig};
use walkdir::WalkDir;

fn run(step: &str, cmd: &mut Command) -> anyhow::Result<()> {
    eprintln!("\n==> {step}");
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("{step} failed with {status}");
    }
    Ok(())
}

fn ensure_cargo_llvm_cov_available() -> anyhow::Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(["llvm-cov", "--version"]);
    let status = cmd.status();
    match status {
        Ok(s) if s.success() => Ok(()),
        _ => anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        ),
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());

    match sub.as_str() {
        "check-all" => {
            let mut fmt = Command::new("cargo");
            fmt.args(["fmt", "--all", "--", "--check"]);
            run("cargo fmt --all -- --check", &mut fmt)?;

            let mut clippy = Command::new("cargo");
            clippy.args(["clippy", "--workspace", "--all-targets"]);
            run("cargo clippy --workspace --all-targets", &mut clippy)?;

            let mut test = Command::new("cargo");
            test.args(["test", "--workspace"]);
            run("cargo test --workspace", &mut test)?;
        }
        "cov" => {
            ensure_cargo_llvm_cov_available()?;

            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "-p", "map-style", "--all-features", "--html"]);
            run("cargo llvm-cov -p map-style --all-features --html", &mut cov)?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "config-check" => {
            let path = args.next();
            config_check(path.as_deref())?;
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        other => anyhow::bail!("unknown xtask subcommand: {other}"),
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all       运行 fmt、clippy、test 门禁检查
  cov             运行 map-style 覆盖率报告
  config-check    检查过渡配置文件

CONFIG-CHECK:
  cargo xtask config-check [path]

  不带参数：检查 styles/ 下所有 .json 文件
  带路径参数：检查指定文件或目录

  检查内容：
    - JSON 语法与字段
    - 负数 duration / delay（允许，但输出警告）
"#
    );
}

//=============================================================================
// config-check 命令实现
//=============================================================================

/// 默认配置目录（相对于 workspace root）
const DEFAULT_STYLES_DIR: &str = "styles";

/// 配置检查结果
#[derive(Default)]
struct ConfigCheckResult {
    files_checked: usize,
    errors: usize,
    warnings: usize,
}

/// 执行配置检查
fn config_check(path: Option<&str>) -> anyhow::Result<()> {
    let root = PathBuf::from(path.unwrap_or(DEFAULT_STYLES_DIR));
    if !root.exists() {
        anyhow::bail!("路径不存在: {}", root.display());
    }

    let files = collect_config_files(&root)?;
    if files.is_empty() {
        eprintln!("未找到配置文件（.json）");
        return Ok(());
    }

    eprintln!("==> 检查 {} 个配置文件...\n", files.len());

    let mut result = ConfigCheckResult::default();
    for file in &files {
        check_config_file(file, &mut result);
    }

    eprintln!("─────────────────────────────────────────────────────");
    eprintln!("检查完成: {} 个文件", result.files_checked);
    if result.errors > 0 {
        eprintln!("❌ {} 个错误, {} 个警告", result.errors, result.warnings);
        anyhow::bail!("配置检查发现错误");
    } else if result.warnings > 0 {
        eprintln!("⚠️  0 个错误, {} 个警告", result.warnings);
    } else {
        eprintln!("✅ 检查通过，无错误");
    }

    Ok(())
}

/// 收集路径下的所有 .json 文件
fn collect_config_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// 检查单个配置文件
fn check_config_file(file: &Path, result: &mut ConfigCheckResult) {
    let id = file.display().to_string();
    result.files_checked += 1;

    let config = match TransitionConfig::load(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[ERROR] {id}: {e}");
            result.errors += 1;
            return;
        }
    };

    let entries = std::iter::once(("default_transition", &config.default_transition))
        .chain(config.properties.iter().map(|(k, v)| (k.as_str(), v)));
    for (name, transition) in entries {
        if let Err(e) = StyleTransition::try_from(*transition) {
            eprintln!("[WARN] {id}: {name}: {e}");
            result.warnings += 1;
        }
    }
}
