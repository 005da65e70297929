//! nomine - 동화책 미리보기 (터미널)

use clap::Parser;
use nomine::config::Background;
use nomine::navigation::PendingTransition;
use nomine::{BookConfig, BookPreview};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "nomine", about = "이름 맞춤 동화책 미리보기")]
struct Cli {
    /// 동화책 설정 파일 (JSON)
    #[arg(short, long, default_value = "configs/name.config.json")]
    config: PathBuf,
    /// 아이 이름 (없으면 설정 기본값)
    #[arg(short, long)]
    name: Option<String>,
    /// 부모 호칭 (없으면 설정 기본값)
    #[arg(short, long)]
    parents: Option<String>,
    /// 시작 버전 id
    #[arg(short, long)]
    version: Option<String>,
}

/// 터미널 입력 명령
enum Command {
    Next,
    Prev,
    Jump(usize),
    Version(String),
    Name(String),
    Parents(String),
    Thumbnails,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, arg) = match line.split_once(' ') {
        Some((head, arg)) => (head, arg.trim()),
        None => (line, ""),
    };
    match head {
        "n" | "next" | "" => Command::Next,
        "p" | "prev" => Command::Prev,
        "j" | "jump" => match arg.parse::<usize>() {
            // 사용자는 1부터 센다
            Ok(page) if page > 0 => Command::Jump(page - 1),
            _ => Command::Unknown(line.to_string()),
        },
        "v" | "version" => Command::Version(arg.to_string()),
        "name" => Command::Name(arg.to_string()),
        "parents" => Command::Parents(arg.to_string()),
        "t" | "thumbs" => Command::Thumbnails,
        "q" | "quit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드 실패는 세션 전체 실패
    let config = match BookConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("설정 로드 실패: {}", e);
            eprintln!("⚠️  {}", e);
            std::process::exit(1);
        }
    };

    let mut preview = BookPreview::new(config);
    if let Some(name) = &cli.name {
        preview.set_first_name(name);
    }
    if let Some(parents) = &cli.parents {
        preview.set_parent_names(parents);
    }
    if let Some(version) = &cli.version {
        if !preview.select_version(version) {
            log::warn!("알 수 없는 버전: {}", version);
        }
    }

    print_page(&preview);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };

        let now = Instant::now();
        let pending = match parse_command(&line) {
            Command::Next => preview.next(now),
            Command::Prev => preview.prev(now),
            Command::Jump(index) => preview.jump_to(index, now),
            Command::Version(id) => {
                if !preview.select_version(&id) {
                    println!("없는 버전: {}", id);
                }
                None
            }
            Command::Name(name) => {
                preview.set_first_name(&name);
                None
            }
            Command::Parents(parents) => {
                preview.set_parent_names(&parents);
                None
            }
            Command::Thumbnails => {
                print_thumbnails(&preview);
                continue;
            }
            Command::Quit => break,
            Command::Unknown(raw) => {
                println!(
                    "알 수 없는 명령: {} (n, p, j <쪽>, v <버전>, name <이름>, parents <호칭>, t, q)",
                    raw
                );
                continue;
            }
        };

        // 터미널에는 애니메이션이 없으므로 바로 확정
        if let Some(PendingTransition { token, transition }) = pending {
            log::debug!("전환 {:?}", transition);
            preview.complete(token);
        }
        print_page(&preview);
    }
}

fn print_page(preview: &BookPreview) {
    let mut out = io::stdout().lock();
    let Some(view) = preview.view() else {
        let _ = writeln!(out, "(표시할 페이지 없음)");
        return;
    };

    let _ = writeln!(out, "──── [{}] {} ────", view.version, view.version_label);
    let _ = writeln!(out, "{}    {}", view.badge, preview.counter_label());
    let _ = writeln!(out, "배경: {}", describe_background(&view.background));
    let _ = writeln!(out);
    for line in view.text.lines() {
        let _ = writeln!(out, "  {}", line);
    }
    let _ = writeln!(out);
    let nav = match (view.has_prev, view.has_next) {
        (true, true) => "◀ p   n ▶",
        (true, false) => "◀ p",
        (false, true) => "n ▶",
        (false, false) => "",
    };
    let _ = writeln!(out, "{}", nav);
    let _ = out.flush();
}

fn print_thumbnails(preview: &BookPreview) {
    for thumb in preview.thumbnails() {
        let marker = if thumb.active { "▶" } else { " " };
        println!(
            "{} {:>2}. {} ({})",
            marker,
            thumb.scene,
            thumb.title,
            describe_background(&thumb.background)
        );
    }
}

fn describe_background(background: &Background) -> String {
    match background {
        Background::Illustration(path) => format!("그림 {}", path),
        Background::Gradient(gradient) => format!("색 {}", gradient),
        Background::Blank => "없음".to_string(),
    }
}
