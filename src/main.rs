//! Hanjamo - 자모 조합 CLI
//!
//! 인자 또는 표준 입력의 텍스트를 완성형 한글로 조합합니다.
//! 발음 사전이 주어지면 먼저 단어를 발음 표기로 바꾼 뒤 조합합니다.

use std::io::{self, BufRead};
use std::path::PathBuf;

use hanjamo::config::load_config;
use hanjamo::{compose_hangul, EnglishTranslit, Translit};

fn print_usage() {
    eprintln!("사용법: hanjamo [옵션] [텍스트...]");
    eprintln!();
    eprintln!("  -d, --dict <파일>   발음 사전 파일 (단어 -> 자모 표기)");
    eprintln!("  -h, --help          도움말 출력");
    eprintln!();
    eprintln!("텍스트 인자가 없으면 표준 입력을 줄 단위로 처리합니다.");
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();
    let mut dict_path = config.dict_path;
    let mut texts: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-d" | "--dict" => match args.next() {
                Some(p) => dict_path = Some(PathBuf::from(p)),
                None => {
                    eprintln!("오류: {} 옵션에 사전 파일 경로가 필요합니다", arg);
                    print_usage();
                    std::process::exit(2);
                }
            },
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => texts.push(arg),
        }
    }

    // 사전 로드 실패는 경고만 하고 조합만 수행
    let translit = dict_path.as_ref().and_then(|p| match EnglishTranslit::load(p) {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("발음 사전 로드 실패 ({}): {}", p.display(), e);
            None
        }
    });

    let process = |line: &str| -> String {
        match &translit {
            Some(t) => compose_hangul(&t.transliterate(line)),
            None => compose_hangul(line),
        }
    };

    if texts.is_empty() {
        // 인자가 없으면 표준 입력을 줄 단위로 처리
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => println!("{}", process(&line)),
                Err(e) => {
                    log::error!("입력 읽기 실패: {}", e);
                    std::process::exit(1);
                }
            }
        }
    } else {
        println!("{}", process(&texts.join(" ")));
    }
}
