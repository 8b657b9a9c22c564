use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use log::error;
use persian_wordcloud::{prepare_render_text, Pipeline, PipelineConfig, WordCloudError};

const DEFAULT_TOP: usize = 20;

struct Args {
    input: Option<String>,
    keep_foreign: bool,
    top: usize,
}

fn parse_args() -> Result<Args, WordCloudError> {
    let mut args = Args {
        input: None,
        keep_foreign: false,
        top: DEFAULT_TOP,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--keep-foreign" => args.keep_foreign = true,
            "--top" => {
                let value = iter.next().ok_or_else(|| {
                    WordCloudError::InvalidArgument("--top needs a value".to_string())
                })?;
                args.top = value.parse().map_err(|_| {
                    WordCloudError::InvalidArgument(format!("--top expects a number, got {value}"))
                })?;
            }
            _ if args.input.is_none() && !arg.starts_with("--") => args.input = Some(arg),
            _ => {
                return Err(WordCloudError::InvalidArgument(format!(
                    "unexpected argument: {arg}"
                )))
            }
        }
    }
    Ok(args)
}

fn read_input(path: Option<&str>) -> Result<String, WordCloudError> {
    match path {
        Some(path) => {
            fs::read_to_string(path).map_err(|error| WordCloudError::ResourceLoad {
                path: path.into(),
                source: error,
            })
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|error| WordCloudError::ResourceLoad {
                    path: "<stdin>".into(),
                    source: error,
                })?;
            Ok(text)
        }
    }
}

fn run() -> Result<(), WordCloudError> {
    let args = parse_args()?;
    let pipeline = Pipeline::from_config(
        PipelineConfig::default().with_ignore_foreign_script(!args.keep_foreign),
    )?;
    let text = read_input(args.input.as_deref())?;
    let tokens = pipeline.process(text.lines().filter(|line| !line.trim().is_empty()));

    for (token, count) in tokens.frequencies().into_iter().take(args.top) {
        println!("{count}\t{token}");
    }
    println!();
    println!("{}", prepare_render_text(&tokens));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}
