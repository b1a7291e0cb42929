use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::Rng;
use starbanner::{config::DEFAULT_MAX_WIDTH, Config, Delay, Printer, Session, SAMPLE_PHRASE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Render phrases as big star banners with a colored line-by-line reveal
#[derive(Parser, Debug)]
#[command(name = "starbanner")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Phrase to render once; starts the interactive prompt when omitted
    phrase: Option<String>,

    /// Maximum banner width in columns
    #[arg(short = 'w', long, default_value_t = DEFAULT_MAX_WIDTH)]
    width: usize,

    /// Pause between revealed lines in milliseconds
    #[arg(short = 'd', long, default_value_t = Delay::default())]
    delay: Delay,

    /// Seed for reproducible line colors
    #[arg(long)]
    seed: Option<u64>,

    /// Render a sample phrase covering every glyph and exit
    #[arg(short = 't', long, conflicts_with = "phrase")]
    test: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the banner
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("starbanner={}", log_level)),
        ))
        .init();

    let config = args.config();
    tracing::debug!(?config, "starting starbanner v{}", env!("CARGO_PKG_VERSION"));

    let printer = Printer::stdout(config.seed);
    let mut session = Session::new(io::stdin().lock(), printer, config);
    execute(&mut session, args.one_shot())?;
    Ok(())
}

impl Args {
    fn config(&self) -> Config {
        Config {
            max_width: self.width,
            delay: self.delay,
            seed: self.seed,
        }
    }

    /// Phrase to render without prompting, if any.
    fn one_shot(&self) -> Option<String> {
        if self.test {
            Some(SAMPLE_PHRASE.to_string())
        } else {
            self.phrase.clone()
        }
    }
}

fn execute<I: BufRead, W: Write, R: Rng>(
    session: &mut Session<I, W, R>,
    one_shot: Option<String>,
) -> starbanner::Result<()> {
    match one_shot {
        Some(phrase) => session.show(&phrase),
        None => session.run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use starbanner::{colors::strip_ansi, render, session::FAREWELL, session::PROMPT};
    use std::io::Cursor;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("starbanner").chain(argv.iter().copied()))
    }

    fn captured(one_shot: Option<String>, input: &str) -> String {
        let config = Config {
            delay: Delay::NONE,
            ..Config::default()
        };
        let printer = Printer::new(Vec::new(), StdRng::seed_from_u64(1));
        let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), printer, config);
        execute(&mut session, one_shot).unwrap();
        let raw = String::from_utf8(session.into_printer().into_inner()).unwrap();
        raw.lines().map(strip_ansi).collect::<Vec<_>>().join("\n") + "\n"
    }

    #[test]
    fn defaults_match_config() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.config(), Config::default());
        assert_eq!(args.one_shot(), None);
        assert!(!args.debug);
    }

    #[test]
    fn width_delay_and_seed() {
        let args = parse(&["-w", "60", "-d", "75ms", "--seed", "7", "hello"]).unwrap();
        assert_eq!(
            args.config(),
            Config {
                max_width: 60,
                delay: Delay::from_millis(75),
                seed: Some(7),
            }
        );
        assert_eq!(args.one_shot().as_deref(), Some("hello"));
    }

    #[test]
    fn bad_delay_rejected() {
        let err = parse(&["--delay", "soon"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_flag_conflicts_with_phrase() {
        let err = parse(&["--test", "hello"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let args = parse(&["-t"]).unwrap();
        assert_eq!(args.one_shot().as_deref(), Some(SAMPLE_PHRASE));
    }

    #[test]
    fn one_shot_skips_prompt() {
        let out = captured(Some("go".into()), "exit\n");
        assert_eq!(out, render("GO", 150));
        assert!(!out.contains(PROMPT));
        assert!(!out.contains(FAREWELL));
    }

    #[test]
    fn no_phrase_runs_interactive_loop() {
        let out = captured(None, "exit\n");
        assert_eq!(out, format!("{}\n{}\n", PROMPT, FAREWELL));
    }
}
