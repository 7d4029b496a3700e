use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use horoscope_core::Clock;
use services::{HoroscopeService, UiVariant};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidVariant { raw: String },
    InvalidImagesDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidVariant { raw } => {
                write!(f, "invalid --variant value: {raw} (expected desktop or mobile)")
            }
            ArgsError::InvalidImagesDir { raw } => {
                write!(f, "invalid --images-dir value: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    horoscope: Arc<HoroscopeService>,
}

impl UiApp for DesktopApp {
    fn horoscope(&self) -> Arc<HoroscopeService> {
        Arc::clone(&self.horoscope)
    }
}

struct Args {
    images_dir: PathBuf,
    variant: UiVariant,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--images-dir <path>] [--variant <desktop|mobile>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --images-dir .");
    eprintln!("  --variant desktop");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HOROSCOPE_IMAGES_DIR, HOROSCOPE_VARIANT, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut images_dir = std::env::var("HOROSCOPE_IMAGES_DIR")
            .ok()
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let mut variant = std::env::var("HOROSCOPE_VARIANT")
            .ok()
            .and_then(|value| value.parse::<UiVariant>().ok())
            .unwrap_or_default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--images-dir" => {
                    let value = require_value(args, "--images-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidImagesDir { raw: value });
                    }
                    images_dir = PathBuf::from(value);
                }
                "--variant" => {
                    let value = require_value(args, "--variant")?;
                    variant = value
                        .parse::<UiVariant>()
                        .map_err(|_| ArgsError::InvalidVariant { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            images_dir,
            variant,
        })
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let horoscope = Arc::new(HoroscopeService::new(
        parsed.images_dir,
        parsed.variant,
        Clock::default_clock(),
    ));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { horoscope });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some
    // dev setups. Explicitly disable it so the widget doesn't behave like
    // a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Zodiac Wheel")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
