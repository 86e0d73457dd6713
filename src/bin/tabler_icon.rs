use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser as ClapParser;
use tabler_components::{config::{self, DEFAULT_ICON_SIZE, DEFAULT_STROKE_WIDTH},
                        icon::{IconRenderer, IconRequest, Variant},
                        icon_store::FsIconStore,
                        util::split_key_value};

#[derive(clap::Parser, Debug)]
/// Print a Tabler icon as inline SVG markup.
struct Args {
    /// Icon name, e.g. "home" or "arrow-left"
    #[clap(required(true))]
    name: String,

    /// "outline" or "filled"
    #[clap(long, default_value = "outline")]
    variant: Variant,

    /// Width and height in pixels
    #[clap(long, default_value_t = DEFAULT_ICON_SIZE)]
    size: u32,

    /// Stroke width (outline icons only)
    #[clap(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    stroke_width: f64,

    /// Additional CSS class(es)
    #[clap(long)]
    class: Option<String>,

    /// Extra attribute for the svg element, as key=value; can be
    /// given multiple times. Underscores in the key become dashes.
    #[clap(long = "attr")]
    attrs: Vec<String>,

    /// Icon asset root (default: $TABLER_ICONS_DIR or the bundled
    /// icon set)
    #[clap(long)]
    icons_dir: Option<PathBuf>,

    /// Disables warnings
    #[clap(long)]
    quiet: bool,

    /// Also show which files are read
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(if args.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            });
        }
    }

    let icons_dir = match args.icons_dir {
        Some(dir) => dir,
        None => config::icons_dir()?,
    };
    let renderer = IconRenderer::new(FsIconStore::new(icons_dir));

    let mut request = IconRequest::new(&args.name)
        .variant(args.variant)
        .size(args.size)
        .stroke_width(args.stroke_width)
        .class(args.class.as_deref());
    for attr in &args.attrs {
        let (key, val) = split_key_value(attr)?;
        request = request.attribute(key, val);
    }

    let icon = renderer.render(&request);
    let mut out = std::io::stdout().lock();
    writeln!(&mut out, "{icon}")?;
    out.flush()?;
    Ok(())
}

static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };
            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {target}:{line}): {args}"),
                log::Level::Warn => eprintln!("Warning (in {target}:{line}): {args}"),
                log::Level::Info => eprintln!("Info (in {target}:{line}): {args}"),
                log::Level::Debug => eprintln!("Debug (in {target}:{line}): {args}"),
                log::Level::Trace => eprintln!("Trace (in {target}:{line}): {args}"),
            }
        }
    }

    fn flush(&self) {}
}
