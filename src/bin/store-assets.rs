use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "store-assets", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the 512x512 app icon PNG.
    Icon(OutputArgs),
    /// Generate the 1024x500 feature graphic PNG.
    Feature(OutputArgs),
    /// Generate both assets.
    All(OutputArgs),
}

#[derive(Parser, Debug)]
struct OutputArgs {
    /// Directory the PNGs are written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Optional theme JSON (base color, title, tagline); defaults to the
    /// ClassNotes brand.
    #[arg(long)]
    theme: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Icon(args) => run(args, true, false),
        Command::Feature(args) => run(args, false, true),
        Command::All(args) => run(args, true, true),
    }
}

fn read_theme_json(path: &Path) -> anyhow::Result<store_assets::Theme> {
    let f = File::open(path).with_context(|| format!("open theme '{}'", path.display()))?;
    let r = BufReader::new(f);
    let theme: store_assets::Theme =
        serde_json::from_reader(r).with_context(|| "parse theme JSON")?;
    Ok(theme)
}

fn run(args: OutputArgs, icon: bool, feature: bool) -> anyhow::Result<()> {
    let theme = match &args.theme {
        Some(path) => read_theme_json(path)?,
        None => store_assets::Theme::default(),
    };
    theme.validate()?;

    if icon {
        let canvas = store_assets::render_app_icon(&theme)?;
        let out = args.out_dir.join(store_assets::APP_ICON_FILE);
        store_assets::save_rgb_png(&canvas, &out)?;
        report(&out, &canvas);
    }

    if feature {
        let font = store_assets::resolve_font(store_assets::SYSTEM_FONT_CANDIDATES);
        let canvas = store_assets::render_feature_graphic(&theme, &font)?;
        let out = args.out_dir.join(store_assets::FEATURE_FILE);
        store_assets::save_rgb_png(&canvas, &out)?;
        report(&out, &canvas);
    }

    Ok(())
}

fn report(path: &Path, canvas: &store_assets::Canvas) {
    eprintln!(
        "wrote {} ({}x{})",
        path.display(),
        canvas.width(),
        canvas.height()
    );
}
