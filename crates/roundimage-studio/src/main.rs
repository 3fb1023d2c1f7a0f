use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roundimage_engine::logging::{init_logging, LoggingConfig};
use roundimage_ui::prelude::*;

/// roundimage-studio: render a `.mkml` RoundImage document to PNG
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the `.mkml` document
    pub input: PathBuf,

    /// Path of the PNG file to write
    #[clap(short, long, default_value = "roundimage.png")]
    pub output: PathBuf,

    /// Fixed output width; the widget's natural width when omitted
    #[clap(long)]
    pub width: Option<u32>,

    /// Fixed output height; the widget's natural height when omitted
    #[clap(long)]
    pub height: Option<u32>,

    /// Cell size of the built-in `checker` source, in pixels (1 to 256)
    #[clap(long, default_value = "16", value_parser = clap::value_parser!(u32).range(1..=256))]
    pub checker_cell: u32,

    /// Log filter, e.g. "debug" or "roundimage_ui=trace" (defaults to RUST_LOG)
    #[clap(long)]
    pub log: Option<String>,
}

/// Two-tone checkerboard, bound as `checker` for documents to use.
struct Checkerboard {
    cell: u32,
    columns: u32,
    rows: u32,
}

impl Drawable for Checkerboard {
    fn intrinsic_size(&self) -> (u32, u32) {
        (self.cell.saturating_mul(self.columns), self.cell.saturating_mul(self.rows))
    }

    fn draw(&self, canvas: &mut dyn Canvas, _size: Vec2) {
        let light = Color::from_srgb_u8(0xe8, 0xd5, 0xb7, 0xff);
        let dark = Color::from_srgb_u8(0x0e, 0x3b, 0x43, 0xff);
        let cell = self.cell as f32;
        for row in 0..self.rows {
            for col in 0..self.columns {
                let color = if (row + col) % 2 == 0 { light } else { dark };
                let rect = Rect::new(col as f32 * cell, row as f32 * cell, cell, cell);
                canvas.fill_path(&Path::from_rect(rect), &Paint::solid(color));
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    let src = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let cell = args.checker_cell;
    let bindings = DslBindings::new()
        .with_drawable("checker", move || Box::new(Checkerboard { cell, columns: 12, rows: 8 }));

    let loader = DslLoader::new();
    let mut image = match loader.load(&src, &bindings) {
        Ok(image) => image,
        Err(e) => {
            if let BuildError::Parse(parse) = &e {
                if let Some(excerpt) = parse.excerpt(&src) {
                    log::error!("{}\n{excerpt}", args.input.display());
                }
            }
            return Err(anyhow::Error::new(e).context(format!("failed to build {}", args.input.display())));
        }
    };

    let mut constraints = Constraints::unbounded();
    if let Some(w) = args.width {
        constraints = constraints.with_exact_width(w as f32);
    }
    if let Some(h) = args.height {
        constraints = constraints.with_exact_height(h as f32);
    }

    let size = image.measure(constraints);
    let (w, h) = (size.x.ceil().max(1.0) as u32, size.y.ceil().max(1.0) as u32);
    log::info!("rendering {} at {w}x{h}", args.input.display());

    let mut canvas = RasterCanvas::new(w, h)?;
    let mut scene = UiScene::new();
    if !scene.frame(&mut image, constraints, &mut canvas) {
        log::warn!("nothing was painted");
    }

    canvas.save_png(&args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(argv)
    }

    // ── checker_cell ──────────────────────────────────────────────────────

    #[test]
    fn checker_cell_defaults_to_sixteen() {
        let args = parse(&["roundimage-studio", "in.mkml"]).unwrap();
        assert_eq!(args.checker_cell, 16);
    }

    #[test]
    fn checker_cell_out_of_range_is_rejected() {
        assert!(parse(&["roundimage-studio", "in.mkml", "--checker-cell", "0"]).is_err());
        assert!(parse(&["roundimage-studio", "in.mkml", "--checker-cell", "4294967295"]).is_err());
    }

    // ── Checkerboard ──────────────────────────────────────────────────────

    #[test]
    fn checkerboard_size_is_cell_times_grid() {
        let board = Checkerboard { cell: 16, columns: 12, rows: 8 };
        assert_eq!(board.intrinsic_size(), (192, 128));
    }

    #[test]
    fn huge_checkerboard_size_saturates() {
        let board = Checkerboard { cell: u32::MAX, columns: 12, rows: 8 };
        assert_eq!(board.intrinsic_size(), (u32::MAX, u32::MAX));
    }
}
