use clap::{Parser, Subcommand};
use corona::{Easing, Point, Rect, Selector, SelectionItem, Settings, layout};

#[derive(Parser, Debug)]
#[command(name = "corona", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
struct Geometry {
    /// Number of sectors (2 to 20)
    #[arg(short = 'n', long)]
    count: usize,

    /// Side of the square drawing area in pixels
    #[arg(short = 's', long, default_value_t = 400.0)]
    size: f64,

    /// Logical units to pixels
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Expanded minus baseline radius, in logical units
    #[arg(long, default_value_t = corona::DEFAULT_MAX_OFFSET)]
    max_offset: f64,

    #[arg(long, default_value_t = Easing::default())]
    easing: Easing,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print every sector's span, rect and icon center.
    Sectors {
        #[command(flatten)]
        geometry: Geometry,
    },
    /// Print the sector hit by a pointer, or "none".
    Locate {
        #[command(flatten)]
        geometry: Geometry,

        /// Sector currently selected (drawn expanded)
        #[arg(long)]
        selected: Option<i32>,

        x: f64,
        y: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sectors { geometry } => print_sectors(&geometry),
        Commands::Locate {
            geometry,
            selected,
            x,
            y,
        } => locate(&geometry, selected, Point::new(x, y)),
    }
}

fn build_selector(geometry: &Geometry) -> anyhow::Result<Selector> {
    let mut settings = Settings {
        scale_factor: geometry.scale,
        ..Settings::default()
    };
    settings.animation.max_offset = geometry.max_offset;
    settings.animation.easing = geometry.easing;

    let items = (0..geometry.count)
        .map(|i| SelectionItem::new(format!("sector-{i}"), "#808080"))
        .collect();

    let mut selector = Selector::new(settings);
    selector.set_options(items)?;
    selector.resize(Rect::from_size(geometry.size, geometry.size));
    Ok(selector)
}

fn print_sectors(geometry: &Geometry) -> anyhow::Result<()> {
    let selector = build_selector(geometry)?;

    for index in 0..selector.item_count() {
        let sector = selector.sector(index);
        let icon = layout::icon_center(sector.span.mid(), sector.rect);
        println!(
            "{:>2}  {:>7.2}..{:<7.2}  rect ({:.1}, {:.1}, {:.1}, {:.1})  icon ({:.1}, {:.1})",
            index,
            sector.span.start,
            sector.span.end(),
            sector.rect.left,
            sector.rect.top,
            sector.rect.right,
            sector.rect.bottom,
            icon.x,
            icon.y
        );
    }
    Ok(())
}

fn locate(geometry: &Geometry, selected: Option<i32>, pointer: Point) -> anyhow::Result<()> {
    let mut selector = build_selector(geometry)?;
    if let Some(selected) = selected {
        selector.restore_selection(selected);
    }

    let hit = corona::hit::locate(
        pointer,
        selector.layout().bounding_square(),
        selector.item_count(),
        |i| selector.sector_rect(i),
    );
    match hit {
        Some(index) => println!("{}", index),
        None => println!("none"),
    }
    Ok(())
}
