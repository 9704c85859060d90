use crate::{commands::common, io::FileOrStdin};
use anyhow::{Context, Result, bail};
use clap::{self, Parser};
use pick_nim::{
    drawing::{Draw, svg, tiny_skia},
    numeric::v2f::V2f,
    outcome_table::{OutcomeTable, csv},
    plot::{Plot, PlotRegion},
};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

const DATA_DIR: &str = "data";
const IMAGES_DIR: &str = "imgs";

/// Figure size in inches
#[derive(Debug, Clone, Copy)]
pub struct FigSize {
    width: u32,
    height: u32,
}

impl FromStr for FigSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || format!("figsize must be width,height, got '{s}'");
        let (width, height) = s.split_once(',').ok_or_else(err)?;
        Ok(FigSize {
            width: width.trim().parse().map_err(|_| err())?,
            height: height.trim().parse().map_err(|_| err())?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    fn from_path(path: &str) -> Result<ImageFormat> {
        let extension = Path::new(path)
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            _ => bail!("Unsupported image format of '{path}', use .png or .svg"),
        }
    }
}

/// Render outcomes of a range of positions, generating the data first if needed
#[derive(Parser, Debug)]
pub struct Args {
    /// Minimum previous pick displayed on output
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    x_min: i64,

    /// Maximum previous pick displayed on output
    #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
    x_max: i64,

    /// Minimum number of stones left displayed on output
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    y_min: i64,

    /// Maximum number of stones left displayed on output
    #[arg(long, default_value_t = 2000, allow_hyphen_values = true)]
    y_max: i64,

    /// Filename of output image, .png or .svg
    #[arg(long)]
    img_file: Option<String>,

    /// Filename of data to read instead of generating new data
    #[arg(long)]
    data_file: Option<String>,

    /// Width and height of the image in inches
    #[arg(long, default_value = "16,16")]
    figsize: FigSize,

    /// Dots per inch of the image
    #[arg(short, long, default_value_t = 100)]
    dpi: u32,

    /// Display the 2i, 3i and 4i curves
    #[arg(short = 'i', long)]
    show_i_curves: bool,

    /// Display the upper and lower curves
    #[arg(short = 'u', long)]
    show_upper_lower_curves: bool,
}

fn ensure_dir(dir: &str) -> Result<()> {
    if !Path::new(dir).is_dir() {
        eprintln!("Creating {dir} directory");
        fs::create_dir_all(dir).context(format!("Could not create directory '{dir}'"))?;
    }
    Ok(())
}

fn generate_table(region: &PlotRegion, data_file: &str) -> Result<OutcomeTable> {
    eprintln!("Generating data");
    let table = OutcomeTable::classify(region.y_max(), region.x_max())?;

    let mut w = BufWriter::new(
        File::create(data_file).context(format!("Could not create file '{data_file}'"))?,
    );
    csv::write_csv(&table, &mut w)
        .and_then(|()| w.flush())
        .context(format!("Could not write to file '{data_file}'"))?;
    eprintln!("Data wrote to: {data_file}");

    Ok(table)
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    let region = PlotRegion::new(args.x_min, args.x_max, args.y_min, args.y_max)?;
    if args.dpi == 0 {
        bail!("dpi must be >= 1");
    }

    ensure_dir(DATA_DIR)?;
    ensure_dir(IMAGES_DIR)?;

    let file_stem = format!(
        "{}-{}_{}-{}",
        region.y_min(),
        region.y_max(),
        region.x_min(),
        region.x_max()
    );

    let data_file = args
        .data_file
        .unwrap_or_else(|| format!("{DATA_DIR}/{file_stem}.csv"));
    let table = if Path::new(&data_file).is_file() {
        common::load_or_classify(
            Some(&FileOrStdin::FilePath(data_file)),
            region.y_max(),
            region.x_max(),
        )?
    } else {
        generate_table(&region, &data_file)?
    };

    let img_file = args
        .img_file
        .unwrap_or_else(|| format!("{IMAGES_DIR}/{file_stem}.png"));
    let format = ImageFormat::from_path(&img_file)?;

    let dpi = args.dpi as f32;
    let size = V2f::from([args.figsize.width as f32, args.figsize.height as f32]) * dpi;
    let plot = Plot::new(&table, region, size)?
        .with_dpi(dpi)
        .with_i_curves(args.show_i_curves)
        .with_upper_lower_curves(args.show_upper_lower_curves);

    eprintln!("Generating plot...");
    let mut w = BufWriter::new(
        File::create(&img_file).context(format!("Could not create file '{img_file}'"))?,
    );
    let canvas_size = plot.required_canvas().size();
    match format {
        ImageFormat::Png => {
            let mut canvas = tiny_skia::Canvas::new(canvas_size)?;
            plot.draw(&mut canvas);
            let png_bytes = canvas.to_png()?;
            w.write_all(&png_bytes)
                .context(format!("Could not write to file '{img_file}'"))?;
        }
        ImageFormat::Svg => {
            let mut canvas = svg::Canvas::new(canvas_size);
            plot.draw(&mut canvas);
            w.write_all(canvas.to_svg().as_bytes())
                .context(format!("Could not write to file '{img_file}'"))?;
        }
    }
    w.flush()
        .context(format!("Could not write to file '{img_file}'"))?;
    eprintln!("Plot available at {img_file}");

    Ok(())
}
