use likert_rs::api::{LikertChart, LikertConfig};
use likert_rs::core::ResponseTable;
use likert_rs::survey::{TallyOptions, tally_responses_from_path};
use likert_rs::telemetry::init_default_tracing;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "cairo-backend")]
use likert_rs::render::CairoRenderer;
#[cfg(not(feature = "cairo-backend"))]
use likert_rs::render::NullRenderer;

const DEFAULT_SURVEY_PATH: &str =
    "dataset/2017 Cdn Research Software Developer Survey - Public data.csv";
const OPEN_CODE_QUESTIONS: [&str; 2] = [
    "When you release code, how often do you use an open source license?",
    "When you release code or data, how often do you assign a Digital Object Identifier (DOI) to it?",
];
const NOT_ANSWERED: &str = "Prefer not to answer";

#[derive(Debug)]
struct CliArgs {
    survey: PathBuf,
    out_dir: PathBuf,
    config: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            LikertConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => LikertConfig::default(),
    };
    fs::create_dir_all(&args.out_dir)
        .map_err(|err| format!("failed to create `{}`: {err}", args.out_dir.display()))?;

    if args.survey.exists() {
        let options = TallyOptions::default().excluding([NOT_ANSWERED]);
        let table = tally_responses_from_path(&args.survey, &OPEN_CODE_QUESTIONS, &options)
            .map_err(|err| err.to_string())?;
        render_table("open_code", &table, config.clone(), &args.out_dir)?;
    } else {
        eprintln!(
            "survey file `{}` not found, skipping sample dataset",
            args.survey.display()
        );
    }

    render_table("dummy", &dummy_table()?, config, &args.out_dir)
}

fn dummy_table() -> Result<ResponseTable, String> {
    ResponseTable::from_rows(
        &["SD", "D", "N", "A", "SA", "TEST"],
        vec![
            ("Key 1", vec![1.0, 2.0, 3.0, 4.0, 5.0, 2.0]),
            ("Key B", vec![5.0, 6.0, 7.0, 8.0, 5.0, 2.0]),
            ("Key III", vec![10.0, 4.0, 2.0, 10.0, 5.0, 2.0]),
        ],
    )
    .map_err(|err| err.to_string())
}

#[cfg(feature = "cairo-backend")]
fn render_table(
    name: &str,
    table: &ResponseTable,
    config: LikertConfig,
    out_dir: &Path,
) -> Result<(), String> {
    let renderer = CairoRenderer::new(config.viewport.width as i32, config.viewport.height as i32)
        .map_err(|err| err.to_string())?;
    let mut chart = LikertChart::new(renderer, config).map_err(|err| err.to_string())?;
    let layout = chart.render(table).map_err(|err| err.to_string())?;
    write_layout(name, &layout, out_dir)?;

    let png_path = out_dir.join(format!("{name}.png"));
    chart
        .renderer()
        .write_png(&png_path)
        .map_err(|err| err.to_string())?;
    println!("wrote {}", png_path.display());
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn render_table(
    name: &str,
    table: &ResponseTable,
    config: LikertConfig,
    out_dir: &Path,
) -> Result<(), String> {
    let mut chart =
        LikertChart::new(NullRenderer::default(), config).map_err(|err| err.to_string())?;
    let layout = chart.render(table).map_err(|err| err.to_string())?;
    write_layout(name, &layout, out_dir)
}

fn write_layout(
    name: &str,
    layout: &likert_rs::core::DivergingBarLayout,
    out_dir: &Path,
) -> Result<(), String> {
    let path = out_dir.join(format!("{name}_layout.json"));
    let payload = layout.to_json_pretty().map_err(|err| err.to_string())?;
    fs::write(&path, payload)
        .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut survey = PathBuf::from(DEFAULT_SURVEY_PATH);
    let mut out_dir = PathBuf::from("target/likert_demo");
    let mut config = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .map(PathBuf::from)
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--survey" => survey = value("--survey")?,
            "--out-dir" => out_dir = value("--out-dir")?,
            "--config" => config = Some(value("--config")?),
            _ => {
                return Err(
                    "usage: likert_demo [--survey <csv>] [--out-dir <dir>] [--config <json>]"
                        .to_owned(),
                );
            }
        }
    }

    Ok(CliArgs {
        survey,
        out_dir,
        config,
    })
}
