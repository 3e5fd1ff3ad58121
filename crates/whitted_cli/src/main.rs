use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use whitted_core::{load_scene, SceneDescription};
use whitted_renderer::{render, render_parallel, CancelToken, RenderSettings, Scene};

const USAGE: &str = "Usage: whitted [SCENE.json] [-o OUT.png] [--threads N] [--sequential] [--dump-scene]

Renders SCENE.json, or the built-in reference scene when no file is given.

Options:
  -o, --output PATH   Output PNG (default: output.png)
  --threads N         Worker threads, 0 = one per core (default: 0)
  --sequential        Render on the main thread only
  --dump-scene        Print the scene as JSON and exit
  -h, --help          Show this message";

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
struct Args {
    scene: Option<PathBuf>,
    output: PathBuf,
    threads: usize,
    sequential: bool,
    dump_scene: bool,
    help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            scene: None,
            output: PathBuf::from("output.png"),
            threads: 0,
            sequential: false,
            dump_scene: false,
            help: false,
        }
    }
}

impl Args {
    /// Parse arguments, not including the program name.
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-o" | "--output" => {
                    let path = args.next().context("missing path after --output")?;
                    parsed.output = PathBuf::from(path);
                }
                "--threads" => {
                    let count = args.next().context("missing count after --threads")?;
                    parsed.threads = count
                        .parse()
                        .with_context(|| format!("invalid thread count '{}'", count))?;
                }
                "--sequential" => parsed.sequential = true,
                "--dump-scene" => parsed.dump_scene = true,
                "-h" | "--help" => parsed.help = true,
                flag if flag.starts_with('-') => bail!("unknown option '{}'", flag),
                path => {
                    if parsed.scene.is_some() {
                        bail!("more than one scene file given");
                    }
                    parsed.scene = Some(PathBuf::from(path));
                }
            }
        }

        Ok(parsed)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let description = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, using the reference scene");
            SceneDescription::reference()
        }
    };

    if args.dump_scene {
        println!("{}", serde_json::to_string_pretty(&description)?);
        return Ok(());
    }

    let scene = Scene::from_description(&description).context("invalid scene")?;
    let cancel = CancelToken::new();

    let film = if args.sequential {
        render(&scene, &cancel)?
    } else {
        let settings = RenderSettings {
            threads: args.threads,
            ..RenderSettings::default()
        };
        render_parallel(&scene, &settings, &cancel)?
    };

    film.finalize()
        .save_png(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
