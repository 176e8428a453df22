use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use storydeck::constants::*;
use storydeck::{DeckConfig, LogSink, Slide, Simulation};

mod deck_dir;
#[cfg(feature = "viewer")]
mod texture_loader;
#[cfg(feature = "viewer")]
mod viewer;

#[derive(Parser)]
#[command(name = "storydeck", about = "Play a directory of images as a scroll-by-slide story deck")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open a window and read the deck with the arrow keys or the mouse
    #[cfg(feature = "viewer")]
    View {
        /// Directory of slide background images, played in file name order
        image_directory: PathBuf,

        /// Treat mouse clicks as touch taps (tap advances)
        #[arg(long)]
        touch: bool,

        #[command(flatten)]
        story: StoryArgs,
    },
    /// Walk the deck headlessly and log the analytics it produces
    Simulate {
        /// Directory of slide images; a synthetic deck is used when omitted
        image_directory: Option<PathBuf>,

        /// Size of the synthetic deck
        #[arg(long, default_value_t = 12)]
        slides: usize,

        #[arg(long, default_value_t = 50)]
        steps: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Window width driving the device asset variant
        #[arg(long, default_value_t = 1440.0)]
        width: f32,

        #[arg(long, default_value_t = 900.0)]
        height: f32,

        #[command(flatten)]
        story: StoryArgs,
    },
}

#[derive(Args)]
struct StoryArgs {
    /// Non-content slides (credits, share card) after the story body
    #[arg(long, default_value_t = TRAILING_SLIDES)]
    trailing: usize,

    /// Where the "next post" link goes
    #[arg(long)]
    next_post_url: Option<String>,
}

impl StoryArgs {
    fn config(&self) -> DeckConfig {
        let config = DeckConfig::default().with_trailing_slides(self.trailing);
        match &self.next_post_url {
            Some(url) => config.with_next_post_url(url.clone()),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "viewer")]
        Command::View { image_directory, touch, story } => view(&image_directory, touch, &story),
        Command::Simulate { image_directory, slides, steps, seed, width, height, story } => {
            let (config, deck) = match &image_directory {
                Some(dir) => load_deck(dir, story.config())?,
                None => {
                    let deck = (0..slides)
                        .map(|i| Slide::new().with_background_ref(&format!("slide-{:02}.jpg", i)))
                        .collect();
                    (story.config(), deck)
                }
            };
            let simulation = Simulation {
                steps,
                seed,
                window: (width, height),
                ..Simulation::default()
            };
            let deck = simulation.run(config, deck, LogSink)?;
            info!(
                "Finished at slide {}/{} with {:.0}% completion",
                deck.current() + 1,
                deck.len(),
                deck.completion().completion() * 100.0
            );
            Ok(())
        }
    }
}

fn load_deck(dir: &std::path::Path, config: DeckConfig) -> Result<(DeckConfig, Vec<Slide>)> {
    let paths = deck_dir::load_sorted_image_paths(dir, &config.mobile_suffix)
        .with_context(|| format!("Error loading images from '{}'", dir.display()))?;
    info!("Loaded {} slides from {}", paths.len(), dir.display());
    let config = config.with_asset_root(deck_dir::asset_root(dir));
    Ok((config, deck_dir::slides_from_paths(&paths)))
}

#[cfg(feature = "viewer")]
fn view(image_directory: &std::path::Path, touch: bool, story: &StoryArgs) -> Result<()> {
    use raylib::prelude::TraceLogLevel;
    use storydeck::{DeckController, SystemClock};

    let (config, slides) = load_deck(image_directory, story.config())?;

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Story Deck")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let clock = SystemClock::new();
    let deck = DeckController::new(
        config,
        slides,
        rl.get_screen_width() as f32,
        rl.get_screen_height() as f32,
        LogSink,
        clock,
    )?;

    viewer::Viewer::new(deck, clock, touch).run(&mut rl, &thread);
    Ok(())
}
