use life_bench::{
    config::{self, Settings},
    draw,
    proc::Board,
    timer::Stopwatch,
};

use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let matches = config::app().get_matches();
    let settings = Settings::from_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging()?;
    debug!(?settings, "parsed settings");

    let mut board = initial_board(&settings)?;
    info!(
        width = board.width(),
        height = board.height(),
        population = board.population(),
        generations = settings.generations,
        "starting run"
    );

    let mut out = std::io::stdout();
    let mut timer = Stopwatch::new();
    timer.start()?;
    while board.generation() < settings.generations {
        if settings.show {
            draw::write_generation(&board, &mut out)?;
        }
        board.step(1);
    }
    timer.stop()?;

    let elapsed = timer.elapsed().context("could not measure the run")?;
    info!(population = board.population(), "run finished");
    println!("This took: {elapsed}");
    Ok(())
}

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("life_bench=warn"))?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(filter),
    )?;
    Ok(())
}

fn initial_board(settings: &Settings) -> anyhow::Result<Board> {
    if let Some(path) = &settings.pattern {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read pattern {}", path.display()))?;
        let board = text
            .parse::<Board>()
            .with_context(|| format!("invalid pattern {}", path.display()))?;
        return Ok(board);
    }

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut board = Board::new(settings.width, settings.height);
    board.randomize(&mut rng, settings.density);
    Ok(board)
}
