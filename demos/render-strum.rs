// Copyright (c) 2024 Mike Tsao

//! The `render-strum` example writes a strummed chord to a WAV file.

use clap::{Parser, ValueEnum};
use plectrum::{prelude::*, util::export_to_wav};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Preset {
    #[default]
    Guitar,
    Ukulele,
}

#[derive(Parser, Debug)]
#[clap(author, about, long_about = None)]
struct Args {
    /// Chord shape, lowest string first, e.g. x32010 or x,10,12,12,11,10
    chord: String,

    /// Where to write the WAV file
    #[clap(short = 'o', long, default_value = "strum.wav")]
    output: std::path::PathBuf,

    /// Built-in instrument
    #[clap(short = 'p', long, value_enum, default_value_t = Preset::Guitar)]
    preset: Preset,

    /// JSON instrument definition; overrides --preset
    #[clap(short = 'i', long)]
    instrument: Option<std::path::PathBuf>,

    /// Strum upward instead of downward
    #[clap(short = 'u', long)]
    up: bool,

    /// Seconds between string onsets
    #[clap(short = 'd', long, default_value_t = 0.03)]
    delay: f64,

    /// Seconds each string rings; defaults to the instrument's
    #[clap(short = 'v', long)]
    vibration: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let instrument = match &args.instrument {
        Some(path) => serde_json::from_reader::<_, PluckedStringInstrument>(
            std::io::BufReader::new(std::fs::File::open(path)?),
        )?,
        None => match args.preset {
            Preset::Guitar => PluckedStringInstrument::guitar(),
            Preset::Ukulele => PluckedStringInstrument::ukulele(),
        },
    };
    let synthesizer = Synthesizer::new(instrument);

    let chord: Chord = args.chord.parse()?;
    let direction = if args.up { Direction::Up } else { Direction::Down };
    let velocity = Velocity::new(direction, Seconds(args.delay))?;
    let strum = synthesizer.strum_strings(&chord, velocity, args.vibration.map(Seconds))?;

    // The overlay sums strings; bring the mix back under full scale.
    let peak = strum.peak();
    let strum = if peak > 1.0 {
        strum.iter().map(|s| s / peak).collect()
    } else {
        strum
    };
    export_to_wav(&strum, synthesizer.sample_rate(), &args.output)?;
    eprintln!(
        "Wrote {} samples of {chord} to {}",
        strum.len(),
        args.output.display()
    );
    Ok(())
}
