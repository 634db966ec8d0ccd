//! FrameKit CLI
//!
//! Command-line interface for running and benchmarking the frame processor.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use framekit::processing::blur;
use framekit::{
    EdgeThresholds, FrameFormat, FrameProcessor, ProcessingMode, ProcessorConfig, Resolution,
};

/// Processing mode for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Converted camera colors
    Passthrough,
    /// Perceptual grayscale
    Grayscale,
    /// White edges on black
    Edges,
}

impl From<Mode> for ProcessingMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Passthrough => ProcessingMode::PassThrough,
            Mode::Grayscale => ProcessingMode::Grayscale,
            Mode::Edges => ProcessingMode::EdgeDetect,
        }
    }
}

#[derive(Parser)]
#[command(name = "framekit")]
#[command(about = "Real-time camera frame engine - NV21 conversion, grayscale, edge detection")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version, defaults and buffer sizes
    Info {
        /// Frame width
        #[arg(long, default_value = "640")]
        width: u32,

        /// Frame height
        #[arg(long, default_value = "480")]
        height: u32,
    },

    /// Process one raw NV21 frame into raw RGBA
    Process {
        /// Raw NV21 input file
        #[arg(short, long)]
        input: PathBuf,

        /// Raw RGBA output file
        #[arg(short, long)]
        output: PathBuf,

        /// TOML config (resolution, mode, thresholds)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Frame width (overrides config)
        #[arg(long)]
        width: Option<u32>,

        /// Frame height (overrides config)
        #[arg(long)]
        height: Option<u32>,

        /// Processing mode (overrides config)
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Low edge threshold (overrides config)
        #[arg(long)]
        low: Option<f64>,

        /// High edge threshold (overrides config)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Run the processor over synthetic frames
    Bench {
        /// Frame width
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Frame height
        #[arg(long, default_value = "720")]
        height: u32,

        /// Processing mode
        #[arg(short, long, value_enum, default_value = "edges")]
        mode: Mode,

        /// Number of frames to process
        #[arg(short, long, default_value = "300")]
        frames: u32,
    },

    /// List processing modes and their integer tags
    Modes,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("framekit=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { width, height } => cmd_info(width, height),
        Commands::Process {
            input,
            output,
            config,
            width,
            height,
            mode,
            low,
            high,
        } => {
            let mut config = match config {
                Some(path) => ProcessorConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => ProcessorConfig::default(),
            };
            if let Some(w) = width {
                config.resolution.width = w;
            }
            if let Some(h) = height {
                config.resolution.height = h;
            }
            if let Some(m) = mode {
                config.mode = m.into();
            }
            config.thresholds.low = low.unwrap_or(config.thresholds.low);
            config.thresholds.high = high.unwrap_or(config.thresholds.high);
            cmd_process(input, output, config)
        }
        Commands::Bench {
            width,
            height,
            mode,
            frames,
        } => cmd_bench(width, height, mode.into(), frames),
        Commands::Modes => cmd_modes(),
    }
}

fn cmd_info(width: u32, height: u32) -> anyhow::Result<()> {
    let res = Resolution::new(width, height);
    let defaults = EdgeThresholds::default();

    println!("FrameKit {}", framekit::VERSION);
    println!("==============\n");
    println!("Default edge thresholds: {}", defaults);
    println!(
        "Blur: {k}x{k} Gaussian, sigma {}",
        blur::SIGMA,
        k = blur::KERNEL_SIZE
    );
    println!("\nBuffer sizes at {}:", res);
    println!("  NV21 input:  {} bytes", FrameFormat::Nv21.frame_size(res));
    println!("  RGBA output: {} bytes", FrameFormat::Rgba.frame_size(res));
    println!("  Gray plane:  {} bytes", FrameFormat::Gray.frame_size(res));
    if !res.is_even() {
        println!("\nWarning: NV21 frames need even width and height");
    }

    Ok(())
}

fn cmd_process(input: PathBuf, output: PathBuf, config: ProcessorConfig) -> anyhow::Result<()> {
    let res = config.resolution;
    let frame = std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;

    let mut processor = FrameProcessor::from_config(&config)?;
    let mut rgba = vec![0u8; FrameFormat::Rgba.frame_size(res)];
    processor.process_frame(&frame, &mut rgba, config.mode)?;

    std::fs::write(&output, &rgba).with_context(|| format!("writing {}", output.display()))?;

    println!("Processed {} frame ({}) -> {}", res, config.mode, output.display());
    println!("  Thresholds: {}", processor.edge_thresholds());
    println!("  Time: {} us", processor.stats().last_frame_us);

    Ok(())
}

fn cmd_bench(width: u32, height: u32, mode: ProcessingMode, frames: u32) -> anyhow::Result<()> {
    println!("FrameKit Benchmark");
    println!("==================\n");

    let res = Resolution::new(width, height);
    println!("Resolution: {}", res);
    println!("Mode: {}", mode);
    println!("Frames: {}", frames);
    println!();

    let config = ProcessorConfig::default()
        .with_resolution(width, height)
        .with_mode(mode);
    let mut processor = FrameProcessor::from_config(&config)?;

    // Diagonal gradient with a bright square, so edges have something to find
    let w = width as usize;
    let h = height as usize;
    let mut frame: Vec<u8> = (0..w * h)
        .map(|i| {
            let (x, y) = (i % w, i / w);
            if x > w / 4 && x < w / 2 && y > h / 4 && y < h / 2 {
                230
            } else {
                ((x + y) % 200) as u8 + 16
            }
        })
        .collect();
    frame.resize(FrameFormat::Nv21.frame_size(res), 128);
    let mut output = vec![0u8; FrameFormat::Rgba.frame_size(res)];

    let start = std::time::Instant::now();
    for _ in 0..frames {
        processor.process_frame(&frame, &mut output, mode)?;
    }
    let elapsed = start.elapsed();

    let fps = frames as f64 / elapsed.as_secs_f64();
    let ms_per_frame = elapsed.as_secs_f64() * 1000.0 / frames.max(1) as f64;

    println!("Results:");
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  FPS: {:.1}", fps);
    println!("  ms/frame: {:.2}", ms_per_frame);
    println!(
        "  Realtime capable (30fps): {}",
        if fps >= 30.0 { "Yes" } else { "No" }
    );
    println!(
        "  Realtime capable (60fps): {}",
        if fps >= 60.0 { "Yes" } else { "No" }
    );

    let stats = processor.stats();
    println!("\nProcessor Stats:");
    println!("  Frames processed: {}", stats.frames_processed);
    println!("  Frames failed: {}", stats.frames_failed);

    Ok(())
}

fn cmd_modes() -> anyhow::Result<()> {
    println!("Processing Modes");
    println!("================\n");

    for mode in ProcessingMode::ALL {
        let description = match mode {
            ProcessingMode::PassThrough => "NV21 converted to RGBA, unmodified",
            ProcessingMode::Grayscale => "BT.601 luma, expanded to RGBA",
            ProcessingMode::EdgeDetect => "5x5 Gaussian + hysteresis edges, white on black",
        };
        println!("  {}  {:<12} - {}", mode.as_i32(), mode.name(), description);
    }

    println!("\nUsage: framekit process --mode <name> ...");

    Ok(())
}
