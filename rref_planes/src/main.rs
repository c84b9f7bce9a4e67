use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use rand::{rngs::StdRng, SeedableRng};
use rref_planes::geometry::SceneGeometry;
use rref_planes::linear_system::Matrix;
use rref_planes::workbench::{SampleSystem, Workbench};

#[derive(Parser, Debug)]
#[command(author, version, about = "Step through the row reduction of a 3-unknown linear system", long_about = None)]
struct Args {
    /// One of the worked example systems
    #[arg(short, long, value_enum, default_value_t = SampleSystem::Unique)]
    pub sample: SampleSystem,

    /// Augmented matrix, rows separated by ';', e.g. "1,1,1,3; 1,-1,1,1; 2,1,-1,2"
    #[arg(short, long, conflicts_with = "random")]
    pub matrix: Option<String>,

    /// Reduce a random integer system instead
    #[arg(short, long)]
    pub random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Print the planes, lines and points of every step
    #[arg(short, long)]
    pub geometry: bool,
}

fn build_workbench(args: &Args) -> Result<Workbench> {
    if let Some(matrix) = &args.matrix {
        let matrix: Matrix = matrix.parse().context("parsing --matrix")?;
        return Workbench::new(matrix);
    }
    let mut workbench = Workbench::from_sample(args.sample);
    if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        workbench.randomize(&mut rng)?;
    }
    Ok(workbench)
}

fn describe_scene(scene: &SceneGeometry) {
    for (idx, plane) in scene.planes.iter() {
        let pose = plane.pose;
        if pose.is_degenerate {
            println!(
                "  plane {}: 0 = {:.2}, never satisfied",
                idx + 1,
                plane.equation.constant
            );
        } else if !pose.is_renderable() {
            println!("  plane {}: 0 = 0, holds everywhere", idx + 1);
        } else {
            println!(
                "  plane {}: through {:.2} with normal {:.2}",
                idx + 1,
                pose.position,
                pose.normal
            );
        }
    }
    for ((i, j), line) in scene.lines.iter() {
        let (start, end) = line.segment();
        println!("  line {}∩{}: {start:.2} to {end:.2}", i + 1, j + 1);
    }
    for ((i, j, k), point) in scene.points.iter() {
        println!("  point {}∩{}∩{}: {point:.2}", i + 1, j + 1, k + 1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut workbench = build_workbench(&args)?;
    let summary = workbench.compute()?.summary.clone();
    let history = workbench.history().context("history missing after compute")?;
    for (idx, step) in history.steps().iter().enumerate() {
        println!("step {idx}: {}", step.operation);
        print!("{}", step.matrix);
        if args.geometry {
            let scene = SceneGeometry::from_matrix(&step.matrix)
                .with_context(|| format!("building geometry for step {idx}"))?;
            describe_scene(&scene);
        }
        println!();
    }
    log::info!(
        "{} row operations, rank {}",
        history.len() - 1,
        workbench.analysis().map(|a| a.rank).unwrap_or_default()
    );
    println!("{summary}");
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(args) {
        eprintln!("ran into error: {err:?}");
        process::exit(1)
    }
}
