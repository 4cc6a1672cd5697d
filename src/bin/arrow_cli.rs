use clap::{Args, Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::fs;

use arrow_engine::{
    compare_request, evaluate, evaluate_request, ArrowSetup, PointWeightModel, SetupReport,
};

#[derive(Parser)]
#[command(name = "arrow")]
#[command(version = "0.1.0")]
#[command(about = "Arrow setup ballistics calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single arrow setup over the draw-weight sweep
    Evaluate {
        #[command(flatten)]
        setup: SetupArgs,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Include the full 30-point curve table (table output only)
        #[arg(long)]
        full: bool,
    },

    /// Compare two setups side by side
    Compare {
        /// First setup as a JSON parameter map, or @path to a JSON file
        #[arg(long, default_value = "{}")]
        setup1: String,

        /// Second setup as a JSON parameter map, or @path to a JSON file
        #[arg(long, default_value = "{}")]
        setup2: String,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display engine information
    Info,
}

/// The 18 setup parameters, defaults matching the engine's.
#[derive(Args)]
struct SetupArgs {
    /// Shaft spine rating
    #[arg(long, default_value = "200")]
    spine: f64,

    /// Shaft mass per inch (grains)
    #[arg(long, default_value = "10.7")]
    gpi: f64,

    /// Chosen draw weight (pounds)
    #[arg(short = 'p', long, default_value = "71")]
    poundage: f64,

    /// Bow IBO speed rating (fps)
    #[arg(long, default_value = "335")]
    ibo: f64,

    /// Arrow length (inches)
    #[arg(short = 'l', long, default_value = "28.25")]
    arrow_length: f64,

    /// Nock throat to shaft end (inches)
    #[arg(long, default_value = "0.5")]
    nock_throat_adder: f64,

    /// Nock weight (grains)
    #[arg(long, default_value = "6")]
    nock_weight: f64,

    /// Wrap weight (grains)
    #[arg(long, default_value = "0")]
    wrap_weight: f64,

    /// Wrap length (inches)
    #[arg(long, default_value = "4")]
    wrap_length: f64,

    /// Fletch leading edge to shaft end (inches)
    #[arg(long, default_value = "0.75")]
    fletch_distance: f64,

    /// Number of fletches
    #[arg(long, default_value = "4")]
    fletch_count: u32,

    /// Weight per fletch (grains)
    #[arg(long, default_value = "5")]
    fletch_weight: f64,

    /// Fletch length (inches)
    #[arg(long, default_value = "2.25")]
    fletch_length: f64,

    /// Fletch height (inches)
    #[arg(long, default_value = "0.465")]
    fletch_height: f64,

    /// Draw length (inches)
    #[arg(short = 'd', long, default_value = "29")]
    draw_length: f64,

    /// Drag coefficient
    #[arg(long, default_value = "2.0")]
    coef_drag: f64,

    /// Shaft diameter (inches)
    #[arg(long, default_value = "0.166")]
    arrow_diam: f64,

    /// Fletch helical offset (degrees)
    #[arg(long, default_value = "3")]
    fletch_offset: f64,
}

impl From<SetupArgs> for ArrowSetup {
    fn from(args: SetupArgs) -> Self {
        ArrowSetup {
            spine: args.spine,
            arrow_gpi: args.gpi,
            draw_weight: args.poundage,
            ibo: args.ibo,
            arrow_length: args.arrow_length,
            nock_throat_adder: args.nock_throat_adder,
            nock_weight: args.nock_weight,
            wrap_weight: args.wrap_weight,
            wrap_length: args.wrap_length,
            fletch_distance: args.fletch_distance,
            fletch_count: args.fletch_count,
            fletch_weight: args.fletch_weight,
            fletch_length: args.fletch_length,
            fletch_height: args.fletch_height,
            draw_length: args.draw_length,
            drag_coefficient: args.coef_drag,
            shaft_diameter: args.arrow_diam,
            fletch_offset: args.fletch_offset,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            setup,
            output,
            full,
        } => {
            let setup: ArrowSetup = setup.into();
            match output {
                OutputFormat::Json => {
                    let payload = serde_json::to_value(&setup)?;
                    let response = evaluate_request(&payload);
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                OutputFormat::Table => {
                    let report = evaluate(&setup, &PointWeightModel::default());
                    display_report_table(&setup, &report, full);
                }
                OutputFormat::Csv => {
                    let report = evaluate(&setup, &PointWeightModel::default());
                    display_report_csv(&report);
                }
            }
        }

        Commands::Compare {
            setup1,
            setup2,
            output,
        } => {
            let payload = serde_json::json!({
                "setup1": parse_setup_arg(&setup1)?,
                "setup2": parse_setup_arg(&setup2)?,
            });
            let response = compare_request(&payload);
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
                _ => display_comparison_table(&response)?,
            }
        }

        Commands::Info => {
            println!("Arrow Engine v0.1.0");
            println!();
            println!("Derived arrow setup properties over a 30-90 lb draw-weight sweep:");
            println!("  - optimal point weight (spine regression model)");
            println!("  - total arrow mass and front-of-center balance");
            println!("  - muzzle velocity, kinetic energy, momentum");
            println!("  - downrange decay at 20/40/60 yards (drag integration)");
        }
    }

    Ok(())
}

/// A setup argument is either inline JSON or `@path` to a JSON file.
fn parse_setup_arg(arg: &str) -> Result<serde_json::Value, Box<dyn Error>> {
    let text = if let Some(path) = arg.strip_prefix('@') {
        fs::read_to_string(path)?
    } else {
        arg.to_string()
    };
    Ok(serde_json::from_str(&text)?)
}

fn display_report_table(setup: &ArrowSetup, report: &SetupReport, full: bool) {
    let s = &report.selected;
    let chosen = report.curves.draw_weights[report.selected_index];

    println!("=== ARROW SETUP @ {:.1} lb ===", chosen);
    println!("(nearest sweep point to the chosen {} lb)", setup.draw_weight);
    println!();
    println!("Optimal point weight: {:>8.1} gr", s.optimal_point_weight);
    println!("Total arrow mass:     {:>8.1} gr", s.total_arrow_mass);
    println!("Front of center:      {:>8.2} %", s.foc);
    println!("Muzzle velocity:      {:>8.1} fps", s.fps);
    println!("Kinetic energy:       {:>8.1} J", s.ke);
    println!("Momentum:             {:>8.3} kg·m/s", s.momentum);
    println!();
    println!("Downrange (at {:.1} lb):", chosen);
    println!("  Dist | Velocity |   TOF   |    KE   | Momentum");
    println!("  -----|----------|---------|---------|---------");
    for cp in &report.curves.checkpoints {
        let i = report.selected_index;
        println!(
            "  {:>2}yd | {:>7.1}  | {:>6.3}s | {:>6.1}J | {:>7.3}",
            cp.distance_yards, cp.velocity[i], cp.time_of_flight[i], cp.kinetic_energy[i], cp.momentum[i]
        );
    }

    if full {
        println!();
        println!("Full sweep:");
        println!(" Poundage | Point gr | Mass gr |  FOC % |   FPS  |   KE J | Momentum");
        println!(" ---------|----------|---------|--------|--------|--------|---------");
        let c = &report.curves;
        for i in 0..c.draw_weights.len() {
            println!(
                " {:>8.2} | {:>8.1} | {:>7.1} | {:>6.2} | {:>6.1} | {:>6.1} | {:>7.3}",
                c.draw_weights[i],
                c.optimal_point_weight[i],
                c.total_arrow_mass[i],
                c.foc[i],
                c.velocity[i],
                c.kinetic_energy[i],
                c.momentum[i]
            );
        }
    }
}

fn display_report_csv(report: &SetupReport) {
    let c = &report.curves;
    println!(
        "poundage,point_weight_gr,total_mass_gr,foc_pct,fps,ke_j,momentum,\
         fps_20yd,fps_40yd,fps_60yd,tof_20yd,tof_40yd,tof_60yd,\
         ke_20yd,ke_40yd,ke_60yd,momentum_20yd,momentum_40yd,momentum_60yd"
    );
    for i in 0..c.draw_weights.len() {
        let [cp20, cp40, cp60] = &c.checkpoints;
        println!(
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            c.draw_weights[i],
            c.optimal_point_weight[i],
            c.total_arrow_mass[i],
            c.foc[i],
            c.velocity[i],
            c.kinetic_energy[i],
            c.momentum[i],
            cp20.velocity[i],
            cp40.velocity[i],
            cp60.velocity[i],
            cp20.time_of_flight[i],
            cp40.time_of_flight[i],
            cp60.time_of_flight[i],
            cp20.kinetic_energy[i],
            cp40.kinetic_energy[i],
            cp60.kinetic_energy[i],
            cp20.momentum[i],
            cp40.momentum[i],
            cp60.momentum[i],
        );
    }
}

fn display_comparison_table(
    response: &arrow_engine::CompareResponse,
) -> Result<(), Box<dyn Error>> {
    if !response.success {
        return Err(response
            .error
            .clone()
            .unwrap_or_else(|| "comparison failed".to_string())
            .into());
    }
    let a = response.setup1.as_ref().ok_or("missing setup1 output")?;
    let b = response.setup2.as_ref().ok_or("missing setup2 output")?;

    println!("=== SETUP COMPARISON ===");
    println!();
    println!("                      |  Setup 1  |  Setup 2");
    println!("----------------------|-----------|----------");
    println!(
        "Draw weight (lb)      | {:>9.1} | {:>9.1}",
        a.curves.draw_weights[a.selected_index],
        b.curves.draw_weights[b.selected_index]
    );
    println!(
        "Point weight (gr)     | {:>9.1} | {:>9.1}",
        a.values.optimal_point_weight, b.values.optimal_point_weight
    );
    println!(
        "Total mass (gr)       | {:>9.1} | {:>9.1}",
        a.values.total_arrow_mass, b.values.total_arrow_mass
    );
    println!("FOC (%)               | {:>9.2} | {:>9.2}", a.values.foc, b.values.foc);
    println!("Velocity (fps)        | {:>9.1} | {:>9.1}", a.values.fps, b.values.fps);
    println!("Kinetic energy (J)    | {:>9.1} | {:>9.1}", a.values.ke, b.values.ke);
    println!(
        "Momentum (kg·m/s)     | {:>9.3} | {:>9.3}",
        a.values.momentum, b.values.momentum
    );
    Ok(())
}
