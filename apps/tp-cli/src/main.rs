use clap::{Args, Parser, Subcommand};
use tp_core::constants::{ATM_PA, G_PER_CM3_TO_KG_PER_M3, T_AMBIENT_K};
use tp_core::units::{k, pa};
use tp_eos::NewtonConfig;
use tp_fluids::{Fluid, FluidResult, filter_liquid_catalog};
use tracing::info;

#[derive(Parser)]
#[command(name = "tp-cli")]
#[command(about = "Tait liquid properties - density, pressure and sound speed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Liquid density at (T, P)
    Density {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Temperature [K]
        #[arg(long = "t", default_value_t = T_AMBIENT_K)]
        t: f64,
        /// Pressure [Pa]
        #[arg(long = "p", default_value_t = ATM_PA)]
        p: f64,
        /// Acentric factor override (defaults to the fluid's density value)
        #[arg(long)]
        omega: Option<f64>,
    },
    /// Pressure at which the liquid reaches a given density
    Pressure {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Temperature [K]
        #[arg(long = "t", default_value_t = T_AMBIENT_K)]
        t: f64,
        /// Density [kg/m³]
        #[arg(long)]
        rho: f64,
        /// Acentric factor override (defaults to the fluid's density value)
        #[arg(long)]
        omega: Option<f64>,
    },
    /// Speed of sound at (T, P)
    SoundSpeed {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Temperature [K]
        #[arg(long = "t", default_value_t = T_AMBIENT_K)]
        t: f64,
        /// Pressure [Pa]
        #[arg(long = "p", default_value_t = ATM_PA)]
        p: f64,
    },
    /// Density, sound speed and vapor pressure at (T, P)
    State {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Temperature [K]
        #[arg(long = "t", default_value_t = T_AMBIENT_K)]
        t: f64,
        /// Pressure [Pa]
        #[arg(long = "p", default_value_t = ATM_PA)]
        p: f64,
    },
    /// Saturation pressure at T
    VaporPressure {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Temperature [K]
        #[arg(long = "t", default_value_t = T_AMBIENT_K)]
        t: f64,
    },
    /// List supported fluids
    Fluids {
        /// Filter by name, formula or alias
        #[arg(default_value = "")]
        query: String,
    },
}

#[derive(Args)]
struct FluidArgs {
    /// Fluid name or alias (acetone/ace, decafluoropentane/dfp)
    #[arg(long, default_value = "acetone")]
    fluid: String,
    /// Newton step tolerance [Pa]
    #[arg(long)]
    tolerance: Option<f64>,
    /// Newton iteration cap
    #[arg(long)]
    max_iterations: Option<usize>,
}

impl FluidArgs {
    fn build(&self) -> FluidResult<Fluid> {
        let defaults = NewtonConfig::default();
        let newton = NewtonConfig {
            step_tolerance: self.tolerance.unwrap_or(defaults.step_tolerance),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            ..defaults
        };
        Fluid::new(&self.fluid)?.with_newton_config(newton)
    }
}

fn main() -> FluidResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Density { fluid, t, p, omega } => cmd_density(&fluid, t, p, omega),
        Commands::Pressure {
            fluid,
            t,
            rho,
            omega,
        } => cmd_pressure(&fluid, t, rho, omega),
        Commands::SoundSpeed { fluid, t, p } => cmd_sound_speed(&fluid, t, p),
        Commands::State { fluid, t, p } => cmd_state(&fluid, t, p),
        Commands::VaporPressure { fluid, t } => cmd_vapor_pressure(&fluid, t),
        Commands::Fluids { query } => {
            cmd_fluids(&query);
            Ok(())
        }
    }
}

fn cmd_density(args: &FluidArgs, t: f64, p: f64, omega: Option<f64>) -> FluidResult<()> {
    let fluid = args.build()?;
    let rho = fluid.density_with(Some(t), Some(p), omega)?;
    println!("Fluid:       {}", fluid.species());
    println!("Temperature: {t:.2} K");
    println!("Pressure:    {p:.1} Pa");
    println!(
        "Density:     {rho:.4} kg/m³ ({:.6} g/cm³)",
        rho / G_PER_CM3_TO_KG_PER_M3
    );
    Ok(())
}

fn cmd_pressure(args: &FluidArgs, t: f64, rho: f64, omega: Option<f64>) -> FluidResult<()> {
    let fluid = args.build()?;
    let omega = omega.unwrap_or(fluid.constants().omega_density);
    let result = fluid.pressure_solve(t, rho, omega)?;
    info!(iterations = result.iterations, residual = result.residual, "pressure solved");
    println!("Fluid:       {}", fluid.species());
    println!("Temperature: {t:.2} K");
    println!("Density:     {rho:.4} kg/m³");
    println!("Pressure:    {:.3} Pa", result.x);
    println!("Iterations:  {}", result.iterations);
    Ok(())
}

fn cmd_sound_speed(args: &FluidArgs, t: f64, p: f64) -> FluidResult<()> {
    let fluid = args.build()?;
    let c = fluid.sound_speed(t, p)?;
    println!("Fluid:       {}", fluid.species());
    println!("Temperature: {t:.2} K");
    println!("Pressure:    {p:.1} Pa");
    println!("Sound speed: {c:.2} m/s");
    Ok(())
}

fn cmd_state(args: &FluidArgs, t: f64, p: f64) -> FluidResult<()> {
    let fluid = args.build()?;
    let pack = fluid.property_pack(k(t), pa(p))?;
    info!(summary = %pack.summary(), "state evaluated");
    println!("Fluid:          {}", fluid.species());
    println!("Temperature:    {:.2} K", pack.t.value);
    println!("Pressure:       {:.1} Pa", pack.p.value);
    println!("Density:        {:.4} kg/m³", pack.rho.value);
    println!("Sound speed:    {:.2} m/s", pack.a.value);
    println!("Vapor pressure: {:.1} Pa", pack.p_vap.value);
    println!(
        "Phase:          {}",
        if pack.is_subcooled() {
            "subcooled liquid"
        } else {
            "at or below saturation"
        }
    );
    Ok(())
}

fn cmd_vapor_pressure(args: &FluidArgs, t: f64) -> FluidResult<()> {
    let fluid = args.build()?;
    let p_v = fluid.vapor_pressure(t)?;
    println!("Fluid:          {}", fluid.species());
    println!("Temperature:    {t:.2} K");
    println!("Vapor pressure: {p_v:.1} Pa");
    Ok(())
}

fn cmd_fluids(query: &str) {
    let entries = filter_liquid_catalog(query);
    if entries.is_empty() {
        println!("No fluids match '{query}'.");
        return;
    }

    println!("Fluids:");
    for entry in entries {
        println!(
            "  {} ({}) - {}, aliases: {}",
            entry.canonical_id,
            entry.formula,
            entry.display_name,
            entry.aliases.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_density_flags() {
        let cli = Cli::try_parse_from([
            "tp-cli", "density", "--fluid", "dfp", "--t", "300", "--p", "2e5",
        ])
        .unwrap();
        match cli.command {
            Commands::Density { fluid, t, p, omega } => {
                assert_eq!(fluid.fluid, "dfp");
                assert_eq!(t, 300.0);
                assert_eq!(p, 2.0e5);
                assert!(omega.is_none());
            }
            _ => panic!("expected density"),
        }
    }

    #[test]
    fn solver_flags_reach_the_fluid() {
        let cli = Cli::try_parse_from([
            "tp-cli",
            "pressure",
            "--rho",
            "790",
            "--tolerance",
            "0.01",
            "--max-iterations",
            "20",
        ])
        .unwrap();
        let Commands::Pressure { fluid, .. } = cli.command else {
            panic!("expected pressure");
        };
        let built = fluid.build().unwrap();
        assert_eq!(built.newton_config().step_tolerance, 0.01);
        assert_eq!(built.newton_config().max_iterations, 20);
    }

    #[test]
    fn unknown_fluid_fails_to_build() {
        let args = FluidArgs {
            fluid: "water".into(),
            tolerance: None,
            max_iterations: None,
        };
        assert!(args.build().is_err());
    }
}
