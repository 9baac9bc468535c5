use std::fmt::Display;
use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgMatches, Command};
use fixed_vec::{FixedVector, NamedFixedVec};
use fixed_vec_derive::NamedFixedVec;
use log::{LevelFilter, debug, info};
use num_dual::Dual64;

const GRAVITY: f64 = 9.81;

#[derive(Debug, Copy, Clone, NamedFixedVec)]
struct Body<T> {
    x: T,
    y: T,
    vx: T,
    vy: T,
}

type Body64 = Body<f64>;

fn dynamics(body: &Body64) -> Body64 {
    Body {
        x: body.vx,
        y: body.vy,
        vx: 0.0,
        vy: -GRAVITY,
    }
}

fn smoke_check<T: Display + Copy, const N: usize>(
    out: &mut impl Write,
    v: &FixedVector<T, N>,
) -> Result<()> {
    writeln!(out, "{v}")?;
    writeln!(out, "{}", v.to_string())?;
    let v2 = *v;
    writeln!(out, "{v2}")?;
    writeln!(out, "{}", v2.to_string())?;
    Ok(())
}

fn run_smoke() -> Result<()> {
    let mut out = io::stdout().lock();

    let zeros = FixedVector::<i32, 5>::zeros();
    smoke_check(&mut out, &zeros)?;

    let arr = [1, 2, 3, 4, 5, 6];
    let ints = FixedVector::<i32, 6>::from_slice(&arr)?;
    smoke_check(&mut out, &ints)?;

    let floats = FixedVector::from([1.633, -684901.0, 4923.42, 752.1 / 83.1, 5e8, 6.0]);
    smoke_check(&mut out, &floats)?;

    info!("Smoke check passed");
    Ok(())
}

fn run_projectile(matches: &ArgMatches) -> Result<()> {
    let steps = matches
        .get_one::<usize>("steps")
        .copied()
        .context("missing --steps")?;
    let dt = matches
        .get_one::<f64>("dt")
        .copied()
        .context("missing --dt")?;
    let speed = matches
        .get_one::<f64>("speed")
        .copied()
        .context("missing --speed")?;
    let angle = matches
        .get_one::<f64>("angle")
        .copied()
        .context("missing --angle")?;

    if dt <= 0.0 {
        bail!("--dt must be greater than 0, got {dt}");
    }

    let heading = FixedVector::from([angle.to_radians().cos(), angle.to_radians().sin()]);
    let velocity = speed * heading;
    let mut body = Body64::from_fixed(&FixedVector::from([0.0, 0.0, velocity[0], velocity[1]]));

    info!("Launching at {speed} m/s, {angle} deg, dt = {dt} s, up to {steps} steps");

    for step in 1..=steps {
        body += dynamics(&body) * dt;
        debug!("Step {step}: state = {:.3}", body.to_fixed());

        if body.y <= 0.0 {
            let landing = FixedVector::from([body.x, body.y]);
            info!(
                "Landed after {step} steps ({:.3} s) at {landing:.3}, distance {:.3} m",
                step as f64 * dt,
                landing.norm()
            );
            return Ok(());
        }
    }

    info!(
        "Still airborne after {steps} steps at {:.3}",
        FixedVector::from([body.x, body.y])
    );
    Ok(())
}

fn run_gradient() -> Result<()> {
    let point = FixedVector::<f64, 3>::from([3.0, -12.0, -4.0]);
    let dual_point = point.map(Dual64::from);

    let make_perturbed = |i: usize| {
        let mut perturbed = dual_point;
        perturbed[i].eps = 1.0;
        perturbed
    };

    let mut gradient = FixedVector::<f64, 3>::zeros();
    for i in 0..point.dim() {
        gradient[i] = make_perturbed(i).norm().eps;
    }

    info!("norm({point}) = {}", point.norm());
    info!("grad norm({point}) = {gradient:.4}");
    Ok(())
}

fn cli() -> Command {
    Command::new("app")
        .version(clap::crate_version!())
        .about("Demonstrations of fixed-dimension vectors")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("smoke").about("Print zero, integer and float vectors"))
        .subcommand(
            Command::new("projectile")
                .about("Integrate a point mass under gravity")
                .arg(
                    Arg::new("steps")
                        .short('n')
                        .long("steps")
                        .default_value("1000")
                        .value_parser(clap::value_parser!(usize))
                        .help("Maximum number of integration steps"),
                )
                .arg(
                    Arg::new("dt")
                        .long("dt")
                        .default_value("0.01")
                        .value_parser(clap::value_parser!(f64))
                        .help("Time step in seconds"),
                )
                .arg(
                    Arg::new("speed")
                        .short('s')
                        .long("speed")
                        .default_value("20.0")
                        .value_parser(clap::value_parser!(f64))
                        .help("Launch speed in m/s"),
                )
                .arg(
                    Arg::new("angle")
                        .short('a')
                        .long("angle")
                        .default_value("45.0")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64))
                        .help("Launch angle in degrees above the horizon"),
                ),
        )
        .subcommand(Command::new("gradient").about("Differentiate a norm with dual numbers"))
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("FIXED_VEC_LOG", "info"))
        .init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("smoke", _)) => run_smoke(),
        Some(("projectile", sub)) => run_projectile(sub),
        Some(("gradient", _)) => run_gradient(),
        _ => unreachable!("subcommand_required is set"),
    }
}
