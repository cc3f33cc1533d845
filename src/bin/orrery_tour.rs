//! Inspect the orrery simulation from the command line
//!
//! Prints the standard catalog, body positions at a chosen simulation time,
//! the Lagrange points of a body pair, a small field probe, and optionally
//! a transfer dry-run. `--json` switches to machine-readable output.

use clap::Parser;
use orrery::coordinates::Planar;
use orrery::Orrery;
use serde_json::json;

#[derive(Parser)]
#[command(
    name = "orrery_tour",
    about = "Inspect body positions, Lagrange points, and transfers in the standard orrery"
)]
struct Args {
    /// Simulation time to evaluate at
    #[arg(short, long, default_value_t = 0.0)]
    time: f64,

    /// Primary body for the Lagrange report (and transfer departure)
    #[arg(long, default_value = "Earth")]
    primary: String,

    /// Secondary body for the Lagrange report (and transfer arrival)
    #[arg(long, default_value = "Mars")]
    secondary: String,

    /// Run a transfer departure at --time and sample the probe flight
    #[arg(long)]
    transfer: bool,

    /// Emit JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut orrery = Orrery::standard();
    let t = args.time;

    let lagrange = orrery.lagrange_points(&args.primary, &args.secondary, t)?;

    if args.json {
        let bodies: Vec<_> = orrery
            .catalog()
            .bodies()
            .map(|body| {
                let pos = orrery.position(&body.name, t).expect("catalog body");
                json!({
                    "name": body.name,
                    "orbit_radius": body.orbit_radius,
                    "mass": body.mass,
                    "position": pos,
                    "field_depression": orrery.field_depression(pos, t),
                })
            })
            .collect();

        let mut report = json!({
            "time": t,
            "bodies": bodies,
            "lagrange": {
                "primary": args.primary,
                "secondary": args.secondary,
                "points": lagrange,
            },
        });

        if args.transfer {
            orrery.start_transfer(&args.primary, &args.secondary, t)?;
            report["transfer"] = json!({
                "departure": args.primary,
                "arrival": args.secondary,
                "departure_time": t,
                "probe_start": orrery.probe_position(t),
                "probe_end": orrery.probe_position(t + 1.0),
                "rendezvous_error": orrery.rendezvous_error(t + 1.0),
                "optimality": orrery.transfer_optimality(t + 1.0),
            });
        }

        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Orrery Tour");
    println!("===========");
    println!("Simulation time: {}", t);

    println!("\nBodies:");
    for body in orrery.catalog().bodies() {
        let pos = orrery.position(&body.name, t)?;
        let depth = orrery.field_depression(pos, t);
        println!(
            "  {:<8} r={:>7.2}  mass={:>7.3}  position=({:>9.3}, {:>9.3})  well={:.3}",
            body.name, body.orbit_radius, body.mass, pos.x, pos.z, depth
        );
    }

    println!(
        "\nLagrange points for {} / {}:",
        args.primary, args.secondary
    );
    for (label, point) in [
        ("L1", lagrange.l1),
        ("L2", lagrange.l2),
        ("L4", lagrange.l4),
        ("L5", lagrange.l5),
    ] {
        println!("  {}: ({:>9.3}, {:>9.3})", label, point.x, point.z);
    }

    println!("\nField probe along +x:");
    for i in 0..6 {
        let point = Planar::new(i as f64 * 40.0, 0.0);
        println!(
            "  ({:>5.0}, 0): {:.4}",
            point.x,
            orrery.field_depression(point, t)
        );
    }

    if args.transfer {
        orrery.start_transfer(&args.primary, &args.secondary, t)?;
        println!(
            "\nTransfer {} -> {} departing at t={}:",
            args.primary, args.secondary, t
        );
        for i in 0..=5 {
            let sample_t = t + i as f64 * 0.25;
            let probe = orrery.probe_position(sample_t).expect("transfer started");
            let error = orrery.rendezvous_error(sample_t).expect("transfer started");
            let quality = orrery.transfer_optimality(sample_t).expect("transfer started");
            println!(
                "  t={:>6.2}  probe=({:>9.3}, {:>9.3})  miss={:>8.3}  optimality={:.2}",
                sample_t, probe.x, probe.z, error, quality
            );
        }
    }

    Ok(())
}
