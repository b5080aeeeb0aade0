//! Ship Registry - Binary Entry Point
//!
//! Builds the sample fleets, merges and patches them, and prints each step
//! along with a handful of float comparisons.

use std::fmt::Write as _;

use ship_registry::fleet::report;
use ship_registry::ordering::{nan_with_payload, sort_weak, Strength};
use ship_registry::{Fleet, Ship, ShipClass};

fn ships() -> Fleet {
    [
        Ship::new("Defiant", "NX-74205", ShipClass::Defiant, 2370),
        Ship::new("Enterprise", "NCC-1701", ShipClass::Constitution, 2245),
        Ship::new("Excelsior", "NCC-2000", ShipClass::Excelsior, 2285),
        Ship::new("Phoenix", "NCC-65420", ShipClass::Nebula, 2363),
        Ship::new("Reliant", "NCC-1864", ShipClass::Miranda, 2267),
        Ship::new("Sutherland", "NCC-72015", ShipClass::Nebula, 2367),
        Ship::new("Voyager", "NCC-74656", ShipClass::Intrepid, 2371),
    ]
    .into_iter()
    .collect()
}

fn runabouts() -> Fleet {
    [
        Ship::new("Ganges", "NCC-72454", ShipClass::Danube, 2369),
        Ship::new("Orinoco", "NCC-72905", ShipClass::Danube, 2370),
        Ship::new("Rio Grande", "NCC-72452", ShipClass::Danube, 2369),
        Ship::new("Rubicon", "NCC-72936", ShipClass::Danube, 2371),
        Ship::new("Shenandoah", "NCC-73024", ShipClass::Danube, 2373),
        Ship::new("Yangtzee Kiang", "NCC-72453", ShipClass::Danube, 2369),
    ]
    .into_iter()
    .collect()
}

fn replacements() -> Fleet {
    [
        Ship::new("Defiant", "NX-74205-A", ShipClass::Defiant, 2375),
        Ship::new("Enterprise", "NCC-1701-D", ShipClass::Galaxy, 2363),
    ]
    .into_iter()
    .collect()
}

fn write_sections(out: &mut String) -> Result<Fleet, std::fmt::Error> {
    let mut fleet = ships();
    report::write_fleet(out, "Here are some ships", &fleet)?;

    let mut runabouts = runabouts();
    report::write_fleet(out, "Deep Space Nine runabouts", &runabouts)?;

    fleet.merge(&mut runabouts);
    report::write_fleet(out, "Combine them all together", &fleet)?;

    // Sometimes ships get blown up and have to be replaced.
    fleet.replace_by_name(replacements());
    report::write_fleet(out, "Updated list with replacements", &fleet)?;

    let defiant = Ship::new("Defiant", "NX-74205-A", ShipClass::Defiant, 2375);
    let enterprise = Ship::new("Enterprise", "NCC-1701-D", ShipClass::Galaxy, 2363);
    report::write_comparison(out, &defiant, &enterprise, &defiant.compare(&enterprise))?;

    let nan1 = nan_with_payload(1);
    let nan2 = nan_with_payload(2);
    let cases = [
        ("1", "2", Strength::Partial, 1.0, 2.0),
        ("1", "1", Strength::Partial, 1.0, 1.0),
        ("inf", "1", Strength::Partial, f32::INFINITY, 1.0),
        ("NaN(1)", "NaN(2)", Strength::Partial, nan1, nan2),
        ("NaN(1)", "NaN(2)", Strength::Weak, nan1, nan2),
        ("NaN(1)", "NaN(2)", Strength::Strong, nan1, nan2),
    ];
    for (lhs, rhs, strength, a, b) in cases {
        report::write_comparison(out, lhs, rhs, &strength.compare_f32(a, b))?;
    }

    let mut floats = [2.0, nan1, f32::INFINITY, nan2, nan1, 1.0];
    sort_weak(&mut floats);
    for value in floats {
        write!(out, "{value},")?;
    }
    writeln!(out)?;

    Ok(fleet)
}

fn main() {
    println!("===========================================");
    println!("  Ship Registry");
    println!("===========================================");
    println!();

    let mut out = String::new();
    let fleet = match write_sections(&mut out) {
        Ok(fleet) => fleet,
        Err(e) => {
            println!("  ERROR: failed to render report: {e}");
            return;
        }
    };
    print!("{out}");

    match fleet.digest_hex() {
        Ok(digest) => println!("Fleet digest: {digest}"),
        Err(e) => println!("  ERROR: failed to digest fleet: {e}"),
    }
}
