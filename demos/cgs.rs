//! CGS units, and their conversion into SI ones

use dimal::{
    systems::{cgs::*, si},
    Unit,
};

fn main() {
    let x = si::Gram::quantity(4.0f64);
    let y = Second::quantity(10.0f64);
    let z = x / y;
    println!("{} g/s = {}", z.get(), z.convert::<dimal::Derived<(si::Kilogram, dimal::Pow<Second, -1>)>>());

    let force = Dyne::quantity(2.5e5f64);
    println!("{force} = {} N", force.convert::<si::Newton>().get());

    let g = Gal::quantity(980.665f64);
    println!("standard gravity: {} m/s²", g.convert::<si::MetrePerSecondSquared>().get());

    let viscosity = Poise::quantity(0.01f64);
    println!("water: {} Pa·s", viscosity.convert::<si::PascalSecond>().get());
}
