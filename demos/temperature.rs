//! Interval units: conversions between Kelvin, Celsius and Fahrenheit

use dimal::{systems::si::*, Unit};

fn main() {
    for c in [-273.15f64, -40.0, 0.0, 37.0, 100.0] {
        let t = Celsius::quantity(c);
        println!(
            "{c:>8.2} °C = {:>8.2} °F = {:>8.2} K",
            t.convert::<Fahrenheit>().get(),
            t.convert::<Kelvin>().get()
        );
    }

    let mut room = Fahrenheit::quantity(68.0f64);
    room += Fahrenheit::quantity(4.0f64);
    println!("warmer room: {:.2} °C", room.convert::<Celsius>().get());
}
