//! Print the CIE 1931 coordinates of the hex colors given on the
//! command line, or of a random color if there are none.
//!
//!     cargo run --example xy -- FF8000 1e293b

use std::{env, error::Error};
use cie_color::{get_cie_color, hex::parse_hex, CieColor};

type Err = Box<dyn Error>;

fn print_color(hex: &str) -> Result<(), Err> {
    let c = parse_hex(hex)?;
    let [x, y] = c.cie1931();
    let [cx, cy] = c.xyz().chromaticity();
    println!("#{:02x}{:02x}{:02x}  approx. ({x:.4}, {y:.4})  \
              chromaticity ({cx:.4}, {cy:.4})",
             c.r, c.g, c.b);
    Ok(())
}

fn main() -> Result<(), Err> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        let [x, y] = get_cie_color(None);
        println!("random  approx. ({x:.4}, {y:.4})");
    }
    for hex in &args {
        print_color(hex)?;
    }
    Ok(())
}
