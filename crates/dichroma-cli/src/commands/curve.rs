//! Curve command: print the model constants

use anyhow::Result;
use dichroma_color::Simulator;
use dichroma_color::space::reference;

pub fn run(simulator: &Simulator) -> Result<()> {
    let reference = reference();
    let dichromacy = simulator.dichromacy();
    let curve = simulator.curve();
    let q = curve.quadratic();

    println!("Profile: {}", dichromacy.name);
    println!();
    println!("Reference (D50 adapted sRGB):");
    for (name, p) in [
        ("white", reference.white),
        ("red", reference.red),
        ("green", reference.green),
        ("blue", reference.blue),
    ] {
        println!("  {:<6} x={:.6} y={:.6} Y={:.6}", name, p.x, p.y, p.luminance);
    }
    println!();
    println!(
        "Copunctal point: ({:.4}, {:.4})",
        dichromacy.copunctal.0, dichromacy.copunctal.1
    );
    for (i, (x, y)) in curve.anchors().iter().enumerate() {
        println!("Anchor {}:        ({:.5}, {:.5})", i + 1, x, y);
    }
    println!();
    println!("Vision curve: y = A*x^2 + B*x + C");
    println!("  A = {:.6}", q.a);
    println!("  B = {:.6}", q.b);
    println!("  C = {:.6}", q.c);
    Ok(())
}
