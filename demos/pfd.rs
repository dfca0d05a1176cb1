//! Partial fraction decomposition walkthrough.
//!
//! Decomposes (z³ − 4z² − 2z + 17) / (z − 3)² and prints the result both as
//! LaTeX and as an evaluation check at a sample point.

use quintus::prelude::*;

fn main() -> Result<(), DecomposeError> {
    let p = Polynomial::from_descending(
        [1.0, -4.0, -2.0, 17.0]
            .iter()
            .map(|&x| Complex64::new(x, 0.0))
            .collect(),
    );
    let q = Polynomial::from_root(Complex64::new(3.0, 0.0), 2);

    let d = decompose(&p, &q, DEFAULT_EPSILON)?;

    println!("p(z) = {}", p.to_latex());
    println!("q(z) = {}", q.to_latex());

    print!("p(z)/q(z) = {}", d.polynomial_part.to_latex());
    for term in &d.terms {
        print!(" + {}", term.to_latex());
    }
    println!();

    let z = Complex64::new(1.0, 1.0);
    println!("check at z = {}:", z);
    println!("  direct:        {}", chop(p.eval(z) / q.eval(z), 1e-12));
    println!("  decomposition: {}", chop(d.eval(z), 1e-12));

    Ok(())
}
