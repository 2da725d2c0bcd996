use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::rng::RngStream;
use crate::types::{Palette, PaletteKind, DEFAULT_PALETTE_SIZE};

/// Print a generated colour palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Palette kind: pastel, vibrant, mono, random, pink, blue, green
    #[arg(default_value = "pastel")]
    pub kind: String,

    /// Number of colours to generate
    #[arg(long, short = 'n', default_value_t = DEFAULT_PALETTE_SIZE)]
    pub count: usize,

    /// Integer seed; anything else is unseeded
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<String>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = generate(&args);

    if palette.kind.is_unknown() {
        printer.warning("Unknown", &format!("palette '{}', using pastel", palette.kind));
    }
    printer.status(
        "Generated",
        &format!("{} ({})", plural(palette.len(), "colour", "colours"), palette.kind),
    );

    // Hex colours go to stdout so they can be piped.
    for colour in palette.colours() {
        println!("{}", colour);
    }

    Ok(())
}

fn generate(args: &PaletteArgs) -> Palette {
    let mut rng = RngStream::from_input(args.seed.as_deref());
    Palette::generate(&PaletteKind::parse(&args.kind), args.count, &mut rng)
}
